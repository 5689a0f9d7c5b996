pub mod aggregate;
pub mod error;
pub mod session;
pub mod source;

pub use pokedex_core as core;

pub use crate::core::{Ability, Page, Resource, Subject, View};
pub use crate::core::{ability, encounter, html, subject, text, view};
pub use aggregate::aggregate;
pub use error::Error;
pub use session::Session;
pub use source::Source;

pub type Result<T, E = Error> = std::result::Result<T, E>;
