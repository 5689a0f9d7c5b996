mod resource;

pub mod ability;
pub mod encounter;
pub mod html;
pub mod subject;
pub mod text;
pub mod view;

pub use ability::Ability;
pub use html::Page;
pub use resource::Resource;
pub use subject::Subject;
pub use view::View;
