use crate::Result;
use crate::encounter::Encounter;
use crate::{Resource, Subject, ability, subject};

/// Where the aggregator gets its raw resources from.
pub trait Source {
    fn subject(&self, id: subject::Id) -> impl Future<Output = Result<Subject>> + Send;

    fn ability(&self, ability: &Resource) -> impl Future<Output = Result<ability::Details>> + Send;

    fn encounters(&self, subject: &Subject) -> impl Future<Output = Result<Vec<Encounter>>> + Send;
}
