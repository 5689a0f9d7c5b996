//! Merges a creature and its secondary lookups into a single [`View`].

use crate::encounter::{self, Encounter};
use crate::subject::Id;
use crate::{Ability, Error, Page, Result, Source, Subject, View};

use futures_util::future;

/// Aggregates a uniformly random creature.
pub async fn roll(source: &impl Source) -> Result<View> {
    aggregate(source, Id::random()).await
}

/// Fetches the creature with the given id, then resolves its abilities and
/// encounters concurrently.
///
/// Any failure along the way fails the whole aggregation.
pub async fn aggregate(source: &impl Source, id: Id) -> Result<View> {
    let subject = source.subject(id).await?;

    log::info!(
        "Resolving #{id} {name} ({abilities} abilities)",
        name = subject.name,
        abilities = subject.abilities.len()
    );

    let (abilities, encounters) =
        future::try_join(abilities(source, &subject), encounters(source, &subject)).await?;

    Ok(View::new(subject, abilities, encounters))
}

/// Resolves every ability of the subject, in order.
pub async fn abilities(source: &impl Source, subject: &Subject) -> Result<Vec<Ability>> {
    future::try_join_all(subject.abilities.iter().map(|ability| async move {
        let details = source.ability(ability).await?;

        Ok::<_, Error>(Ability::resolve(&ability.name, &details))
    }))
    .await
}

pub async fn encounters(source: &impl Source, subject: &Subject) -> Result<encounter::Index> {
    let encounters: Vec<Encounter> = source.encounters(subject).await?;

    Ok(encounter::Index::from_encounters(&encounters))
}

/// Turns the outcome of an aggregation into what the display should show.
///
/// Failures all collapse into [`Page::Failed`]; the cause is only logged.
pub fn page(result: Result<View>) -> Page {
    match result {
        Ok(view) => Page::Ready(view),
        Err(error) => {
            log::error!("{error}");

            Page::Failed
        }
    }
}
