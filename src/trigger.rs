use crate::region::{Region, Ticket};

use pokedex::{Page, Source, aggregate};

use std::sync::Arc;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinSet};

/// Rolls on every empty line (or `g`) of the input, until `q` or the end of it.
///
/// Rolls still in flight when the input ends are awaited, so the region
/// always settles on the outcome of the latest one.
pub async fn listen<S>(
    input: impl AsyncBufRead + Unpin,
    source: Arc<S>,
    region: Arc<Region>,
) -> io::Result<()>
where
    S: Source + Send + Sync + 'static,
{
    let mut lines = input.lines();
    let mut rolls = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" | "g" => {
                let ticket = region.ticket();
                region.show(ticket, &Page::Loading).await?;

                let source = source.clone();
                let region = region.clone();

                // Earlier rolls keep running, but can no longer show anything
                let _ = rolls.spawn(async move { roll(source.as_ref(), &region, ticket).await });
            }
            "q" => break,
            command => log::warn!("Unknown command: {command}"),
        }

        while let Some(result) = rolls.try_join_next() {
            report(result);
        }
    }

    if !rolls.is_empty() {
        log::info!("Waiting for {} roll(s) to finish", rolls.len());
    }

    while let Some(result) = rolls.join_next().await {
        report(result);
    }

    Ok(())
}

/// Rolls exactly once and returns the page it settled on.
pub async fn once(source: &impl Source, region: &Region) -> io::Result<Page> {
    let ticket = region.ticket();
    region.show(ticket, &Page::Loading).await?;

    roll(source, region, ticket).await
}

async fn roll(source: &impl Source, region: &Region, ticket: Ticket) -> io::Result<Page> {
    let page = aggregate::page(aggregate::roll(source).await);

    let _ = region.show(ticket, &page).await?;

    Ok(page)
}

fn report(result: Result<io::Result<Page>, JoinError>) {
    match result {
        Ok(Ok(_page)) => {}
        Ok(Err(error)) => log::error!("{error}"),
        Err(error) => log::error!("roll panicked: {error}"),
    }
}
