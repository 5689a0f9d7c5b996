use pokedex::{Page, html};

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// The single place where pages are shown.
///
/// Every trigger takes a [`Ticket`]; pages shown with an outdated ticket are
/// discarded, so the latest trigger always owns the region.
#[derive(Debug)]
pub struct Region {
    output: Output,
    latest: AtomicU64,
    writing: Mutex<()>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Region {
    pub fn new(output: Output) -> Self {
        Self {
            output,
            latest: AtomicU64::new(0),
            writing: Mutex::new(()),
        }
    }

    pub fn ticket(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Replaces the contents of the region, unless the ticket is outdated.
    pub async fn show(&self, ticket: Ticket, page: &Page) -> io::Result<bool> {
        let _writing = self.writing.lock().await;

        if !self.is_current(ticket) {
            log::debug!("Discarding page of outdated trigger {}", ticket.0);
            return Ok(false);
        }

        match &self.output {
            Output::File(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).await?;
                }

                fs::write(path, html::document(&page.render())).await?;
            }
            Output::Stdout => {
                let mut stdout = tokio::io::stdout();

                stdout.write_all(page.render().as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        Ok(true)
    }
}
