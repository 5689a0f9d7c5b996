mod config;
mod region;
mod trigger;

use crate::config::Config;
use crate::region::{Output, Region};

use pokedex::{Page, Session};

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{self, BufReader};

/// Shows a random Pokémon on every Enter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Roll a single Pokémon and exit; fails if it could not be fetched
    #[arg(long)]
    once: bool,

    /// Print pages to stdout instead of writing an HTML file
    #[arg(long)]
    stdout: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anywho::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();

    let config = Config::load().await?;
    let session = Session::new(&config.api, config.timeout())?;

    let output = if args.stdout {
        Output::Stdout
    } else {
        let path = config.output();
        log::info!("Showing results in {}", path.display());

        Output::File(path)
    };

    let region = Arc::new(Region::new(output));

    if args.once {
        let page = trigger::once(&session, &region).await?;

        return Ok(if page == Page::Failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    log::info!("Press Enter to roll a random Pokémon, q to quit");

    trigger::listen(BufReader::new(io::stdin()), Arc::new(session), region).await?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_are_parsed() {
        let args = Args::try_parse_from(["dexroll", "--once", "--stdout"]).unwrap();
        assert!(args.once);
        assert!(args.stdout);

        let args = Args::try_parse_from(["dexroll"]).unwrap();
        assert!(!args.once);
        assert!(!args.stdout);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["dexroll", "--twice"]).is_err());
    }
}
