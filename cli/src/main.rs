use clap::{CommandFactory, Parser, Subcommand};
use puzpress_export::fetch::HttpFetcher;
use puzpress_export::pipeline::{self, ExportJob, ItemOutcome};
use puzpress_export::render::ChromiumEngine;

#[derive(Parser)]
#[command(name = "puzpress", version, about = "Downloads and exports crosswords to PDF")]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Export Private Eye crosswords for a range of issue numbers.
    PrivateEye {
        /// First crossword number to export.
        num_min: u32,
        /// Last crossword number to export (defaults to NUM_MIN).
        num_max: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // Unrecognized modes fall back to the usage text.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    match cli.mode {
        Some(Mode::PrivateEye { num_min, num_max }) => {
            let job = ExportJob::private_eye();
            let fetcher = HttpFetcher::new();
            let range = num_min..=num_max.unwrap_or(num_min);

            let outcomes = pipeline::run_range(&job, range, &fetcher, ChromiumEngine::new).await?;

            let written = outcomes
                .iter()
                .filter(|outcome| matches!(outcome, ItemOutcome::Written { .. }))
                .count();
            println!("exported {} of {} puzzles", written, outcomes.len());
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
