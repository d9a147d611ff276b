mod config;
mod error;
mod export;
mod locale;
mod logging;
mod tui;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_planner, resolve_seed_path};
use crate::export::ExportFormat;

#[derive(Parser)]
#[command(name = "vlf")]
#[command(about = "Team vacation planner with peer approval", long_about = None)]
struct Cli {
    /// Path to a JSON seed file with the team roster
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive planner (the default)
    Plan,
    /// Write the planner state to stdout or a file
    Export {
        /// Output format: json, yaml or ics
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let seed = resolve_seed_path(cli.seed);
    let planner = load_planner(seed.as_deref())?;

    match cli.command.unwrap_or(Command::Plan) {
        Command::Plan => {
            let today = chrono::Local::now().date_naive();
            tui::run(planner, today)?;
        }
        Command::Export { format, output } => {
            let rendered = export::export(&planner, format)?;
            match output {
                Some(path) => fs::write(path, rendered)?,
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
