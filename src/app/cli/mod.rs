//! CLI Adapter.

mod analyze;
mod form;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{AppError, Locale};

#[derive(Parser)]
#[command(name = "strategist")]
#[command(version)]
#[command(
    about = "Turn a customer profile into a two-angle insurance sales strategy",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sales-strategy analysis for a customer
    #[clap(visible_alias = "a")]
    Analyze {
        #[command(flatten)]
        input: ProfileArgs,
    },
    /// Print the prompt that would be sent, without calling the API
    #[clap(visible_alias = "p")]
    Prompt {
        #[command(flatten)]
        input: ProfileArgs,
    },
}

/// Where the profile and configuration come from.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ProfileArgs {
    /// Profile file (.toml, .json, .yml, .yaml). Prompts interactively when omitted
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Config file (defaults to ./strategist.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Set a profile field, e.g. --set quotes="too expensive"
    #[arg(short, long = "set", value_name = "FIELD=VALUE")]
    set: Vec<String>,
    /// Override the configured locale (zh-TW, en)
    #[arg(short, long)]
    locale: Option<Locale>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Analyze { input } => analyze::run_analyze(&input),
        Commands::Prompt { input } => analyze::run_prompt(&input).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
