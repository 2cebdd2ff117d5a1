mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use ffmetactl::config::Config;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Show { file, json, field } => {
            commands::show::run(&file, json, field.as_deref(), cli.quiet)?;
        }
        Commands::Normalize {
            file,
            output,
            pretty,
        } => {
            let config = Config::load()?;
            commands::normalize::run(&file, output.as_deref(), pretty, &config, cli.quiet)?;
        }
        Commands::Export { file, output } => {
            commands::export::run(&file, output.as_deref())?;
        }
        Commands::Import {
            book,
            chapters,
            output,
            pretty,
        } => {
            let config = Config::load()?;
            commands::import::run(
                &book,
                chapters.as_deref(),
                output.as_deref(),
                pretty,
                &config,
                cli.quiet,
            )?;
        }
        Commands::Grouping { text, json } => {
            commands::grouping::run(&text, json)?;
        }
        Commands::Fields => {
            commands::fields::run()?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}
