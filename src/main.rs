mod cli;
mod client;
mod commands;
mod config;
mod error;
mod merge;
mod output;
mod pagination;
mod queries;
mod star;
mod types;

#[cfg(test)]
mod test_utils;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use client::GitHubClient;
use config::Config;
use error::Result;
use pagination::PaginationController;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "gh_issues=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gh-issues", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = GitHubClient::new(config.token()?, config.endpoint()?, config.timeout())?;
            let mut controller = PaginationController::new(client);

            match command {
                Commands::Issues(args) => {
                    let path = config.resolve_path(args.path.as_deref())?;
                    commands::issues::list(&mut controller, path, &args).await?;
                }
                Commands::Browse(args) => {
                    let path = config.resolve_path(args.path.as_deref())?;
                    commands::browse::run(&mut controller, path, &args).await?;
                }
                Commands::Star(args) => {
                    let path = config.resolve_path(args.path.as_deref())?;
                    commands::star::toggle(&mut controller, path).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
