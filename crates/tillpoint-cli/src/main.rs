//! CLI entry point.
//!
//! Installs logging, parses arguments and dispatches to the handlers. Errors
//! are reported once here with an exit code chosen by `CliError`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tillpoint_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.data_dir.as_deref())?;

    match command {
        Commands::Paths => handlers::paths::execute(&config),
        Commands::Serve {
            port,
            allow_origins,
        } => handlers::serve::execute(&config, port, allow_origins).await,
        Commands::Menu { command } => {
            let ctx = bootstrap(&config).await?;
            handlers::menu::execute(&ctx, command).await
        }
        Commands::Stock { command } => {
            let ctx = bootstrap(&config).await?;
            handlers::stock::execute(&ctx, command).await
        }
        Commands::Pay {
            amount,
            method,
            key,
        } => {
            let ctx = bootstrap(&config).await?;
            handlers::pay::execute(&ctx, amount, method, key).await
        }
        Commands::Payments => {
            let ctx = bootstrap(&config).await?;
            handlers::pay::list(&ctx).await
        }
        Commands::Order { details } => {
            let ctx = bootstrap(&config).await?;
            handlers::order::execute(&ctx, &details).await
        }
        Commands::Kitchen { command } => {
            let ctx = bootstrap(&config).await?;
            handlers::kitchen::execute(&ctx, command).await
        }
        Commands::Settings { command } => {
            let ctx = bootstrap(&config).await?;
            handlers::settings::execute(&ctx, command).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env first so RUST_LOG and TILLPOINT_* can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_err = CliError::from_anyhow(&err);
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {cli_err}");
            ExitCode::from(cli_err.exit_code())
        }
    }
}
