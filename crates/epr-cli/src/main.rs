mod audit;
mod report;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "epr-cli")]
#[command(about = "EPR packaging-registration audit for marketplace sellers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sweep every seller and report FR/DE registration compliance
    Audit {
        /// Sellers per listing page (overrides `EPR_PAGE_SIZE`)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: Option<u32>,
        /// Page cutoff for the sweep (overrides `EPR_MAX_PAGES`)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_pages: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the resolved configuration with secrets redacted
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = epr_core::load_app_config().context("failed to load configuration")?;

    // Logs go to stderr so a JSON report on stdout stays machine-readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Audit {
            page_size,
            max_pages,
            format,
        } => {
            let options = audit::AuditOptions {
                page_size: page_size.unwrap_or(config.page_size),
                max_pages: max_pages.unwrap_or(config.max_pages),
                format,
            };
            audit::run_audit(&config, options).await?;
        }
        Commands::Config => println!("{config:#?}"),
    }

    Ok(())
}
