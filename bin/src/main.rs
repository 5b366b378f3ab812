//! correios CLI - Quote Correios shipments from the command line.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use commands::quote::QuoteArgs;

#[derive(Parser)]
#[command(name = "correios")]
#[command(about = "Quote prices and delivery times from the Correios calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote one or more services for a package
    Quote(QuoteArgs),

    /// Estimate a delivery date from a lead time and transit time
    Estimate {
        /// Days until the package is posted
        #[arg(long, default_value = "0")]
        ship_offset: u32,

        /// Days in transit
        #[arg(short, long, default_value = "1")]
        transit_days: u32,

        /// The service delivers on Saturdays
        #[arg(long)]
        saturday: bool,

        /// Start date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        from_date: Option<String>,
    },

    /// List the supported services
    Services {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Quote(args) => commands::quote::quote(args).await,
        Commands::Estimate {
            ship_offset,
            transit_days,
            saturday,
            from_date,
        } => commands::estimate::estimate(ship_offset, transit_days, saturday, from_date.as_deref()),
        Commands::Services { json } => commands::services::list_services(json),
    }
}
