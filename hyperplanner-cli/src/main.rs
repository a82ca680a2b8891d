//! hyperplanner CLI - course catalog service entry point
//!
//! - `serve`: run the HTTP listener (bulk submission, filtered read, named operations)
//! - `import`: bulk-insert courses from a JSON file
//! - `query`: filtered read printed as JSON

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "hyperplanner",
    author,
    version,
    about = "Course catalog service backed by MongoDB"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Insert every course from a JSON file
    Import(commands::import::ImportArgs),
    /// Print courses matching the given attributes
    Query(commands::query::QueryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Import(args) => commands::run_import(args).await,
        Commands::Query(args) => commands::run_query(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
