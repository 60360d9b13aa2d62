//! Stepline CLI - project purchase statuses onto progress timelines
//!
//! # Commands
//! - `stepline project` - Project one status and print (or save) the result
//! - `stepline flows` - Print the happy path of every (kind, role) pair
//! - `stepline schema` - Print (or save) JSON Schemas of the request/response contract

mod config;
mod flows;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use project::ProjectArgs;
use std::path::PathBuf;
use stepline_status::{contract_schemas, write_schema_files};

/// Stepline status timeline CLI
#[derive(Parser)]
#[command(name = "stepline")]
#[command(
    author,
    version,
    about = "Project purchase statuses onto progress timelines"
)]
struct Cli {
    /// Config file (default: $STEPLINE_CONFIG, then ./stepline.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a status onto its badge and timeline
    Project(ProjectArgs),

    /// Print the happy path for every transaction kind and role
    Flows,

    /// Print JSON Schemas of the projection request and response
    Schema {
        /// Output directory (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    stepline_observe::init_stderr_tracing(&config.logging.filter, config.logging.format)?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Project(args) => project::run_project_command(&args, &config.projection_options()),
        Commands::Flows => flows::run_flows_command(),
        Commands::Schema { out } => run_schema_command(out),
    }
}

fn run_schema_command(out: Option<PathBuf>) -> Result<()> {
    let schemas = contract_schemas()?;
    match out {
        Some(dir) => {
            let (request, response) = write_schema_files(&dir, &schemas)?;
            println!("Schemas saved to:");
            println!("  {}", request.display());
            println!("  {}", response.display());
        }
        None => {
            let both = serde_json::json!({
                "request": schemas.request,
                "response": schemas.response,
            });
            println!("{}", serde_json::to_string_pretty(&both)?);
        }
    }
    Ok(())
}
