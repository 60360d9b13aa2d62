//! `stepline project` - project one status onto its timeline

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};
use stepline_core::{RawStatus, Role, TransactionKind};
use stepline_flow::ProjectionOptions;
use stepline_status::{ProjectionRequest, project_request, write_projection_file};

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Read the request JSON from a file (`-` for stdin) instead of flags
    #[arg(short, long, conflicts_with_all = ["status", "kind", "role"])]
    pub input: Option<PathBuf>,

    /// Stored status, e.g. `shipped`, `in_progress`, `cancelled`
    #[arg(short, long, required_unless_present = "input")]
    pub status: Option<String>,

    /// Transaction kind (product, service)
    #[arg(short, long, required_unless_present = "input")]
    pub kind: Option<TransactionKind>,

    /// Viewer role (buyer, seller)
    #[arg(short, long, required_unless_present = "input")]
    pub role: Option<Role>,

    /// Creation time of the order or booking (RFC 3339)
    #[arg(long)]
    pub created: Option<String>,

    /// Last happy-path status before a cancellation or no-show
    #[arg(long)]
    pub previous: Option<String>,

    /// Transaction id, echoed in the output and used as the file name
    #[arg(long)]
    pub id: Option<String>,

    /// Write `<id>.timeline.json` into this directory instead of printing
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run_project_command(args: &ProjectArgs, options: &ProjectionOptions) -> Result<()> {
    let request = build_request(args)?;
    let view = project_request(request, options);

    match &args.out {
        Some(dir) => {
            let path = write_projection_file(dir, &view)?;
            println!("Projection saved to: {}", path.display());
        }
        None => {
            let json = if args.compact {
                serde_json::to_string(&view)?
            } else {
                serde_json::to_string_pretty(&view)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

pub fn build_request(args: &ProjectArgs) -> Result<ProjectionRequest> {
    if let Some(input) = &args.input {
        let json = read_input(input)?;
        return ProjectionRequest::from_json(&json).context("Failed to parse projection request");
    }

    let status = args.status.as_deref().context("--status is required")?;
    let kind = args.kind.context("--kind is required")?;
    let role = args.role.context("--role is required")?;

    let mut request = ProjectionRequest::new(RawStatus::parse(status), kind, role);
    request.creation_timestamp = args.created.clone();
    request.previous_status = args.previous.as_deref().map(RawStatus::parse);
    request.transaction_id = args.id.clone();
    Ok(request)
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read request file: {}", input.display()))
    }
}
