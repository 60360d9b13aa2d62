//! `stepline flows` - print the happy path for every (kind, role) pair

use anyhow::Result;
use std::fmt::Write;
use stepline_core::{Role, TransactionKind};
use stepline_flow::Flow;

pub fn run_flows_command() -> Result<()> {
    print!("{}", render_flows()?);
    Ok(())
}

pub fn render_flows() -> Result<String> {
    let mut out = String::new();
    for kind in TransactionKind::ALL {
        for role in Role::ALL {
            let flow = Flow::for_transaction(kind, role);
            writeln!(out, "{kind} / {role}")?;
            for (position, step) in flow.steps().iter().enumerate() {
                writeln!(
                    out,
                    "  {}. {:<12} {} ({})",
                    position + 1,
                    step.id(),
                    step.label,
                    step.description
                )?;
            }
            writeln!(out)?;
        }
    }
    Ok(out)
}
