use crate::data::ProjectionRequest;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use stepline_core::ProgressView;
use stepline_flow::{ProjectionOptions, project};

/// Project a wire request with the given options.
pub fn project_request(request: ProjectionRequest, options: &ProjectionOptions) -> ProgressView {
    project(&request.into_input(), options)
}

/// Write `<id>.timeline.json` (or `projection.timeline.json`) into `output_dir`.
pub fn write_projection_file(output_dir: &Path, view: &ProgressView) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    let stem = view
        .transaction_id
        .as_deref()
        .map(file_stem)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "projection".to_string());
    let path = output_dir.join(format!("{stem}.timeline.json"));

    let json = serde_json::to_string_pretty(view).context("Failed to serialize projection")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote projection");
    Ok(path)
}

/// JSON Schemas of the input and output contracts.
#[derive(Debug, Clone)]
pub struct ContractSchemas {
    pub request: Value,
    pub response: Value,
}

pub fn contract_schemas() -> Result<ContractSchemas> {
    let request = serde_json::to_value(schemars::schema_for!(ProjectionRequest))
        .context("Failed to serialize request schema")?;
    let response = serde_json::to_value(schemars::schema_for!(ProgressView))
        .context("Failed to serialize response schema")?;
    Ok(ContractSchemas { request, response })
}

pub fn write_schema_files(output_dir: &Path, schemas: &ContractSchemas) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;
    let request_path = output_dir.join("projection-request.schema.json");
    let response_path = output_dir.join("progress-view.schema.json");

    std::fs::write(&request_path, serde_json::to_string_pretty(&schemas.request)?)
        .context("Failed to write request schema")?;
    std::fs::write(&response_path, serde_json::to_string_pretty(&schemas.response)?)
        .context("Failed to write response schema")?;

    Ok((request_path, response_path))
}

fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepline_core::{Role, Status, TransactionKind};

    #[test]
    fn test_project_request_matches_engine() {
        let mut request = ProjectionRequest::new(Status::Cancelled, TransactionKind::Service, Role::Buyer);
        request.previous_status = Some(Status::Confirmed.into());
        request.creation_timestamp = Some("2024-04-01T10:00:00Z".to_string());

        let view = project_request(request, &ProjectionOptions::default());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["badge"]["label"], "Status: Cancelled");
        assert_eq!(json["badge"]["displayStatus"], "cancelled");
        assert_eq!(json["timeline"][0]["occurredAt"], "2024-04-01T10:00:00Z");
        assert_eq!(json["timeline"][2]["state"], "skipped");
        assert_eq!(json["timeline"][4]["id"], "cancelled");
        assert!(json.get("transactionId").is_none());
    }

    #[test]
    fn test_write_projection_file_uses_transaction_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut request = ProjectionRequest::new(Status::Shipped, TransactionKind::Product, Role::Buyer);
        request.transaction_id = Some("ord/9 1".to_string());

        let view = project_request(request, &ProjectionOptions::default());
        let path = write_projection_file(dir.path(), &view).unwrap();

        assert_eq!(path.file_name().unwrap(), "ord_9_1.timeline.json");
        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["transactionId"], "ord/9 1");
        assert_eq!(written["timeline"][2]["state"], "current");
    }

    #[test]
    fn test_write_projection_file_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let view = project_request(
            ProjectionRequest::new(Status::Pending, TransactionKind::Product, Role::Seller),
            &ProjectionOptions::default(),
        );
        let path = write_projection_file(&dir.path().join("nested"), &view).unwrap();
        assert_eq!(path.file_name().unwrap(), "projection.timeline.json");
    }

    #[test]
    fn test_contract_schemas() {
        let schemas = contract_schemas().unwrap();
        assert!(schemas.request["properties"].get("rawStatus").is_some());
        assert!(schemas.response["properties"].get("timeline").is_some());

        let dir = tempfile::tempdir().unwrap();
        let (request_path, response_path) = write_schema_files(dir.path(), &schemas).unwrap();
        assert!(request_path.exists());
        assert!(response_path.exists());
    }
}
