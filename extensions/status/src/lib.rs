//! # Stepline Status
//!
//! The JSON surface of the projection engine.
//!
//! - **ProjectionRequest**: what a caller sends (camelCase JSON)
//! - **ProgressView**: what a rendering layer receives (badge + timeline)
//! - **\<id\>.timeline.json**: a projection written to disk
//! - **\*.schema.json**: JSON Schemas of both contracts

pub mod data;
pub mod projection;

pub use data::ProjectionRequest;
pub use projection::{
    ContractSchemas, contract_schemas, project_request, write_projection_file, write_schema_files,
};
