//! Stepline Flow - Status Timeline Projection
//!
//! This crate turns one stored status into an annotated progress timeline:
//! - `table`: the static happy path per (kind, role)
//! - `annotate`: completed / current / future along the happy path
//! - `branch`: cancelled, returned, rescheduled and no-show handling
//! - `dedupe`: one step per id
//! - `engine`: `project`, which wires the above together
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no Async.

pub mod annotate;
pub mod branch;
pub mod dating;
pub mod dedupe;
pub mod engine;
pub mod table;

pub use annotate::{Annotation, annotate};
pub use branch::{Branch, BranchInput, apply_branch};
pub use dedupe::dedupe;
pub use engine::{ProjectionInput, ProjectionOptions, project};
pub use table::{Flow, FlowStep, branch_step, flow_for};
