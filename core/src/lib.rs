//! # Stepline Core
//!
//! Shared vocabulary and output types for projecting a purchase status onto
//! a progress timeline. The projection itself lives in `stepline-flow`.

pub mod badge;
pub mod error;
pub mod mapper;
pub mod progress;
pub mod step;
pub mod timeline;
pub mod vocabulary;

pub use badge::{Badge, badge_label};
pub use error::VocabularyError;
pub use mapper::{DisplayStatus, aliases, resolve};
pub use progress::ProgressView;
pub use step::{Step, StepState};
pub use timeline::Timeline;
pub use vocabulary::{RawStatus, Role, Status, TransactionKind};
