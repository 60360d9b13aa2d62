use thiserror::Error;

/// Failure to parse a vocabulary name coming from the wire or the command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("unknown status `{0}`")]
    UnknownStatus(String),
    #[error("unknown role `{0}` (expected buyer or seller)")]
    UnknownRole(String),
    #[error("unknown transaction kind `{0}` (expected product or service)")]
    UnknownKind(String),
}
