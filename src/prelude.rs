pub use crate::intake::DetectionIntake;
pub use crate::model::{DetectionRecord, Destination};

/// Common error type for record validation.
///
/// Messages are part of the wire contract with the legacy server and must
/// stay byte-identical.
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid count")]
    InvalidCount,
    #[error("Objects must be an array")]
    ObjectsNotArray,
    #[error("Invalid destination: {0}. Valid options: {options}", options = Destination::options())]
    InvalidDestination(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
