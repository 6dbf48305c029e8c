//! Detection data model for the Rust waste-sorting platform.
//!
//! The modules mirror the legacy sorting server's detection contract while
//! providing a typed destination enum, fail-fast validation, and a stable
//! JSON projection for transport.

pub mod intake;
pub mod model;
pub mod prelude;
pub mod telemetry;

pub use intake::DetectionIntake;
pub use model::{DetectionRecord, Destination};
pub use prelude::{ValidationError, ValidationResult};
