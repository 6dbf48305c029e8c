use serde_json::Value;

use crate::model::DetectionRecord;
use crate::prelude::ValidationResult;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Construct-and-validate boundary for externally sourced detection
/// payloads, with accept/reject accounting.
///
/// The server hands each request body to `accept` and branches on the
/// result; valid records go on to `to_json` for storage or transport.
pub struct DetectionIntake {
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl DetectionIntake {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Builds a record from `input`, validates it, and records the outcome.
    pub fn accept(&self, input: &Value) -> ValidationResult<DetectionRecord> {
        let record = DetectionRecord::from_value(input);
        match record.validate() {
            Ok(()) => {
                self.metrics.record_accepted();
                self.logger.record(&format!(
                    "accepted detection routed to {}",
                    record.destination
                ));
                Ok(record)
            }
            Err(err) => {
                self.metrics.record_rejected();
                self.logger
                    .record_rejection(&format!("rejected detection: {}", err));
                Err(err)
            }
        }
    }

    /// `(accepted, rejected)` counts since construction.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}

impl Default for DetectionIntake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn intake_counts_accepted_and_rejected() {
        let intake = DetectionIntake::new();

        let record = intake
            .accept(&json!({
                "count": 2,
                "objects": ["bottle", "can"],
                "destination": "dry",
            }))
            .unwrap();
        assert_eq!(record.count, json!(2));

        let err = intake
            .accept(&json!({ "destination": "plastic" }))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid destination: plastic."));

        assert_eq!(intake.metrics(), (1, 1));
    }

    #[test]
    fn empty_payload_is_accepted_with_defaults() {
        let intake = DetectionIntake::new();
        let record = intake.accept(&json!({})).unwrap();
        assert_eq!(record.destination, json!("none"));
        assert_eq!(intake.metrics(), (1, 0));
    }
}
