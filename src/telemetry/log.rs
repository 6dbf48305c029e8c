use log::{info, warn};

/// Thin wrapper over the `log` facade used at the intake boundary.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// Rejections are surfaced at warn level so they stand out in the
    /// server's default log filter.
    pub fn record_rejection(&self, message: &str) {
        warn!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
