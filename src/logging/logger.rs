//! Thin logger handed to commands.
use std::sync::atomic::{AtomicUsize, Ordering};

/// Structured logger that forwards to [`tracing`] and counts warnings.
///
/// Console and filtering behaviour is decided by the subscriber installed in
/// [`init_subscriber`](super::subscriber::init_subscriber); without one every
/// call is a no-op apart from the warning counter.
#[derive(Debug, Default)]
pub struct Logger {
    warnings: AtomicUsize,
}

impl Logger {
    /// Create a new logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "hyprkeys::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Number of warnings logged so far.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_counted() {
        let log = Logger::new();
        log.info("not counted");
        log.debug("not counted");
        log.error("not counted");
        assert_eq!(log.warning_count(), 0);
        log.warn("one");
        log.warn("two");
        assert_eq!(log.warning_count(), 2);
    }
}
