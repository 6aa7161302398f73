use grid_logging::{get_fetch_generation, grid_info, grid_warn};
use walletgrid_core::Severity;

/// Fire-and-forget notification collaborator; no return value consumed.
pub trait ToastSink: Send + Sync {
    fn open_toast(&self, message: &str, severity: Severity);
}

/// Default sink that routes toasts to the log. Headless hosts and tests
/// use this; a real presentation layer substitutes its own.
pub struct LogToastSink;

impl ToastSink for LogToastSink {
    fn open_toast(&self, message: &str, severity: Severity) {
        match severity {
            // The generation tag correlates the toast with the fetch
            // that triggered it.
            Severity::Error => {
                grid_warn!("toast (error) [gen {}]: {message}", get_fetch_generation())
            }
            Severity::Info => grid_info!("toast: {message}"),
        }
    }
}
