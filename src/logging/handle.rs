use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the logging backends alive.
///
/// Dropping the handle flushes and stops the background file writer, so
/// hold it for as long as logs should reach the file sink.
pub struct LoggingHandle {
    file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub(crate) fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    /// Returns `true` when a file sink is active.
    pub fn has_file_sink(&self) -> bool {
        self.file_guard.is_some()
    }

    /// Flushes the file sink and releases it.
    pub fn shutdown(mut self) {
        let had_file = self.file_guard.is_some();
        tracing::info!(file_sink = had_file, "Logging shutdown");
        drop(self.file_guard.take());
    }
}
