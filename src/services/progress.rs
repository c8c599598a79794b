/// Receives the running count of processed colors.
///
/// Fire-and-forget: observers cannot fail the enumeration.
pub trait ProgressObserver {
    fn on_progress(&mut self, processed: u64);
}

impl<F: FnMut(u64)> ProgressObserver for F {
    fn on_progress(&mut self, processed: u64) {
        self(processed)
    }
}

/// Discards progress signals
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _processed: u64) {}
}

/// Logs progress through `tracing`
pub struct TracingProgress {
    total: u64,
}

impl TracingProgress {
    pub fn new(total: u64) -> Self {
        Self { total }
    }
}

impl ProgressObserver for TracingProgress {
    fn on_progress(&mut self, processed: u64) {
        let percent = if self.total == 0 {
            100.0
        } else {
            processed as f64 * 100.0 / self.total as f64
        };
        tracing::info!(
            processed,
            total = self.total,
            percent = (percent * 10.0).round() / 10.0,
            "{processed} colors"
        );
    }
}
