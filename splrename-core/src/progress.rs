//! Coarse progress reporting for rename runs.
//!
//! The engines drive a `ProgressSink` once per record; sinks decide how to
//! surface it. Core ships a silent sink and a console sink that prints
//! roughly every 10% of the total; the CLI installs an indicatif bar.

/// Receives per-record completion events from the engines.
pub trait ProgressSink {
    fn begin(&mut self, total: usize);
    /// Called after record `index` (0-based) has been processed, whether it
    /// was renamed, skipped or failed.
    fn record_done(&mut self, index: usize);
    fn finish(&mut self);
}

/// Sink that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn begin(&mut self, _total: usize) {}
    fn record_done(&mut self, _index: usize) {}
    fn finish(&mut self) {}
}

/// Prints a counting line about every 10% of the total.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    total: usize,
    interval: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Decimation interval: ceil(total/10), never zero.
pub(crate) fn report_interval(total: usize) -> usize {
    total.div_ceil(10).max(1)
}

impl ProgressSink for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.interval = report_interval(total);
        eprintln!(
            "Renaming the files. Output shows file counting every {} files",
            self.interval
        );
    }

    fn record_done(&mut self, index: usize) {
        if index % self.interval == 0 {
            eprintln!("Files processed: {}/{}", index + 1, self.total);
        }
    }

    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Files processed: {}/{}", self.total, self.total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_a_tenth_rounded_up() {
        assert_eq!(report_interval(100), 10);
        assert_eq!(report_interval(101), 11);
        assert_eq!(report_interval(9), 1);
        assert_eq!(report_interval(25), 3);
    }

    #[test]
    fn interval_never_zero() {
        assert_eq!(report_interval(0), 1);
        assert_eq!(report_interval(1), 1);
    }
}
