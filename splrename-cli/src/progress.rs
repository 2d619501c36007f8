use indicatif::{ProgressBar, ProgressStyle};
use splrename_core::{NullProgress, ProgressSink};

/// Interactive progress bar for rename runs.
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl ProgressSink for BarProgress {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{bar:40.green} {pos}/{len} files")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn record_done(&mut self, _index: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Pick a sink: a bar for interactive runs, silence for quiet or JSON runs.
pub fn progress_sink(quiet: bool) -> Box<dyn ProgressSink> {
    if quiet {
        Box::new(NullProgress)
    } else {
        Box::new(BarProgress::new())
    }
}
