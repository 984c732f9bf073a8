//! Progress reporting for long per-issue loops
//!
//! The pipeline only sees these traits, so tests and `--quiet` runs draw nothing.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A running progress bar
pub trait ProgressHandle {
    fn inc(&self, n: u64);
    /// Show the item currently being processed
    fn set_item(&self, item: &str);
    fn finish(&self);
}

pub trait ProgressReporter {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle>;
}

/// Draws to stderr so stdout stays free for the run report
pub struct IndicatifProgress;

impl ProgressReporter for IndicatifProgress {
    fn start(&self, label: &str, total: u64) -> Box<dyn ProgressHandle> {
        let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        let template = format!("{label} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} issue #{{msg}}");
        if let Ok(style) = ProgressStyle::with_template(&template) {
            pb.set_style(style.progress_chars("##-"));
        }
        Box::new(IndicatifHandle(pb))
    }
}

struct IndicatifHandle(ProgressBar);

impl ProgressHandle for IndicatifHandle {
    fn inc(&self, n: u64) {
        self.0.inc(n);
    }

    fn set_item(&self, item: &str) {
        self.0.set_message(item.to_string());
    }

    fn finish(&self) {
        self.0.finish_and_clear();
    }
}

pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&self, _label: &str, _total: u64) -> Box<dyn ProgressHandle> {
        Box::new(NoopHandle)
    }
}

struct NoopHandle;

impl ProgressHandle for NoopHandle {
    fn inc(&self, _n: u64) {}
    fn set_item(&self, _item: &str) {}
    fn finish(&self) {}
}
