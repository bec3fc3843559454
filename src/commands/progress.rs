//! Terminal progress bar for `tls run`

use indicatif::{ProgressBar, ProgressStyle};

use telescope_core::executor::{ProgressCallback, ProgressEvent};

/// Progress bar driven by executor events
#[derive(Clone)]
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// A visible bar on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{prefix:>12} [{bar:30.white}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix("Cases");
        Self { bar }
    }

    /// A bar that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Callback to hand to the executor
    pub fn callback(&self) -> ProgressCallback {
        let bar = self.bar.clone();
        Box::new(move |event: &ProgressEvent| match event {
            ProgressEvent::Started { total } => {
                bar.set_length(*total as u64);
                bar.set_position(0);
            }
            ProgressEvent::ModelStarted { model } => bar.set_message(model.clone()),
            ProgressEvent::CaseFinished { completed, .. } => {
                bar.set_position(*completed as u64);
            }
        })
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
