use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::path::Path;

/// A per-file progress bar on stderr.
///
/// When disabled the bar is hidden and every method is a no-op apart from
/// running the closure handed to [`FileProgress::suspend`].
pub struct FileProgress {
    pb: ProgressBar,
}

impl FileProgress {
    pub fn new(total_files: usize, enabled: bool) -> Self {
        let pb = if enabled {
            let pb = ProgressBar::new(total_files as u64).with_style(Self::bar_style());
            pb.set_draw_target(ProgressDrawTarget::stderr());
            pb
        } else {
            ProgressBar::hidden()
        };
        Self { pb }
    }

    pub fn start(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.pb.set_message(name);
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    /// Runs `f` with the bar cleared so that its output does not interleave.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.pb.position()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("##-")
    }
}
