use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Stage messages are printed as lines; per-item progress is drawn with an
/// indicatif bar that is cleared when the stage completes or fails. When
/// stderr is not a terminal indicatif hides the bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    const BAR_TEMPLATE: &'static str =
        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        match pb_option.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) => pb.clone(),
            _ => {
                if let Some(previous) = pb_option.take() {
                    previous.finish_and_clear();
                }
                let pb = ProgressBar::new(total as u64);
                if let Ok(style) = ProgressStyle::default_bar().template(Self::BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                *pb_option = Some(pb.clone());
                pb
            }
        }
    }

    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| log::warn!("{}", message)),
            None => log::warn!("{}", message),
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("📖 Loading overrides");
        reporter.report_progress(1, 3, Some("flask"));
        reporter.report_progress(2, 3, Some("requests"));
        reporter.report("message while the bar is active");
        reporter.report_warning("No license found for repository pallets/flask");
        assert!(reporter.progress_bar.borrow().is_some());
        reporter.report_completion("✅ Done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_new_total_replaces_bar() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 3, None);
        reporter.report_progress(1, 5, None);
        let length = reporter
            .progress_bar
            .borrow()
            .as_ref()
            .and_then(|pb| pb.length());
        assert_eq!(length, Some(5));
        reporter.report_error("stopped");
        assert!(reporter.progress_bar.borrow().is_none());
    }
}
