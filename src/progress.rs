use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Interactive discovery feedback on stderr
pub struct ProgressReporter {
    term: Term,
    visited: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            visited: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    /// Reporter for interactive terminals only
    pub fn for_stderr() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_discovery(&mut self, root: &str) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Discovering dependencies of {}...",
            style("🔍").cyan(),
            style(root).green().bold()
        );
        self.visited.store(0, Ordering::Relaxed);
        self.current_bar = Some(self.create_spinner("Querying dependency source..."));
    }

    pub fn visiting_package(&self, package: &str, depth: usize) {
        let count = self.visited.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("#{count} {package} (depth {depth})"));
        }
    }

    pub fn finish_discovery(&mut self, packages: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "{} Discovery complete: {} package{}",
            style("✓").green(),
            style(packages).yellow().bold(),
            if packages == 1 { "" } else { "s" }
        );
    }

    pub fn abort_discovery(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.abandon();
        }
    }
}
