//! Progress indicators for long-running operations
//!
//! Uses `linya` for allocation-free progress bars

use linya::{Bar, Progress};

/// Progress bar over the artifact collection phase
pub struct CollectProgress {
  progress: Progress,
  bar: Bar,
}

impl CollectProgress {
  /// Create a new progress bar spanning `total` artifacts
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Increment progress by 1
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
