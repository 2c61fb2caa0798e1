//! Progress display while saving large batches

use crate::io::configuration::PROGRESS_MIN_BATCH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Saving: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the images of a batch
///
/// Batches smaller than `PROGRESS_MIN_BATCH` get no bar, since they finish
/// before a bar would be readable.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl ProgressManager {
    /// Create a manager with no active bar
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: 0,
        }
    }

    /// Prepare for `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.completed = 0;
        self.bar = (image_count >= PROGRESS_MIN_BATCH).then(|| {
            let bar = ProgressBar::new(image_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
    }

    /// Record one processed image
    pub fn advance(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of images recorded since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Whether a visible bar is active
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
