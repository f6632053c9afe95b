//! Viewport that reports scroll requests instead of scrolling.

use mfl_config::ScrollBehavior;
use mfl_nav::Viewport;

/// Logs each scroll request with the configured behavior.
pub(crate) struct ConsoleViewport {
    behavior: ScrollBehavior,
    requests: usize,
}

impl ConsoleViewport {
    pub(crate) fn new(behavior: ScrollBehavior) -> Self {
        Self {
            behavior,
            requests: 0,
        }
    }

    pub(crate) fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Number of scroll requests received.
    pub(crate) fn requests(&self) -> usize {
        self.requests
    }
}

impl Viewport for ConsoleViewport {
    fn scroll_to_element(&mut self, id: &str) {
        self.requests += 1;
        tracing::info!(id, behavior = %self.behavior, "Scroll requested");
    }
}
