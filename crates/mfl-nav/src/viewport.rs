//! Viewport collaborator that performs scroll requests.

/// Scrolls the page to the element anchored at a section id.
///
/// Requests are fire-and-forget. Animation, easing and superseding of
/// in-flight scrolls belong to the implementation.
pub trait Viewport {
    /// Bring the element with the given id into view.
    fn scroll_to_element(&mut self, id: &str);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
    fn scroll_to_element(&mut self, id: &str) {
        (**self).scroll_to_element(id);
    }
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn scroll_to_element(&mut self, id: &str) {
        (**self).scroll_to_element(id);
    }
}

/// Viewport that discards every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullViewport;

impl Viewport for NullViewport {
    fn scroll_to_element(&mut self, _id: &str) {}
}

/// Viewport that records requests in order, for tests.
#[cfg(any(test, feature = "mock"))]
#[derive(Clone, Debug, Default)]
pub struct RecordingViewport {
    requests: Vec<String>,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingViewport {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids requested so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Drain the recorded requests.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.requests)
    }
}

#[cfg(any(test, feature = "mock"))]
impl Viewport for RecordingViewport {
    fn scroll_to_element(&mut self, id: &str) {
        self.requests.push(id.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_viewport_keeps_order() {
        let mut viewport = RecordingViewport::new();
        viewport.scroll_to_element("a");
        viewport.scroll_to_element("b");

        assert_eq!(viewport.requests(), ["a", "b"]);
        assert_eq!(viewport.take(), vec!["a", "b"]);
        assert!(viewport.requests().is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn scroll<V: Viewport>(mut viewport: V) {
            viewport.scroll_to_element("x");
        }

        let mut viewport = RecordingViewport::new();
        scroll(&mut viewport);

        assert_eq!(viewport.requests(), ["x"]);
    }

    #[test]
    fn test_boxed_dyn_forwards() {
        let mut boxed: Box<dyn Viewport> = Box::new(NullViewport);
        boxed.scroll_to_element("ignored");
    }
}
