/// Source of navigation-completion signals.
///
/// The host invokes each registered handler once per completed navigation,
/// including the very first page load, after the new content is attached.
/// Delivery is strictly sequential; a handler finishes before the next
/// signal is delivered.
pub trait NavigationSource {
    fn subscribe(&mut self, handler: Box<dyn FnMut()>);
}

/// In-process navigation feed with replay-latest semantics.
///
/// `navigated` announces a completed navigation to every subscriber in
/// subscription order. A handler that subscribes after at least one
/// navigation has completed is invoked once immediately, catching it up
/// with the already-displayed document.
#[derive(Default)]
pub struct DocumentFeed {
    handlers: Vec<Box<dyn FnMut()>>,
    navigations: u64,
}

impl DocumentFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce that a navigation has completed and the new content is
    /// attached. The first call is the initial page load.
    pub fn navigated(&mut self) {
        self.navigations += 1;
        tracing::debug!(navigation = self.navigations, "navigation completed");
        for handler in &mut self.handlers {
            handler();
        }
    }

    pub fn navigations(&self) -> u64 {
        self.navigations
    }
}

impl NavigationSource for DocumentFeed {
    fn subscribe(&mut self, mut handler: Box<dyn FnMut()>) {
        if self.navigations > 0 {
            handler();
        }
        self.handlers.push(handler);
    }
}
