//! Explicit zoom-reset handles.
//!
//! A map view that supports click-to-zoom hands its owner a
//! [`ResetHandle`] at construction time. The owner invokes it to restore
//! the identity transform (the "Reset View" button). This replaces the
//! ambient window-global callbacks an earlier incarnation of the
//! dashboard registered, which made reset behavior depend on whichever
//! view mounted last.

/// A callable handle that resets its originating map view's zoom.
pub struct ResetHandle {
    reset: Box<dyn Fn() + Send + Sync>,
}

impl ResetHandle {
    /// Wraps a view's reset action.
    #[must_use]
    pub fn new(reset: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            reset: Box::new(reset),
        }
    }

    /// Triggers the reset.
    pub fn invoke(&self) {
        (self.reset)();
    }
}

impl std::fmt::Debug for ResetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::ResetHandle;

    #[test]
    fn invokes_the_wrapped_action() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&resets);

        let handle = ResetHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        handle.invoke();
        handle.invoke();
        assert_eq!(resets.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn handles_are_independent_per_view() {
        let bundesland_resets = Arc::new(AtomicUsize::new(0));
        let kreis_resets = Arc::new(AtomicUsize::new(0));

        let a = Arc::clone(&bundesland_resets);
        let b = Arc::clone(&kreis_resets);
        let bundesland = ResetHandle::new(move || {
            a.fetch_add(1, Ordering::SeqCst);
        });
        let kreis = ResetHandle::new(move || {
            b.fetch_add(1, Ordering::SeqCst);
        });

        bundesland.invoke();
        kreis.invoke();
        bundesland.invoke();

        assert_eq!(bundesland_resets.load(Ordering::SeqCst), 2);
        assert_eq!(kreis_resets.load(Ordering::SeqCst), 1);
    }
}
