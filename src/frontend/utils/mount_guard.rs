use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Tracks whether the view that started an async operation still exists. Results which
/// arrive after the view is gone must not be applied.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// A guard which stays mounted until [MountGuard::unmount] is called.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A guard tied to the current reactive owner, it unmounts on cleanup.
    pub fn scoped() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        leptos::prelude::on_cleanup(move || on_unmount.unmount());
        guard
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
