//! MutationLock - serializes read-modify-write cycles on preferences
//!
//! Single-flag edits, whole-list moves and order-index assignment all take
//! this lock, so a move's renumbering never interleaves with another edit.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct MutationLock {
    inner: Arc<Mutex<()>>,
}

impl MutationLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, ()> {
        self.inner.lock()
    }
}
