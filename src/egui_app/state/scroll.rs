use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the scene's scroll container may scroll.
///
/// Scrolling is enabled while no [`ScrollLock`] is alive. Clones share the
/// same counter.
#[derive(Clone, Debug, Default)]
pub struct ScrollGate {
    holders: Rc<Cell<usize>>,
}

impl ScrollGate {
    /// Disable scrolling until the returned lock is dropped.
    pub fn acquire(&self) -> ScrollLock {
        self.holders.set(self.holders.get() + 1);
        ScrollLock {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn scrolling_enabled(&self) -> bool {
        self.holders.get() == 0
    }

    pub fn active_locks(&self) -> usize {
        self.holders.get()
    }
}

/// Scoped "scrolling disabled" token.
#[derive(Debug)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
    }
}
