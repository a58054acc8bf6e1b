// SPDX-License-Identifier: MPL-2.0
//! Scoped registration of window-wide input listeners.
//!
//! While a drag is active the slider must hear pointer/touch movement and
//! release anywhere in the window, not only over the divider. Registrations
//! are handed out as [`ListenerGuard`]s that release themselves on drop, so
//! every exit path (release, cancel, teardown, or simply dropping the
//! component) unregisters exactly once.
//!
//! The renderer asks [`ListenerRegistry::is_registered`] before forwarding a
//! window-wide event; an event whose listener is not registered never reaches
//! the controller.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Kinds of window-wide listeners a drag session needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalListener {
    PointerMove,
    PointerUp,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl GlobalListener {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        match self {
            GlobalListener::PointerMove => 0,
            GlobalListener::PointerUp => 1,
            GlobalListener::TouchMove => 2,
            GlobalListener::TouchEnd => 3,
            GlobalListener::TouchCancel => 4,
        }
    }
}

/// Every listener a drag session acquires.
pub const DRAG_LISTENERS: &[GlobalListener] = &[
    GlobalListener::PointerMove,
    GlobalListener::PointerUp,
    GlobalListener::TouchMove,
    GlobalListener::TouchEnd,
    GlobalListener::TouchCancel,
];

#[derive(Debug, Default)]
struct Table {
    counts: [AtomicUsize; GlobalListener::COUNT],
}

/// Shared table of active listener registrations.
///
/// Cloning yields another handle onto the same table.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    table: Arc<Table>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `kinds` and returns the guard that owns the registration.
    #[must_use = "dropping the guard unregisters the listeners immediately"]
    pub fn acquire(&self, kinds: &'static [GlobalListener]) -> ListenerGuard {
        for kind in kinds {
            self.table.counts[kind.index()].fetch_add(1, Ordering::AcqRel);
        }
        ListenerGuard {
            registry: self.clone(),
            kinds,
        }
    }

    /// Returns true if at least one guard currently holds `kind`.
    #[must_use]
    pub fn is_registered(&self, kind: GlobalListener) -> bool {
        self.registrations(kind) > 0
    }

    /// Number of live registrations for `kind`.
    #[must_use]
    pub fn registrations(&self, kind: GlobalListener) -> usize {
        self.table.counts[kind.index()].load(Ordering::Acquire)
    }

    /// Total number of live registrations across all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.table
            .counts
            .iter()
            .map(|count| count.load(Ordering::Acquire))
            .sum()
    }

    fn release(&self, kinds: &[GlobalListener]) {
        for kind in kinds {
            // Saturating: a release can never drive a count below zero.
            let _ = self.table.counts[kind.index()].fetch_update(
                Ordering::AcqRel,
                Ordering::Acquire,
                |count| count.checked_sub(1),
            );
        }
    }
}

/// Owns one registration of a set of listeners; releases it on drop.
#[derive(Debug)]
pub struct ListenerGuard {
    registry: ListenerRegistry,
    kinds: &'static [GlobalListener],
}

impl ListenerGuard {
    /// Listener kinds held by this guard.
    #[must_use]
    pub fn kinds(&self) -> &'static [GlobalListener] {
        self.kinds
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.release(self.kinds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_is_empty() {
        let registry = ListenerRegistry::new();
        assert_eq!(registry.total(), 0);
        for kind in DRAG_LISTENERS {
            assert!(!registry.is_registered(*kind));
        }
    }

    #[test]
    fn guard_registers_and_releases_on_drop() {
        let registry = ListenerRegistry::new();
        let guard = registry.acquire(DRAG_LISTENERS);
        assert_eq!(registry.total(), DRAG_LISTENERS.len());
        assert!(registry.is_registered(GlobalListener::PointerMove));
        assert_eq!(guard.kinds(), DRAG_LISTENERS);

        drop(guard);
        assert_eq!(registry.total(), 0);
        assert!(!registry.is_registered(GlobalListener::PointerUp));
    }

    #[test]
    fn clones_share_the_same_table() {
        let registry = ListenerRegistry::new();
        let view = registry.clone();
        let _guard = registry.acquire(&[GlobalListener::TouchMove]);
        assert!(view.is_registered(GlobalListener::TouchMove));
        assert!(!view.is_registered(GlobalListener::PointerMove));
    }

    #[test]
    fn nested_guards_count_independently() {
        let registry = ListenerRegistry::new();
        let first = registry.acquire(&[GlobalListener::PointerMove]);
        let second = registry.acquire(&[GlobalListener::PointerMove]);
        assert_eq!(registry.registrations(GlobalListener::PointerMove), 2);
        drop(first);
        assert!(registry.is_registered(GlobalListener::PointerMove));
        drop(second);
        assert!(!registry.is_registered(GlobalListener::PointerMove));
    }
}
