// SPDX-License-Identifier: MPL-2.0
//! Asset availability types.
//!
//! Each of the two images moves through its own small state machine; the
//! overall display state is derived from both and never stored.

use std::fmt;

/// Which side of the comparison an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    Before,
    After,
}

impl AssetSlot {
    /// Both slots, in display order.
    pub const ALL: [AssetSlot; 2] = [AssetSlot::Before, AssetSlot::After];
}

impl fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSlot::Before => write!(f, "before"),
            AssetSlot::After => write!(f, "after"),
        }
    }
}

/// Load status of a single asset.
///
/// `Pending` is the only initial state. `Loaded` and `Failed` are terminal
/// for the URL they were reached with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl AssetStatus {
    /// Returns true once the status can no longer change for the current URL.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// Which assets failed when the display state is [`DisplayState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedAssets {
    Before,
    After,
    Both,
}

impl FailedAssets {
    /// Returns true if exactly one of the two images failed.
    #[must_use]
    pub fn is_single(self) -> bool {
        !matches!(self, FailedAssets::Both)
    }
}

/// Overall state the renderer uses to choose what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Failed(FailedAssets),
    Ready,
}

impl DisplayState {
    /// Derives the display state from the two slot statuses.
    ///
    /// Failure wins over loading, loading wins over ready.
    #[must_use]
    pub fn derive(before: AssetStatus, after: AssetStatus) -> Self {
        match (before, after) {
            (AssetStatus::Failed, AssetStatus::Failed) => DisplayState::Failed(FailedAssets::Both),
            (AssetStatus::Failed, _) => DisplayState::Failed(FailedAssets::Before),
            (_, AssetStatus::Failed) => DisplayState::Failed(FailedAssets::After),
            (AssetStatus::Loaded, AssetStatus::Loaded) => DisplayState::Ready,
            _ => DisplayState::Loading,
        }
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(self, DisplayState::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AssetStatus::{Failed, Loaded, Pending};

    #[test]
    fn both_loaded_is_ready() {
        assert_eq!(DisplayState::derive(Loaded, Loaded), DisplayState::Ready);
    }

    #[test]
    fn any_pending_without_failure_is_loading() {
        assert_eq!(DisplayState::derive(Pending, Pending), DisplayState::Loading);
        assert_eq!(DisplayState::derive(Loaded, Pending), DisplayState::Loading);
        assert_eq!(DisplayState::derive(Pending, Loaded), DisplayState::Loading);
    }

    #[test]
    fn failure_dominates_and_reports_which_side() {
        assert_eq!(
            DisplayState::derive(Failed, Loaded),
            DisplayState::Failed(FailedAssets::Before)
        );
        assert_eq!(
            DisplayState::derive(Pending, Failed),
            DisplayState::Failed(FailedAssets::After)
        );
        assert_eq!(
            DisplayState::derive(Failed, Failed),
            DisplayState::Failed(FailedAssets::Both)
        );
    }

    #[test]
    fn single_versus_both_failures() {
        assert!(FailedAssets::Before.is_single());
        assert!(FailedAssets::After.is_single());
        assert!(!FailedAssets::Both.is_single());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!Pending.is_terminal());
        assert!(Loaded.is_terminal());
        assert!(Failed.is_terminal());
    }
}
