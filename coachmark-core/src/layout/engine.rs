// SPDX-License-Identifier: LGPL-3.0-only
use indexmap::IndexMap;

use crate::layout::{EdgeAnchor, LayoutConstraint};
use crate::view::ViewId;

/// A host layout engine that enforces active constraints.
pub trait LayoutEngine {
    /// Start enforcing a constraint.
    ///
    /// An equivalent constraint (same anchor pair) already installed is replaced.
    fn install(&mut self, constraint: LayoutConstraint);

    /// Stop enforcing the constraint between two anchors.
    fn uninstall(&mut self, first: EdgeAnchor, second: EdgeAnchor) -> Option<LayoutConstraint>;
}

/// Stores active constraints in installation order.
///
/// Constraints are keyed by their anchor pair, so re-running a fill only
/// replaces what is already there.
#[derive(Debug, Clone, Default)]
pub struct ConstraintRegistry {
    constraints: IndexMap<(EdgeAnchor, EdgeAnchor), LayoutConstraint>,
}

impl ConstraintRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of installed constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether no constraint is installed.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterate over installed constraints in installation order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutConstraint> {
        self.constraints.values()
    }

    /// Constraints whose first anchor belongs to `view`.
    pub fn constraints_for(&self, view: ViewId) -> impl Iterator<Item = &LayoutConstraint> {
        self.constraints.values().filter(move |c| c.first.view == view)
    }

    /// Drop every constraint that mentions `view` on either side.
    ///
    /// Returns the number of constraints removed.
    pub fn remove_view(&mut self, view: ViewId) -> usize {
        let before = self.constraints.len();
        self.constraints
            .retain(|(first, second), _| first.view != view && second.view != view);
        let removed = before - self.constraints.len();
        if removed > 0 {
            log::debug!("Removed {} constraints referencing {}", removed, view);
        }
        removed
    }

    /// Remove all constraints.
    pub fn clear(&mut self) {
        self.constraints.clear();
    }
}

impl LayoutEngine for ConstraintRegistry {
    fn install(&mut self, constraint: LayoutConstraint) {
        log::debug!("Installing constraint {} == {}", constraint.first, constraint.second);
        self.constraints.insert(constraint.key(), constraint);
    }

    fn uninstall(&mut self, first: EdgeAnchor, second: EdgeAnchor) -> Option<LayoutConstraint> {
        let removed = self.constraints.shift_remove(&(first, second));
        if removed.is_some() {
            log::debug!("Uninstalled constraint {} == {}", first, second);
        }
        removed
    }
}
