// SPDX-License-Identifier: LGPL-3.0-only
use std::fmt;

use crate::layout::LayoutEngine;
use crate::view::ViewId;

/// The axis an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top and bottom edges.
    Vertical,
    /// Leading and trailing edges.
    Horizontal,
}

/// A view edge that can take part in a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
    /// The leading edge (left in LTR, right in RTL).
    Leading,
    /// The trailing edge (right in LTR, left in RTL).
    Trailing,
}

impl Edge {
    /// The axis this edge lies on.
    pub fn axis(&self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Leading | Edge::Trailing => Axis::Horizontal,
        }
    }

    /// The two edges of an axis, in start/end order.
    pub fn of_axis(axis: Axis) -> [Edge; 2] {
        match axis {
            Axis::Vertical => [Edge::Top, Edge::Bottom],
            Axis::Horizontal => [Edge::Leading, Edge::Trailing],
        }
    }
}

/// An edge of a specific view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeAnchor {
    /// The view owning the edge.
    pub view: ViewId,
    /// The edge itself.
    pub edge: Edge,
}

impl EdgeAnchor {
    /// Create a new anchor.
    pub fn new(view: ViewId, edge: Edge) -> Self {
        Self { view, edge }
    }
}

impl fmt::Display for EdgeAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:?}", self.view, self.edge)
    }
}

/// An equality relation between two edges: `first == second + constant`.
///
/// A constraint is an inert descriptor until it is activated on a
/// [LayoutEngine].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstraint {
    /// The constrained edge.
    pub first: EdgeAnchor,
    /// The edge it is related to.
    pub second: EdgeAnchor,
    /// Offset added to the second edge.
    pub constant: f32,
    is_active: bool,
}

impl LayoutConstraint {
    /// Create an inactive constraint equating `first` to `second`.
    pub fn equal(first: EdgeAnchor, second: EdgeAnchor) -> Self {
        Self {
            first,
            second,
            constant: 0.0,
            is_active: false,
        }
    }

    /// Set the constant offset.
    pub fn with_constant(mut self, constant: f32) -> Self {
        self.constant = constant;
        self
    }

    /// Whether the constraint has been handed to an engine.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The `(first, second)` pair identifying equivalent constraints.
    pub fn key(&self) -> (EdgeAnchor, EdgeAnchor) {
        (self.first, self.second)
    }

    /// Mark the constraint active and install it on the engine.
    pub fn activate<E: LayoutEngine + ?Sized>(&mut self, engine: &mut E) {
        self.is_active = true;
        engine.install(*self);
    }

    /// Mark the constraint inactive and remove it from the engine.
    pub fn deactivate<E: LayoutEngine + ?Sized>(&mut self, engine: &mut E) {
        self.is_active = false;
        engine.uninstall(self.first, self.second);
    }
}
