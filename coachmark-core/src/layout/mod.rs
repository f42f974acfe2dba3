// SPDX-License-Identifier: LGPL-3.0-only

//! Containment checks and fill constraints for views.

mod constraint;
mod containment;
mod direction;
mod engine;
mod fill;

pub use constraint::{Axis, Edge, EdgeAnchor, LayoutConstraint};
pub use containment::{clipped_edges, frame_matches_intersection, ClippedEdges, CONTAINMENT_TOLERANCE};
pub use direction::{HorizontalSide, LayoutDirection};
pub use engine::{ConstraintRegistry, LayoutEngine};
pub use fill::ViewLayoutExt;
