// SPDX-License-Identifier: LGPL-3.0-only
use crate::geometry::{EdgeInsets, Rect};

/// Absolute tolerance used when comparing a frame with its visible part.
///
/// Absorbs rounding noise from the host layout engine.
pub const CONTAINMENT_TOLERANCE: f32 = 1.0;

/// Check whether the visible part of `frame` matches the frame itself.
///
/// `frame` is intersected with `container` and the result is compared with
/// `frame` inset by `insets`. Every component (x, y, width, height) must
/// differ by strictly less than `tolerance`. Disjoint rectangles never match.
///
/// # Parameters
///
/// - `frame`: The frame of the view, in the container's coordinate space
/// - `container`: The visible area of the container (its bounds)
/// - `insets`: Margins the frame may overhang without counting as clipped
/// - `tolerance`: Maximum absolute difference, exclusive
pub fn frame_matches_intersection(
    frame: Rect,
    container: Rect,
    insets: EdgeInsets,
    tolerance: f32,
) -> bool {
    let Some(intersected) = container.intersection(&frame) else {
        log::trace!("Frame {:?} lies outside container {:?}", frame, container);
        return false;
    };

    let expected = frame.inset_by(insets);
    let close = |a: f32, b: f32| (a - b).abs() < tolerance;

    close(intersected.origin.x, expected.origin.x)
        && close(intersected.origin.y, expected.origin.y)
        && close(intersected.size.x, expected.size.x)
        && close(intersected.size.y, expected.size.y)
}

/// Edges of a frame that lie outside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClippedEdges {
    /// The frame extends past the container's left edge.
    pub left: bool,
    /// The frame extends past the container's right edge.
    pub right: bool,
    /// The frame extends above the container.
    pub top: bool,
    /// The frame extends below the container.
    pub bottom: bool,
}

impl ClippedEdges {
    /// Check if any edge is clipped.
    pub fn is_clipped(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    /// Check if the left or right edge is clipped.
    pub fn is_clipped_horizontally(&self) -> bool {
        self.left || self.right
    }

    /// Check if the top or bottom edge is clipped.
    pub fn is_clipped_vertically(&self) -> bool {
        self.top || self.bottom
    }
}

/// Report which edges of `frame` fall outside `container`.
pub fn clipped_edges(frame: Rect, container: Rect) -> ClippedEdges {
    ClippedEdges {
        left: frame.min_x() < container.min_x(),
        right: frame.max_x() > container.max_x(),
        top: frame.min_y() < container.min_y(),
        bottom: frame.max_y() > container.max_y(),
    }
}
