// SPDX-License-Identifier: LGPL-3.0-only
use nalgebra::{Point2, Vector2};

/// An axis-aligned rectangle with an origin and a size.
///
/// A view's frame is a `Rect` in its superview's coordinate space, its
/// bounds a `Rect` in its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point2<f32>,
    /// Width (`x`) and height (`y`).
    pub size: Vector2<f32>,
}

impl Rect {
    /// Create a rectangle from its origin and size components.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    /// Create a rectangle at the origin with the given size.
    pub fn from_size(size: Vector2<f32>) -> Self {
        Self {
            origin: Point2::origin(),
            size,
        }
    }

    /// Create a rectangle from its four edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The left edge.
    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// The right edge.
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// The top edge.
    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// The bottom edge.
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// The width of the rectangle.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// The height of the rectangle.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Intersect this rectangle with another one.
    ///
    /// Returns `None` when the rectangles are strictly disjoint on either
    /// axis. Rectangles that only touch produce a zero-area rectangle.
    /// Negative sizes are not normalized.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.min_x().max(other.min_x());
        let right = self.max_x().min(other.max_x());
        let top = self.min_y().max(other.min_y());
        let bottom = self.max_y().min(other.max_y());

        if left > right || top > bottom {
            return None;
        }

        Some(Rect::from_edges(left, top, right, bottom))
    }

    /// Shrink the rectangle by the given insets.
    ///
    /// The origin moves by (`left`, `top`) and the size loses
    /// (`left + right`, `top + bottom`). Negative insets grow the rectangle.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect::new(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            self.size.x - insets.horizontal(),
            self.size.y - insets.vertical(),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// Margins applied to the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Top margin.
    pub top: f32,
    /// Left margin.
    pub left: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Right margin.
    pub right: f32,
}

impl EdgeInsets {
    /// Create insets from the four margins.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same margin on every edge.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// No margins.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the left and right margins.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom margins.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
