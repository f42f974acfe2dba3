#![warn(missing_docs)]

//! Keep highlighted views visible and sized to their containers.
//!
//! ```rust
//! use coachmark::prelude::*;
//!
//! let mut tree = ViewTree::new();
//! let root = tree.add_view(Rect::new(0.0, 0.0, 320.0, 480.0));
//! let overlay = tree.add_subview(root, Rect::new(10.0, 10.0, 50.0, 50.0)).unwrap();
//!
//! let mut registry = ConstraintRegistry::new();
//! tree.view(overlay).unwrap().fill_superview(&mut registry);
//! tree.apply_constraints(&registry).unwrap();
//!
//! assert!(!tree.view(overlay).unwrap().is_out_of_superview());
//! ```

pub use nalgebra as math;

pub use coachmark_core as core;

/// A "prelude" for users of coachmark.
///
/// Importing this module brings the view capability, the layout extension
/// trait and the geometry types into scope.
///
/// ```rust
/// use coachmark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::config::LayoutConfig;
    pub use crate::core::error::{ConfigError, LayoutError};
    pub use crate::core::geometry::{EdgeInsets, Rect};
    pub use crate::core::layout::*;
    pub use crate::core::view::{View, ViewId, ViewRef, ViewTree};

    // Math
    pub use nalgebra::{Point2, Vector2};
}
