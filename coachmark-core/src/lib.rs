#![warn(missing_docs)]

//! Core library for coachmark => See `coachmark` crate.
//!
//! Contains the view geometry helpers used to keep highlighted views visible:
//! containment checks against a superview and constraints that pin a view to
//! its superview's edges.

/// Contains the [Rect](geometry::Rect) and [EdgeInsets](geometry::EdgeInsets) types.
pub mod geometry;

/// Contains the [View](view::View) capability and the [ViewTree](view::ViewTree) host.
pub mod view;

/// Contains containment checks, constraints and the layout engine.
pub mod layout;

/// Contains the [LayoutConfig](config::LayoutConfig) struct.
pub mod config;

/// Contains the error types.
pub mod error;
