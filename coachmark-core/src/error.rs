// SPDX-License-Identifier: LGPL-3.0-only

//! Errors for view tree mutations, constraint application and config loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::layout::EdgeAnchor;
use crate::view::ViewId;

/// Errors raised by the [ViewTree](crate::view::ViewTree) host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The view does not exist in the tree.
    #[error("Unknown view: {0}")]
    UnknownView(ViewId),

    /// Re-parenting would make a view its own ancestor.
    #[error("Moving {view} under {parent} would create a cycle")]
    WouldCreateCycle {
        /// The view being moved.
        view: ViewId,
        /// The requested new superview.
        parent: ViewId,
    },

    /// The second anchor is neither the superview nor a sibling of the first.
    #[error("Cannot relate {first} to {second}: anchors share no superview")]
    UnrelatedAnchors {
        /// The constrained anchor.
        first: EdgeAnchor,
        /// The anchor it was related to.
        second: EdgeAnchor,
    },
}

/// Errors that can occur when loading a [LayoutConfig](crate::config::LayoutConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read layout config {0}: {1}")]
    Read(PathBuf, std::io::Error),

    /// Failed to parse TOML.
    #[error("Failed to parse layout config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Only `.toml` files are supported.
    #[error("Unsupported layout config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Tolerance must be finite and positive.
    #[error("Invalid containment tolerance: {0}")]
    InvalidTolerance(f32),

    /// Unknown layout direction name.
    #[error("Invalid layout direction: {0}")]
    InvalidDirection(String),
}
