// SPDX-License-Identifier: LGPL-3.0-only
use serde::Deserialize;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::layout::Edge;

/// Layout direction used to resolve leading and trailing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right: leading is the left edge.
    #[default]
    Ltr,

    /// Right-to-left: leading is the right edge.
    ///
    /// Used for languages like Arabic, Hebrew, and Urdu.
    Rtl,

    /// Automatic direction detection. Currently resolves to LTR.
    Auto,
}

/// A physical horizontal side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    /// The left side (minimum x).
    Left,
    /// The right side (maximum x).
    Right,
}

impl LayoutDirection {
    /// Check if this is RTL direction.
    pub fn is_rtl(&self) -> bool {
        matches!(self.resolve(), LayoutDirection::Rtl)
    }

    /// Get the resolved direction (Auto becomes Ltr for now).
    pub fn resolve(&self) -> LayoutDirection {
        match self {
            LayoutDirection::Auto => LayoutDirection::Ltr,
            other => *other,
        }
    }

    /// Map a horizontal edge to the physical side it denotes.
    ///
    /// Returns `None` for vertical edges.
    pub fn side_of(&self, edge: Edge) -> Option<HorizontalSide> {
        match (edge, self.is_rtl()) {
            (Edge::Leading, false) | (Edge::Trailing, true) => Some(HorizontalSide::Left),
            (Edge::Trailing, false) | (Edge::Leading, true) => Some(HorizontalSide::Right),
            (Edge::Top | Edge::Bottom, _) => None,
        }
    }
}

impl FromStr for LayoutDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ltr" => Ok(LayoutDirection::Ltr),
            "rtl" => Ok(LayoutDirection::Rtl),
            "auto" => Ok(LayoutDirection::Auto),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of() {
        assert_eq!(LayoutDirection::Ltr.side_of(Edge::Leading), Some(HorizontalSide::Left));
        assert_eq!(LayoutDirection::Rtl.side_of(Edge::Leading), Some(HorizontalSide::Right));
        assert_eq!(LayoutDirection::Auto.side_of(Edge::Trailing), Some(HorizontalSide::Right));
        assert_eq!(LayoutDirection::Rtl.side_of(Edge::Top), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("RTL".parse::<LayoutDirection>().ok(), Some(LayoutDirection::Rtl));
        assert!("sideways".parse::<LayoutDirection>().is_err());
    }
}
