// SPDX-License-Identifier: LGPL-3.0-only

//! Views and the in-memory view hierarchy.
//!
//! The layout helpers work on anything implementing [View]: a frame, bounds
//! and an optional superview. [ViewTree] is the hierarchy shipped with this
//! crate. Parents are referenced by [ViewId] only, so a view never keeps its
//! superview alive.

use indexmap::IndexMap;
use nalgebra::Point2;
use std::fmt;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, Rect};
use crate::layout::{
    ConstraintRegistry, Edge, EdgeAnchor, HorizontalSide, LayoutDirection, ViewLayoutExt,
};

/// Identifier of a view inside a [ViewTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Create an id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value of this id.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// The geometry a view exposes to the layout helpers.
pub trait View: Sized {
    /// The identifier used in constraint anchors.
    fn view_id(&self) -> ViewId;

    /// The view's rectangle in its superview's coordinate space.
    fn frame(&self) -> Rect;

    /// The view's rectangle in its own coordinate space.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.frame().size)
    }

    /// The containing view, if any.
    fn superview(&self) -> Option<Self>;
}

#[derive(Debug, Clone)]
struct ViewNode {
    frame: Rect,
    bounds_origin: Point2<f32>,
    superview: Option<ViewId>,
    subviews: Vec<ViewId>,
}

impl ViewNode {
    fn new(frame: Rect, superview: Option<ViewId>) -> Self {
        Self {
            frame,
            bounds_origin: Point2::origin(),
            superview,
            subviews: Vec::new(),
        }
    }

    fn bounds(&self) -> Rect {
        Rect {
            origin: self.bounds_origin,
            size: self.frame.size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhysicalEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl PhysicalEdge {
    fn resolve(edge: Edge, direction: LayoutDirection) -> Self {
        match edge {
            Edge::Top => PhysicalEdge::Top,
            Edge::Bottom => PhysicalEdge::Bottom,
            Edge::Leading | Edge::Trailing => match direction.side_of(edge) {
                Some(HorizontalSide::Right) => PhysicalEdge::Right,
                _ => PhysicalEdge::Left,
            },
        }
    }

    fn value_in(&self, rect: &Rect) -> f32 {
        match self {
            PhysicalEdge::Left => rect.min_x(),
            PhysicalEdge::Right => rect.max_x(),
            PhysicalEdge::Top => rect.min_y(),
            PhysicalEdge::Bottom => rect.max_y(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PinnedEdges {
    left: Option<f32>,
    right: Option<f32>,
    top: Option<f32>,
    bottom: Option<f32>,
}

impl PinnedEdges {
    fn pin(&mut self, edge: PhysicalEdge, value: f32) {
        match edge {
            PhysicalEdge::Left => self.left = Some(value),
            PhysicalEdge::Right => self.right = Some(value),
            PhysicalEdge::Top => self.top = Some(value),
            PhysicalEdge::Bottom => self.bottom = Some(value),
        }
    }

    fn resolve(&self, frame: Rect) -> Rect {
        let (x, width) = resolve_span(self.left, self.right, frame.min_x(), frame.width());
        let (y, height) = resolve_span(self.top, self.bottom, frame.min_y(), frame.height());
        Rect::new(x, y, width, height)
    }
}

/// Resolve one axis: both ends pinned resizes, one end pinned moves.
fn resolve_span(start: Option<f32>, end: Option<f32>, origin: f32, length: f32) -> (f32, f32) {
    match (start, end) {
        (Some(start), Some(end)) => (start, end - start),
        (Some(start), None) => (start, length),
        (None, Some(end)) => (end - length, length),
        (None, None) => (origin, length),
    }
}

/// An arena-backed view hierarchy.
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    nodes: IndexMap<ViewId, ViewNode>,
    next_id: u64,
    config: LayoutConfig,
}

impl ViewTree {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with the given configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration used by this tree.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of views in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no views.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate_id(&mut self) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        id
    }

    fn node(&self, id: ViewId) -> Result<&ViewNode, LayoutError> {
        self.nodes.get(&id).ok_or(LayoutError::UnknownView(id))
    }

    fn node_mut(&mut self, id: ViewId) -> Result<&mut ViewNode, LayoutError> {
        self.nodes.get_mut(&id).ok_or(LayoutError::UnknownView(id))
    }

    /// Add a view without a superview.
    pub fn add_view(&mut self, frame: Rect) -> ViewId {
        let id = self.allocate_id();
        self.nodes.insert(id, ViewNode::new(frame, None));
        id
    }

    /// Add a view as the last subview of `parent`.
    pub fn add_subview(&mut self, parent: ViewId, frame: Rect) -> Result<ViewId, LayoutError> {
        self.node(parent)?;
        let id = self.allocate_id();
        self.nodes.insert(id, ViewNode::new(frame, Some(parent)));
        self.node_mut(parent)?.subviews.push(id);
        Ok(id)
    }

    /// Replace the frame of a view.
    pub fn set_frame(&mut self, id: ViewId, frame: Rect) -> Result<(), LayoutError> {
        self.node_mut(id)?.frame = frame;
        Ok(())
    }

    /// Move the origin of a view's bounds, as a scroll offset does.
    pub fn set_bounds_origin(&mut self, id: ViewId, origin: Point2<f32>) -> Result<(), LayoutError> {
        self.node_mut(id)?.bounds_origin = origin;
        Ok(())
    }

    /// Detach a view from its superview. Its own subviews stay attached.
    pub fn remove_from_superview(&mut self, id: ViewId) -> Result<(), LayoutError> {
        let parent = self.node_mut(id)?.superview.take();
        if let Some(parent) = parent {
            self.node_mut(parent)?.subviews.retain(|&child| child != id);
        }
        Ok(())
    }

    /// Re-parent a view under `parent`, appending it to its subviews.
    pub fn move_to_superview(&mut self, id: ViewId, parent: ViewId) -> Result<(), LayoutError> {
        self.node(id)?;

        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == id {
                return Err(LayoutError::WouldCreateCycle { view: id, parent });
            }
            ancestor = self.node(current)?.superview;
        }

        self.remove_from_superview(id)?;
        self.node_mut(id)?.superview = Some(parent);
        self.node_mut(parent)?.subviews.push(id);
        Ok(())
    }

    /// The direct subviews of a view, in insertion order.
    pub fn subviews(&self, id: ViewId) -> Result<&[ViewId], LayoutError> {
        Ok(&self.node(id)?.subviews)
    }

    /// Borrow a view as a [View] handle.
    pub fn view(&self, id: ViewId) -> Option<ViewRef<'_>> {
        self.nodes.contains_key(&id).then_some(ViewRef { tree: self, id })
    }

    /// The rectangle an anchor's edge is measured in, relative to the
    /// first anchor's superview.
    fn reference_rect(&self, first: EdgeAnchor, second: EdgeAnchor) -> Result<Rect, LayoutError> {
        let superview = self.node(first.view)?.superview;
        let other = self.node(second.view)?;

        match superview {
            Some(parent) if parent == second.view => Ok(other.bounds()),
            Some(parent) if other.superview == Some(parent) => Ok(other.frame),
            _ => Err(LayoutError::UnrelatedAnchors { first, second }),
        }
    }

    /// Resolve the constraints installed in `registry` into frames.
    ///
    /// Each constrained view is moved (one edge pinned on an axis) or resized
    /// (both edges pinned). Sibling anchors are read from frames as they were
    /// before this pass. Returns the number of constraints applied.
    pub fn apply_constraints(&mut self, registry: &ConstraintRegistry) -> Result<usize, LayoutError> {
        let direction = self.config.direction;
        let mut pinned: IndexMap<ViewId, PinnedEdges> = IndexMap::new();
        let mut applied = 0;

        for constraint in registry.iter().filter(|c| c.is_active()) {
            let rect = self.reference_rect(constraint.first, constraint.second)?;
            let value = PhysicalEdge::resolve(constraint.second.edge, direction).value_in(&rect)
                + constraint.constant;

            pinned
                .entry(constraint.first.view)
                .or_default()
                .pin(PhysicalEdge::resolve(constraint.first.edge, direction), value);
            applied += 1;
        }

        for (id, edges) in pinned {
            let node = self.node_mut(id)?;
            node.frame = edges.resolve(node.frame);
            log::debug!("Resolved frame of {} to {:?}", id, node.frame);
        }

        Ok(applied)
    }
}

/// A borrowed handle to a view inside a [ViewTree].
#[derive(Debug, Clone, Copy)]
pub struct ViewRef<'a> {
    tree: &'a ViewTree,
    id: ViewId,
}

impl<'a> ViewRef<'a> {
    fn node(&self) -> &'a ViewNode {
        let tree: &'a ViewTree = self.tree;
        &tree.nodes[&self.id]
    }

    /// Containment check using the tree's configured tolerance.
    pub fn is_out_of_superview_configured(&self) -> bool {
        self.is_out_of_superview_with_tolerance(
            EdgeInsets::zero(),
            self.tree.config.containment_tolerance,
        )
    }
}

impl<'a> View for ViewRef<'a> {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn frame(&self) -> Rect {
        self.node().frame
    }

    fn bounds(&self) -> Rect {
        self.node().bounds()
    }

    fn superview(&self) -> Option<Self> {
        self.node().superview.and_then(|parent| self.tree.view(parent))
    }
}
