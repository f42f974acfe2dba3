// SPDX-License-Identifier: LGPL-3.0-only
use crate::geometry::EdgeInsets;
use crate::layout::{
    clipped_edges, frame_matches_intersection, Axis, ClippedEdges, Edge, EdgeAnchor,
    LayoutConstraint, LayoutEngine, CONTAINMENT_TOLERANCE,
};
use crate::view::View;

/// Bounds and fill helpers available on every [View].
///
/// A missing superview is never an error: containment checks report the view
/// as out of its superview and constraint builders return nothing.
pub trait ViewLayoutExt: View {
    /// Check whether any part of the view is clipped by its superview's bounds.
    ///
    /// Returns `true` if the view has no superview, or if the visible part of
    /// the frame differs from the frame by [CONTAINMENT_TOLERANCE] or more in
    /// any component.
    fn is_out_of_superview(&self) -> bool {
        self.is_out_of_superview_with_tolerance(EdgeInsets::zero(), CONTAINMENT_TOLERANCE)
    }

    /// Like [is_out_of_superview](Self::is_out_of_superview), but the view may
    /// overhang its superview by `insets` and still count as contained.
    fn is_out_of_superview_considering_insets(&self, insets: EdgeInsets) -> bool {
        self.is_out_of_superview_with_tolerance(insets, CONTAINMENT_TOLERANCE)
    }

    /// Containment check with explicit insets and tolerance.
    fn is_out_of_superview_with_tolerance(&self, insets: EdgeInsets, tolerance: f32) -> bool {
        let Some(superview) = self.superview() else {
            log::trace!("{} has no superview, reporting it as out", self.view_id());
            return true;
        };

        !frame_matches_intersection(self.frame(), superview.bounds(), insets, tolerance)
    }

    /// Which edges of the view fall outside its superview's bounds.
    ///
    /// Returns `None` if the view has no superview.
    fn clipped_edges_in_superview(&self) -> Option<ClippedEdges> {
        self.superview()
            .map(|superview| clipped_edges(self.frame(), superview.bounds()))
    }

    /// Build the top and bottom constraints pinning the view to its superview.
    ///
    /// The constraints are returned inactive.
    fn make_constraints_to_fill_superview_vertically(&self) -> Vec<LayoutConstraint> {
        make_fill_constraints(self, Axis::Vertical)
    }

    /// Build the leading and trailing constraints pinning the view to its superview.
    ///
    /// The constraints are returned inactive.
    fn make_constraints_to_fill_superview_horizontally(&self) -> Vec<LayoutConstraint> {
        make_fill_constraints(self, Axis::Horizontal)
    }

    /// Pin the view's top and bottom edges to its superview.
    fn fill_superview_vertically<E: LayoutEngine + ?Sized>(&self, engine: &mut E) {
        for mut constraint in self.make_constraints_to_fill_superview_vertically() {
            constraint.activate(engine);
        }
    }

    /// Pin the view's leading and trailing edges to its superview.
    fn fill_superview_horizontally<E: LayoutEngine + ?Sized>(&self, engine: &mut E) {
        for mut constraint in self.make_constraints_to_fill_superview_horizontally() {
            constraint.activate(engine);
        }
    }

    /// Pin all four edges of the view to its superview.
    fn fill_superview<E: LayoutEngine + ?Sized>(&self, engine: &mut E) {
        self.fill_superview_vertically(engine);
        self.fill_superview_horizontally(engine);
    }
}

impl<V: View> ViewLayoutExt for V {}

fn make_fill_constraints<V: View>(view: &V, axis: Axis) -> Vec<LayoutConstraint> {
    let Some(superview) = view.superview() else {
        log::warn!("{} has no superview, can't make fill constraints", view.view_id());
        return vec![];
    };

    let (child, parent) = (view.view_id(), superview.view_id());
    Edge::of_axis(axis)
        .into_iter()
        .map(|edge| LayoutConstraint::equal(EdgeAnchor::new(child, edge), EdgeAnchor::new(parent, edge)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::geometry::Rect;
    use crate::layout::{ConstraintRegistry, LayoutDirection};
    use crate::view::{ViewId, ViewTree};

    fn tree_with_child(frame: Rect) -> (ViewTree, ViewId, ViewId) {
        let mut tree = ViewTree::new();
        let root = tree.add_view(Rect::new(0.0, 0.0, 100.0, 100.0));
        let child = tree.add_subview(root, frame).unwrap();
        (tree, root, child)
    }

    #[test]
    fn test_contained_view_is_not_out() {
        let (tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 80.0, 80.0));
        assert!(!tree.view(child).unwrap().is_out_of_superview());

        let (tree, _, child) = tree_with_child(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!tree.view(child).unwrap().is_out_of_superview());
    }

    #[test]
    fn test_parentless_view() {
        let mut tree = ViewTree::new();
        let orphan = tree.add_view(Rect::new(0.0, 0.0, 10.0, 10.0));
        let view = tree.view(orphan).unwrap();

        assert!(view.is_out_of_superview());
        assert!(view.is_out_of_superview_considering_insets(EdgeInsets::uniform(5.0)));
        assert!(view.make_constraints_to_fill_superview_vertically().is_empty());
        assert!(view.make_constraints_to_fill_superview_horizontally().is_empty());

        let mut registry = ConstraintRegistry::new();
        view.fill_superview(&mut registry);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_overflowing_view_is_out() {
        for frame in [
            Rect::new(-2.0, 0.0, 50.0, 50.0),
            Rect::new(0.0, 60.0, 50.0, 50.0),
            Rect::new(0.0, 0.0, 102.0, 100.0),
            Rect::new(300.0, 300.0, 10.0, 10.0),
        ] {
            let (tree, _, child) = tree_with_child(frame);
            assert!(tree.view(child).unwrap().is_out_of_superview(), "{:?}", frame);
        }
    }

    #[test]
    fn test_insets_tolerate_overhang() {
        let insets = EdgeInsets::new(4.0, 8.0, 4.0, 8.0);
        let (tree, _, child) = tree_with_child(Rect::new(-8.0, -4.0, 116.0, 108.0));
        let view = tree.view(child).unwrap();

        assert!(!view.is_out_of_superview_considering_insets(insets));
        assert!(view.is_out_of_superview());
    }

    #[test]
    fn test_zero_insets_match_plain_check() {
        let (tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let view = tree.view(child).unwrap();

        assert_eq!(
            view.is_out_of_superview_considering_insets(EdgeInsets::zero()),
            view.is_out_of_superview()
        );
    }

    #[test]
    fn test_tolerance_boundary() {
        let (tree, _, child) = tree_with_child(Rect::new(0.0, 0.0, 100.99, 100.0));
        assert!(!tree.view(child).unwrap().is_out_of_superview());

        let (tree, _, child) = tree_with_child(Rect::new(0.0, 0.0, 101.0, 100.0));
        assert!(tree.view(child).unwrap().is_out_of_superview());

        let (tree, _, child) = tree_with_child(Rect::new(0.0, 1.0, 100.0, 100.0));
        assert!(tree.view(child).unwrap().is_out_of_superview());
    }

    #[test]
    fn test_scrolled_superview_bounds() {
        let (mut tree, root, child) = tree_with_child(Rect::new(0.0, 0.0, 50.0, 50.0));
        tree.set_bounds_origin(root, nalgebra::Point2::new(0.0, 30.0)).unwrap();

        assert!(tree.view(child).unwrap().is_out_of_superview());
    }

    #[test]
    fn test_clipped_edges_in_superview() {
        let (tree, _, child) = tree_with_child(Rect::new(90.0, -10.0, 20.0, 20.0));
        let edges = tree.view(child).unwrap().clipped_edges_in_superview().unwrap();

        assert!(edges.right && edges.top);
        assert!(!edges.left && !edges.bottom);

        let (tree, root, _) = tree_with_child(Rect::zero());
        assert_eq!(tree.view(root).unwrap().clipped_edges_in_superview(), None);
    }

    #[test]
    fn test_make_constraints() {
        let (tree, root, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let view = tree.view(child).unwrap();

        let vertical = view.make_constraints_to_fill_superview_vertically();
        let horizontal = view.make_constraints_to_fill_superview_horizontally();

        assert_eq!(
            vertical.iter().map(|c| c.key()).collect::<Vec<_>>(),
            vec![
                (EdgeAnchor::new(child, Edge::Top), EdgeAnchor::new(root, Edge::Top)),
                (EdgeAnchor::new(child, Edge::Bottom), EdgeAnchor::new(root, Edge::Bottom)),
            ]
        );
        assert_eq!(
            horizontal.iter().map(|c| c.key()).collect::<Vec<_>>(),
            vec![
                (EdgeAnchor::new(child, Edge::Leading), EdgeAnchor::new(root, Edge::Leading)),
                (EdgeAnchor::new(child, Edge::Trailing), EdgeAnchor::new(root, Edge::Trailing)),
            ]
        );
        assert!(vertical.iter().chain(&horizontal).all(|c| !c.is_active() && c.constant == 0.0));
    }

    #[test]
    fn test_fill_vertically_then_horizontally() {
        let (tree, root, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let view = tree.view(child).unwrap();
        let mut registry = ConstraintRegistry::new();

        view.fill_superview_vertically(&mut registry);
        view.fill_superview_horizontally(&mut registry);

        assert_eq!(registry.len(), 4);
        for constraint in registry.iter() {
            assert!(constraint.is_active());
            assert_eq!(constraint.first.view, child);
            assert_eq!(constraint.second.view, root);
            assert_eq!(constraint.first.edge, constraint.second.edge);
        }
    }

    #[test]
    fn test_fill_superview_is_idempotent() {
        let (tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let view = tree.view(child).unwrap();
        let mut registry = ConstraintRegistry::new();

        view.fill_superview(&mut registry);
        view.fill_superview(&mut registry);

        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_apply_fill_constraints() {
        let (mut tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let mut registry = ConstraintRegistry::new();
        tree.view(child).unwrap().fill_superview(&mut registry);

        assert_eq!(tree.apply_constraints(&registry), Ok(4));

        let view = tree.view(child).unwrap();
        assert_eq!(view.frame(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!view.is_out_of_superview());
    }

    #[test]
    fn test_apply_single_edge_moves_view() {
        let (mut tree, root, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let mut registry = ConstraintRegistry::new();
        LayoutConstraint::equal(EdgeAnchor::new(child, Edge::Bottom), EdgeAnchor::new(root, Edge::Bottom))
            .with_constant(-5.0)
            .activate(&mut registry);
        LayoutConstraint::equal(EdgeAnchor::new(child, Edge::Trailing), EdgeAnchor::new(root, Edge::Trailing))
            .activate(&mut registry);

        tree.apply_constraints(&registry).unwrap();

        assert_eq!(tree.view(child).unwrap().frame(), Rect::new(80.0, 75.0, 20.0, 20.0));
    }

    #[test]
    fn test_apply_rtl_leading() {
        let mut tree = ViewTree::with_config(LayoutConfig::default().with_direction(LayoutDirection::Rtl));
        let root = tree.add_view(Rect::new(0.0, 0.0, 100.0, 100.0));
        let child = tree.add_subview(root, Rect::new(0.0, 0.0, 20.0, 20.0)).unwrap();
        let mut registry = ConstraintRegistry::new();
        LayoutConstraint::equal(EdgeAnchor::new(child, Edge::Leading), EdgeAnchor::new(root, Edge::Leading))
            .activate(&mut registry);

        tree.apply_constraints(&registry).unwrap();

        assert_eq!(tree.view(child).unwrap().frame(), Rect::new(80.0, 0.0, 20.0, 20.0));
    }

    #[test]
    fn test_apply_sibling_anchor() {
        let (mut tree, root, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let sibling = tree.add_subview(root, Rect::new(0.0, 50.0, 30.0, 30.0)).unwrap();
        let mut registry = ConstraintRegistry::new();
        LayoutConstraint::equal(EdgeAnchor::new(child, Edge::Top), EdgeAnchor::new(sibling, Edge::Bottom))
            .activate(&mut registry);

        tree.apply_constraints(&registry).unwrap();

        assert_eq!(tree.view(child).unwrap().frame(), Rect::new(10.0, 80.0, 20.0, 20.0));
    }

    #[test]
    fn test_apply_unrelated_anchors() {
        let (mut tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let stranger = tree.add_view(Rect::new(0.0, 0.0, 10.0, 10.0));
        let first = EdgeAnchor::new(child, Edge::Top);
        let second = EdgeAnchor::new(stranger, Edge::Top);
        let mut registry = ConstraintRegistry::new();
        LayoutConstraint::equal(first, second).activate(&mut registry);

        assert_eq!(
            tree.apply_constraints(&registry),
            Err(crate::error::LayoutError::UnrelatedAnchors { first, second })
        );
    }

    #[test]
    fn test_detached_view_constraints_are_dropped() {
        let (mut tree, _, child) = tree_with_child(Rect::new(10.0, 10.0, 20.0, 20.0));
        let mut registry = ConstraintRegistry::new();
        tree.view(child).unwrap().fill_superview(&mut registry);

        tree.remove_from_superview(child).unwrap();
        registry.remove_view(child);

        assert_eq!(tree.apply_constraints(&registry), Ok(0));
        assert!(tree.view(child).unwrap().is_out_of_superview());
    }
}
