// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Trellis Design Tree.
//!
//! ## Feature
//!
//! Enable with `design_tree_adapter`.
//!
//! ## Notes
//!
//! [`DesignTree`] already retains everything the placement pipeline reads —
//! kinds, parent/child structure, flags, and host-fed rendered bounds — so
//! the trait implementations here are direct forwards. [`op_for_drop`]
//! closes the loop: it turns the session's final [`ResolvedDrop`] into the
//! [`TreeOp`] the host applies.

use kurbo::{Point, Rect};
use trellis_design_tree::{
    Destination, DesignTree, ElementId, ElementSeed, InsertIndex, InsertOp, MoveOp, TreeOp,
};
use trellis_semantics::{ElementKind, LayoutMode};

use crate::lookup::{LayoutRead, PointQuery, TreeRead};
use crate::resolver::ResolvedDrop;
use crate::session::DragSource;

impl TreeRead<ElementId> for DesignTree {
    fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        Self::kind_of(self, id)
    }

    fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        Self::parent_of(self, id)
    }

    fn children_of(&self, id: ElementId) -> &[ElementId] {
        Self::children_of(self, id)
    }

    fn index_in_parent(&self, id: ElementId) -> Option<usize> {
        Self::index_in_parent(self, id)
    }

    fn accepts_children(&self, id: ElementId) -> bool {
        Self::accepts_children(self, id)
    }

    fn layout_of(&self, id: ElementId) -> Option<LayoutMode> {
        Self::layout_of(self, id)
    }
}

impl LayoutRead<ElementId> for DesignTree {
    fn rendered_bounds(&self, id: ElementId) -> Option<Rect> {
        Self::rendered_bounds(self, id)
    }
}

impl PointQuery<ElementId> for DesignTree {
    fn visit_containing_point<F: FnMut(ElementId, Rect)>(&self, point: Point, f: F) {
        Self::visit_containing_point(self, point, f);
    }
}

/// Convert a resolved drop into the mutation op the host should apply.
///
/// For existing-element drags this produces a [`MoveOp`] whose `from`
/// records the element's current location. A forward move within the same
/// parent is index-adjusted by one: the applier removes the element before
/// re-inserting, which shifts everything after its old position down.
pub fn op_for_drop(
    tree: &DesignTree,
    source: &DragSource<ElementId>,
    drop: ResolvedDrop<ElementId>,
) -> TreeOp {
    let to = match drop {
        ResolvedDrop::Into { container } => Destination::end_of(container),
        ResolvedDrop::Between { container, index } => {
            Destination::new(container, InsertIndex::At(index))
        }
    };

    match *source {
        DragSource::New { kind } => TreeOp::Insert(InsertOp {
            seed: ElementSeed::new(kind),
            to,
        }),
        DragSource::Existing { id, .. } => {
            let from_parent = tree.parent_of(id).unwrap_or_else(|| tree.root());
            let from_index = tree.index_in_parent(id).unwrap_or(0);
            let from = Destination::new(from_parent, InsertIndex::At(from_index));
            let to = adjust_same_parent(from_parent, from_index, to);
            TreeOp::Move(MoveOp { id, from, to })
        }
    }
}

/// Account for the element's own removal when it moves forward within the
/// parent it already occupies.
fn adjust_same_parent(from_parent: ElementId, from_index: usize, to: Destination) -> Destination {
    match to.index {
        InsertIndex::At(i) if to.parent == from_parent && from_index < i => {
            Destination::new(to.parent, InsertIndex::At(i - 1))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DragSession;
    use trellis_design_tree::ElementFlags;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }

    fn page_with_frame(tree: &mut DesignTree) -> ElementId {
        tree.set_bounds(tree.root(), Some(rect(0.0, 0.0, 1000.0, 1000.0)));
        let frame = tree.insert(tree.root(), ElementSeed::new(ElementKind::Frame));
        tree.set_bounds(frame, Some(rect(100.0, 100.0, 400.0, 500.0)));
        frame
    }

    #[test]
    fn new_drag_becomes_an_insert_op() {
        let mut tree = DesignTree::new();
        let frame = page_with_frame(&mut tree);
        let source = DragSource::New {
            kind: ElementKind::Text,
        };
        let op = op_for_drop(&tree, &source, ResolvedDrop::Into { container: frame });
        let applied = tree.apply(op).unwrap();
        assert_eq!(applied.parent, frame);
        assert_eq!(tree.kind_of(applied.id), Some(ElementKind::Text));
    }

    #[test]
    fn forward_move_within_a_parent_adjusts_for_removal() {
        let mut tree = DesignTree::new();
        let frame = page_with_frame(&mut tree);
        let a = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        let b = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        let c = tree.insert(frame, ElementSeed::new(ElementKind::Text));

        // "Insert before index 3" while dragging `a` means "after c".
        let source = DragSource::Existing {
            id: a,
            kind: ElementKind::Text,
        };
        let op = op_for_drop(
            &tree,
            &source,
            ResolvedDrop::Between {
                container: frame,
                index: 3,
            },
        );
        tree.apply(op).unwrap();
        assert_eq!(tree.children_of(frame), &[b, c, a]);
    }

    #[test]
    fn backward_move_within_a_parent_is_not_adjusted() {
        let mut tree = DesignTree::new();
        let frame = page_with_frame(&mut tree);
        let a = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        let b = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        let c = tree.insert(frame, ElementSeed::new(ElementKind::Text));

        let source = DragSource::Existing {
            id: c,
            kind: ElementKind::Text,
        };
        let op = op_for_drop(
            &tree,
            &source,
            ResolvedDrop::Between {
                container: frame,
                index: 0,
            },
        );
        tree.apply(op).unwrap();
        assert_eq!(tree.children_of(frame), &[c, a, b]);
    }

    #[test]
    fn session_runs_end_to_end_over_a_design_tree() {
        let mut tree = DesignTree::new();
        let frame = page_with_frame(&mut tree);
        let first = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        tree.set_bounds(first, Some(rect(110.0, 110.0, 390.0, 250.0)));
        let second = tree.insert(frame, ElementSeed::new(ElementKind::Text));
        tree.set_bounds(second, Some(rect(110.0, 350.0, 390.0, 490.0)));

        let source = DragSource::New {
            kind: ElementKind::Image,
        };
        let mut session = DragSession::new(source, tree.root());
        let drop = session
            .update(Point::new(250.0, 300.0), &tree)
            .expect("midpoint between children must resolve");
        assert_eq!(
            drop,
            ResolvedDrop::Between {
                container: frame,
                index: 1
            }
        );

        let drop = session.finish().unwrap();
        let op = op_for_drop(&tree, session.source(), drop);
        let applied = tree.apply(op).unwrap();
        assert_eq!(applied.parent, frame);
        assert_eq!(applied.index, 1);
        assert_eq!(tree.children_of(frame)[1], applied.id);
        assert_eq!(tree.kind_of(applied.id), Some(ElementKind::Image));
    }

    #[test]
    fn switched_off_container_is_bypassed_for_its_parent() {
        let mut tree = DesignTree::new();
        let frame = page_with_frame(&mut tree);
        let inner = tree.insert(frame, ElementSeed::new(ElementKind::Frame));
        tree.set_bounds(inner, Some(rect(110.0, 110.0, 390.0, 490.0)));
        tree.set_flags(inner, ElementFlags::VISIBLE);

        let mut session = DragSession::new(
            DragSource::New {
                kind: ElementKind::Text,
            },
            tree.root(),
        );
        let drop = session.update(Point::new(250.0, 300.0), &tree);
        assert!(
            !matches!(drop, Some(ResolvedDrop::Into { container }) if container == inner),
            "a container with accepts-children cleared is never a target"
        );
        assert!(drop.is_some());
    }
}
