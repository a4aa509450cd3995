// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate container collection.
//!
//! Ranks the rendered elements under the pointer so the chooser can consult
//! the most specific container first. Deepest-first matters: dragging over
//! a small container nested in a large one should prefer the small, precise
//! target, with the outer container as fallback.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::lookup::{PointQuery, TreeRead};

/// A container under the pointer, eligible to be consulted for a drop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// The container element.
    pub id: K,
    /// Its rendered rectangle.
    pub rect: Rect,
    /// Ancestor-chain length (root is 0); larger is deeper.
    pub depth: usize,
}

/// Collect drop-capable containers under `point`, deepest first.
///
/// Only elements of a container kind whose accepts-children override is set
/// participate; leaves and switched-off containers are skipped here and
/// reached, if at all, through the resolver's climb/bounce fallbacks.
///
/// When `exclude_subtree` names the dragged element, it and its descendants
/// are skipped: an element can never be its own drop target.
///
/// Ordering is deepest-first; elements of equal depth keep the query
/// source's visit order, so results are deterministic for a deterministic
/// [`PointQuery`].
pub fn collect_candidates<K, Q, T>(
    point: Point,
    exclude_subtree: Option<K>,
    query: &Q,
    tree: &T,
) -> Vec<Candidate<K>>
where
    K: Copy + Eq,
    Q: PointQuery<K>,
    T: TreeRead<K>,
{
    let mut hits: SmallVec<[(K, Rect); 8]> = SmallVec::new();
    query.visit_containing_point(point, |id, rect| hits.push((id, rect)));

    let mut out = Vec::with_capacity(hits.len());
    for (id, rect) in hits {
        let Some(kind) = tree.kind_of(id) else {
            continue;
        };
        if !kind.is_container() || !tree.accepts_children(id) {
            continue;
        }
        let Some(depth) = depth_outside(tree, id, exclude_subtree) else {
            continue;
        };
        out.push(Candidate { id, rect, depth });
    }
    out.sort_by(|a, b| b.depth.cmp(&a.depth));
    out
}

/// Ancestor-chain length of `id`, or `None` if `id` lies in the excluded
/// subtree.
fn depth_outside<K: Copy + Eq>(
    tree: &impl TreeRead<K>,
    id: K,
    exclude: Option<K>,
) -> Option<usize> {
    if exclude == Some(id) {
        return None;
    }
    let mut depth = 0;
    let mut cur = id;
    while let Some(parent) = tree.parent_of(cur) {
        if exclude == Some(parent) {
            return None;
        }
        depth += 1;
        cur = parent;
    }
    Some(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use trellis_semantics::{ElementKind, LayoutMode};

    struct MockEl {
        kind: ElementKind,
        parent: Option<usize>,
        children: Vec<usize>,
        bounds: Option<Rect>,
        accepts: bool,
    }

    struct MockDoc {
        elements: Vec<MockEl>,
    }

    impl MockDoc {
        fn new() -> Self {
            Self {
                elements: vec![MockEl {
                    kind: ElementKind::Page,
                    parent: None,
                    children: Vec::new(),
                    bounds: Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)),
                    accepts: true,
                }],
            }
        }

        fn add(&mut self, parent: usize, kind: ElementKind, bounds: Rect) -> usize {
            let id = self.elements.len();
            self.elements.push(MockEl {
                kind,
                parent: Some(parent),
                children: Vec::new(),
                bounds: Some(bounds),
                accepts: true,
            });
            self.elements[parent].children.push(id);
            id
        }
    }

    impl TreeRead<usize> for MockDoc {
        fn kind_of(&self, id: usize) -> Option<ElementKind> {
            self.elements.get(id).map(|e| e.kind)
        }

        fn parent_of(&self, id: usize) -> Option<usize> {
            self.elements.get(id)?.parent
        }

        fn children_of(&self, id: usize) -> &[usize] {
            self.elements
                .get(id)
                .map(|e| e.children.as_slice())
                .unwrap_or(&[])
        }

        fn index_in_parent(&self, id: usize) -> Option<usize> {
            let parent = self.parent_of(id)?;
            self.elements[parent].children.iter().position(|&c| c == id)
        }

        fn accepts_children(&self, id: usize) -> bool {
            self.elements.get(id).is_some_and(|e| e.accepts)
        }

        fn layout_of(&self, id: usize) -> Option<LayoutMode> {
            self.elements.get(id).map(|_| LayoutMode::Flow)
        }
    }

    impl PointQuery<usize> for MockDoc {
        fn visit_containing_point<F: FnMut(usize, Rect)>(&self, point: Point, mut f: F) {
            for (id, el) in self.elements.iter().enumerate() {
                if let Some(rect) = el.bounds
                    && rect.contains(point)
                {
                    f(id, rect);
                }
            }
        }
    }

    #[test]
    fn deepest_container_ranks_first() {
        let mut doc = MockDoc::new();
        let outer = doc.add(0, ElementKind::Frame, Rect::new(100.0, 100.0, 500.0, 500.0));
        let inner = doc.add(
            outer,
            ElementKind::Frame,
            Rect::new(200.0, 200.0, 400.0, 400.0),
        );
        let found = collect_candidates(Point::new(300.0, 300.0), None, &doc, &doc);
        let ids: Vec<usize> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![inner, outer, 0]);
    }

    #[test]
    fn leaves_are_not_candidates() {
        let mut doc = MockDoc::new();
        let frame = doc.add(0, ElementKind::Frame, Rect::new(100.0, 100.0, 500.0, 500.0));
        let text = doc.add(
            frame,
            ElementKind::Text,
            Rect::new(150.0, 150.0, 450.0, 250.0),
        );
        let found = collect_candidates(Point::new(200.0, 200.0), None, &doc, &doc);
        assert!(found.iter().all(|c| c.id != text));
        assert!(found.iter().any(|c| c.id == frame));
    }

    #[test]
    fn switched_off_containers_are_skipped() {
        let mut doc = MockDoc::new();
        let frame = doc.add(0, ElementKind::Frame, Rect::new(100.0, 100.0, 500.0, 500.0));
        doc.elements[frame].accepts = false;
        let found = collect_candidates(Point::new(200.0, 200.0), None, &doc, &doc);
        assert!(found.iter().all(|c| c.id != frame));
    }

    #[test]
    fn dragged_subtree_is_excluded() {
        let mut doc = MockDoc::new();
        let dragged = doc.add(0, ElementKind::Frame, Rect::new(100.0, 100.0, 500.0, 500.0));
        let nested = doc.add(
            dragged,
            ElementKind::Frame,
            Rect::new(150.0, 150.0, 450.0, 450.0),
        );
        let found = collect_candidates(Point::new(200.0, 200.0), Some(dragged), &doc, &doc);
        assert!(found.iter().all(|c| c.id != dragged && c.id != nested));
        assert!(found.iter().any(|c| c.id == 0), "root is still offered");
    }

    #[test]
    fn point_outside_everything_yields_nothing() {
        let doc = MockDoc::new();
        let found = collect_candidates(Point::new(5000.0, 5000.0), None, &doc, &doc);
        assert!(found.is_empty());
    }
}
