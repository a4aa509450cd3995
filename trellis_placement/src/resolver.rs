// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legality resolution for tentative drops.
//!
//! The legality contract: a drop request for a kind the document can hold
//! somewhere is never silently discarded. A tentative drop either passes
//! the containment check, climbs to the nearest accepting ancestor, or
//! bounces to sibling placement beside the rejecting target. Only a
//! degenerate tree (the rejecting target is the root itself) yields
//! `None`, and then the host refuses the drop and leaves the tree alone.

use trellis_semantics::{ElementKind, can_accept_child};

use crate::chooser::TentativeDrop;
use crate::lookup::TreeRead;

/// A drop whose destination is guaranteed to accept the dragged kind.
///
/// Same shape as [`TentativeDrop`], but an `Into` container has passed
/// `can_accept_child` for the dragged kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResolvedDrop<K> {
    /// Append into the container.
    Into {
        /// The accepting container.
        container: K,
    },
    /// Insert between the container's children.
    Between {
        /// The container whose child sequence is targeted.
        container: K,
        /// Child-sequence index to insert at.
        index: usize,
    },
}

/// Make a tentative drop legal for the dragged kind.
///
/// - `Between` placements pass through: the container already holds
///   siblings of the new element, so sibling placement needs no fresh
///   containment check.
/// - `Into` placements consult [`can_accept_child`]. On rejection the
///   resolver climbs the ancestor chain and returns the first accepting
///   ancestor as an append; if the walk reaches the root without a match
///   it bounces to a `Between` at the rejected target's own position in
///   its parent — "place next to, not inside, the thing under the
///   pointer".
/// - `None` only when the rejected target has no parent (the root itself
///   rejects the kind).
pub fn resolve_legal_drop<K, T>(
    tentative: TentativeDrop<K>,
    dragged: ElementKind,
    tree: &T,
) -> Option<ResolvedDrop<K>>
where
    K: Copy + Eq,
    T: TreeRead<K>,
{
    let target = match tentative {
        TentativeDrop::Between { container, index } => {
            return Some(ResolvedDrop::Between { container, index });
        }
        TentativeDrop::Into { container } => container,
    };

    if accepts(tree, target, dragged) {
        return Some(ResolvedDrop::Into { container: target });
    }

    // Climb: the nearest accepting ancestor takes the element instead.
    let mut cur = target;
    while let Some(parent) = tree.parent_of(cur) {
        if accepts(tree, parent, dragged) {
            return Some(ResolvedDrop::Into { container: parent });
        }
        cur = parent;
    }

    // Bounce: nobody above accepts, so place beside the rejecting target.
    let parent = tree.parent_of(target)?;
    let index = tree.index_in_parent(target)?;
    Some(ResolvedDrop::Between {
        container: parent,
        index,
    })
}

/// Containment check for one prospective parent.
fn accepts<K: Copy>(tree: &impl TreeRead<K>, id: K, dragged: ElementKind) -> bool {
    tree.kind_of(id)
        .is_some_and(|kind| can_accept_child(kind, dragged, tree.accepts_children(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use trellis_semantics::LayoutMode;

    struct MockEl {
        kind: ElementKind,
        parent: Option<usize>,
        children: Vec<usize>,
        accepts: bool,
    }

    struct MockTree {
        elements: Vec<MockEl>,
    }

    impl MockTree {
        fn new(root_accepts: bool) -> Self {
            Self {
                elements: vec![MockEl {
                    kind: ElementKind::Page,
                    parent: None,
                    children: Vec::new(),
                    accepts: root_accepts,
                }],
            }
        }

        fn add(&mut self, parent: usize, kind: ElementKind, accepts: bool) -> usize {
            let id = self.elements.len();
            self.elements.push(MockEl {
                kind,
                parent: Some(parent),
                children: Vec::new(),
                accepts,
            });
            self.elements[parent].children.push(id);
            id
        }
    }

    impl TreeRead<usize> for MockTree {
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

    #[test]
    fn accepting_target_passes_through() {
        let mut tree = MockTree::new(true);
        let frame = tree.add(0, ElementKind::Frame, true);
        let drop = resolve_legal_drop(
            TentativeDrop::Into { container: frame },
            ElementKind::Text,
            &tree,
        );
        assert_eq!(drop, Some(ResolvedDrop::Into { container: frame }));
    }

    #[test]
    fn between_is_always_legal_as_is() {
        let mut tree = MockTree::new(true);
        let list = tree.add(0, ElementKind::List, true);
        let drop = resolve_legal_drop(
            TentativeDrop::Between {
                container: list,
                index: 2,
            },
            ElementKind::TableRow,
            &tree,
        );
        assert_eq!(
            drop,
            Some(ResolvedDrop::Between {
                container: list,
                index: 2
            })
        );
    }

    #[test]
    fn rejected_drop_climbs_to_nearest_accepting_ancestor() {
        // A table row dragged onto a list: the list only takes list items,
        // so the drop bubbles up to the surrounding frame.
        let mut tree = MockTree::new(true);
        let frame = tree.add(0, ElementKind::Frame, true);
        let list = tree.add(frame, ElementKind::List, true);
        let drop = resolve_legal_drop(
            TentativeDrop::Into { container: list },
            ElementKind::TableRow,
            &tree,
        );
        assert_eq!(drop, Some(ResolvedDrop::Into { container: frame }));
    }

    #[test]
    fn climb_skips_multiple_rejecting_levels() {
        let mut tree = MockTree::new(true);
        let table = tree.add(0, ElementKind::Table, true);
        let row = tree.add(table, ElementKind::TableRow, true);
        // Dropping a frame onto a row: the row wants cells, the table wants
        // rows; the page takes it.
        let drop = resolve_legal_drop(
            TentativeDrop::Into { container: row },
            ElementKind::Frame,
            &tree,
        );
        assert_eq!(drop, Some(ResolvedDrop::Into { container: 0 }));
    }

    #[test]
    fn bounce_to_sibling_when_no_ancestor_accepts() {
        // Overrides off all the way up: the drop lands beside the list
        // rather than inside anything.
        let mut tree = MockTree::new(false);
        let frame = tree.add(0, ElementKind::Frame, false);
        let _sibling = tree.add(frame, ElementKind::Text, true);
        let list = tree.add(frame, ElementKind::List, true);
        let drop = resolve_legal_drop(
            TentativeDrop::Into { container: list },
            ElementKind::TableRow,
            &tree,
        );
        assert_eq!(
            drop,
            Some(ResolvedDrop::Between {
                container: frame,
                index: 1
            })
        );
    }

    #[test]
    fn rejecting_root_yields_none() {
        let tree = MockTree::new(false);
        let drop = resolve_legal_drop(
            TentativeDrop::Into { container: 0 },
            ElementKind::Frame,
            &tree,
        );
        assert_eq!(drop, None);
    }

    #[test]
    fn never_none_when_the_root_accepts() {
        // Totality with fallback: as long as the root takes the kind, any
        // into-placement resolves somewhere.
        let mut tree = MockTree::new(true);
        let frame = tree.add(0, ElementKind::Frame, true);
        let list = tree.add(frame, ElementKind::List, true);
        let row_holder = tree.add(frame, ElementKind::Table, true);
        let row = tree.add(row_holder, ElementKind::TableRow, true);
        let image = tree.add(frame, ElementKind::Image, true);
        for target in [0, frame, list, row_holder, row, image] {
            for dragged in ElementKind::ALL {
                let drop = resolve_legal_drop(
                    TentativeDrop::Into { container: target },
                    dragged,
                    &tree,
                );
                assert!(
                    drop.is_some(),
                    "dropping {dragged:?} onto {target} resolved to nothing"
                );
            }
        }
    }
}
