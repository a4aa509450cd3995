// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag orchestration.
//!
//! A [`DragSession`] owns everything transient about one drag: what is
//! being dragged, the tuning parameters, and the decision derived from the
//! most recent pointer position. Feed it every pointer move; read the
//! resolved drop on release; cancel to drop all state without touching the
//! document. Sessions never mutate the tree — the host converts the final
//! [`ResolvedDrop`] into a mutation op (see [`crate::adapters`]) and
//! applies it itself.
//!
//! Everything is synchronous: each [`DragSession::update`] runs the whole
//! collect → choose → resolve pipeline inline on the caller's thread, so
//! decisions always follow pointer-move order and the release decision is
//! never derived from a stale sample.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use trellis_semantics::{ElementKind, can_accept_child};

use crate::PlacementParams;
use crate::axis::Axis;
use crate::candidates::collect_candidates;
use crate::chooser::choose_drop;
use crate::gap::locate_gaps;
use crate::lookup::{LayoutRead, PointQuery, TreeRead};
use crate::resolver::{ResolvedDrop, resolve_legal_drop};

/// What a drag session is carrying.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragSource<K> {
    /// An element already in the document, being moved.
    Existing {
        /// The dragged element.
        id: K,
        /// Its kind, captured at drag start.
        kind: ElementKind,
    },
    /// A palette element that does not exist in the document yet.
    New {
        /// Kind of the element to create on drop.
        kind: ElementKind,
    },
}

impl<K: Copy> DragSource<K> {
    /// The dragged kind.
    pub fn kind(&self) -> ElementKind {
        match *self {
            Self::Existing { kind, .. } | Self::New { kind } => kind,
        }
    }

    /// The dragged element's id, for existing-element drags.
    pub fn dragged_id(&self) -> Option<K> {
        match *self {
            Self::Existing { id, .. } => Some(id),
            Self::New { .. } => None,
        }
    }
}

/// State and pipeline for one drag.
///
/// Create at drag start, call [`DragSession::update`] on every pointer
/// move, and either [`DragSession::finish`] on release or
/// [`DragSession::cancel`] on abort. One session per concurrent drag;
/// sessions share nothing.
#[derive(Clone, Debug)]
pub struct DragSession<K> {
    /// Tuning parameters; see [`PlacementParams`].
    pub params: PlacementParams,
    source: DragSource<K>,
    root: K,
    last_drop: Option<ResolvedDrop<K>>,
    last_indicator: Option<Rect>,
}

impl<K: Copy + Eq> DragSession<K> {
    /// Start a session with default parameters.
    pub fn new(source: DragSource<K>, root: K) -> Self {
        Self::with_params(source, root, PlacementParams::default())
    }

    /// Start a session with custom parameters.
    pub fn with_params(source: DragSource<K>, root: K, params: PlacementParams) -> Self {
        Self {
            params,
            source,
            root,
            last_drop: None,
            last_indicator: None,
        }
    }

    /// What the session is dragging.
    pub fn source(&self) -> &DragSource<K> {
        &self.source
    }

    /// Resolve the drop for a new pointer position.
    ///
    /// Runs the full pipeline: candidate containers under the pointer are
    /// consulted deepest-first; the first one yielding a tentative drop
    /// that resolves legally wins. If every candidate passes (or there are
    /// none), the session falls back to appending to the root; if even the
    /// root rejects the dragged kind, the update yields `None` and a
    /// release right now would be a no-op.
    ///
    /// The returned decision is also retained as the session's current
    /// one, so the release decision always comes from the most recent
    /// pointer position.
    pub fn update<E>(&mut self, point: Point, doc: &E) -> Option<ResolvedDrop<K>>
    where
        E: TreeRead<K> + LayoutRead<K> + PointQuery<K>,
    {
        let dragged = self.source.kind();
        let candidates = collect_candidates(point, self.source.dragged_id(), doc, doc);

        for candidate in &candidates {
            let Some(layout) = doc.layout_of(candidate.id) else {
                continue;
            };
            let axis = Axis::for_layout(layout);

            let children = doc.children_of(candidate.id);
            let mut visible: SmallVec<[(usize, Rect); 16]> = SmallVec::new();
            for (seq, &child) in children.iter().enumerate() {
                if let Some(rect) = doc.rendered_bounds(child) {
                    visible.push((seq, rect));
                }
            }

            let gaps = locate_gaps(candidate.rect, axis, &visible, &self.params);
            let Some(tentative) = choose_drop(
                point,
                candidate.id,
                candidate.rect,
                visible.len(),
                &gaps,
                &self.params,
            ) else {
                continue;
            };
            let Some(resolved) = resolve_legal_drop(tentative, dragged, doc) else {
                continue;
            };

            // Indicator geometry: the gap region for a between placement in
            // this candidate, the destination's own rectangle otherwise.
            let indicator = match resolved {
                ResolvedDrop::Between { container, index } if container == candidate.id => gaps
                    .iter()
                    .find(|g| g.index == index)
                    .map(|g| g.rect)
                    .or(Some(candidate.rect)),
                ResolvedDrop::Between { container, .. } | ResolvedDrop::Into { container } => {
                    doc.rendered_bounds(container)
                }
            };
            self.last_drop = Some(resolved);
            self.last_indicator = indicator;
            return Some(resolved);
        }

        // Root-append fallback: no candidate produced a legal drop.
        let root_takes_it = doc
            .kind_of(self.root)
            .is_some_and(|kind| can_accept_child(kind, dragged, doc.accepts_children(self.root)));
        if root_takes_it {
            let resolved = ResolvedDrop::Into {
                container: self.root,
            };
            self.last_drop = Some(resolved);
            self.last_indicator = doc.rendered_bounds(self.root);
            Some(resolved)
        } else {
            self.last_drop = None;
            self.last_indicator = None;
            None
        }
    }

    /// The decision from the most recent [`DragSession::update`].
    pub fn current_drop(&self) -> Option<ResolvedDrop<K>> {
        self.last_drop
    }

    /// Geometry for the current decision's visual affordance (an insertion
    /// region or a container highlight), if any is known.
    pub fn indicator(&self) -> Option<Rect> {
        self.last_indicator
    }

    /// Conclude the drag, yielding the decision to apply and clearing all
    /// transient state.
    pub fn finish(&mut self) -> Option<ResolvedDrop<K>> {
        let decision = self.last_drop.take();
        self.last_indicator = None;
        decision
    }

    /// Abort the drag. All transient state is cleared and no decision
    /// survives; the host leaves the document unchanged.
    pub fn cancel(&mut self) {
        self.last_drop = None;
        self.last_indicator = None;
    }
}
