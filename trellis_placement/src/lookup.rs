// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views of the host's document.
//!
//! The placement pipeline is generic over an id type `K` and consumes the
//! document exclusively through these traits. Hosts back them with
//! whatever they retain — `trellis_design_tree` implements all three (see
//! the `design_tree_adapter` feature) — and the engine stays ignorant of
//! the concrete storage, DOM or otherwise.

use kurbo::{Point, Rect};
use trellis_semantics::{ElementKind, LayoutMode};

/// Structural access to the element tree.
pub trait TreeRead<K> {
    /// Kind of a live element, or `None` for unknown ids.
    fn kind_of(&self, id: K) -> Option<ElementKind>;

    /// Parent of an element, or `None` for the root and unknown ids.
    fn parent_of(&self, id: K) -> Option<K>;

    /// Ordered children of an element; empty for leaves and unknown ids.
    fn children_of(&self, id: K) -> &[K];

    /// Position of an element in its parent's child sequence.
    fn index_in_parent(&self, id: K) -> Option<usize>;

    /// The element's per-element accepts-children override.
    fn accepts_children(&self, id: K) -> bool;

    /// Layout mode of an element, or `None` for unknown ids.
    fn layout_of(&self, id: K) -> Option<LayoutMode>;
}

/// Access to the host renderer's resolved geometry.
pub trait LayoutRead<K> {
    /// World-space rectangle of a visible, non-degenerate element; `None`
    /// for hidden, unrendered, zero-area, or unknown elements.
    fn rendered_bounds(&self, id: K) -> Option<Rect>;
}

/// Broad-phase point query over rendered elements.
///
/// The spatial-index abstraction: report every element whose rendered
/// rectangle contains the point, in any order. Callers rank the results
/// themselves.
pub trait PointQuery<K> {
    /// Visit each element under `point` with its rectangle.
    fn visit_containing_point<F: FnMut(K, Rect)>(&self, point: Point, f: F);
}
