// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, accessors, point queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_semantics::{ElementKind, LayoutMode};

use crate::types::{ElementFlags, ElementId, ElementSeed};

#[derive(Clone, Debug)]
pub(crate) struct Element {
    generation: u32,
    parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    kind: ElementKind,
    layout: LayoutMode,
    flags: ElementFlags,
    /// World-space rectangle last resolved by the host's renderer.
    /// `None` until the element has been laid out.
    bounds: Option<Rect>,
}

impl Element {
    fn new(generation: u32, seed: ElementSeed) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind: seed.kind,
            layout: seed.layout,
            flags: seed.flags,
            bounds: None,
        }
    }
}

/// The element tree of one design document.
///
/// A tree always has exactly one root (a [`ElementKind::Page`] element,
/// created by [`DesignTree::new`]). The root cannot be removed or moved.
///
/// Slots are reused through a free list; ids are generational, so a handle
/// to a removed element goes stale rather than aliasing its replacement.
pub struct DesignTree {
    /// slots
    elements: Vec<Option<Element>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: ElementId,
}

impl core::fmt::Debug for DesignTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.elements.len();
        let alive = self.elements.iter().filter(|n| n.is_some()).count();
        f.debug_struct("DesignTree")
            .field("elements_total", &total)
            .field("elements_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Default for DesignTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignTree {
    /// Create a tree containing only a page root.
    pub fn new() -> Self {
        let mut tree = Self {
            elements: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: ElementId::new(0, 0),
        };
        tree.root = tree.alloc(ElementSeed::new(ElementKind::Page));
        tree
    }

    /// The document root. Always live.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Insert a new element as the last child of `parent`.
    ///
    /// A stale `parent` falls back to the root rather than failing; the
    /// returned id is live either way.
    pub fn insert(&mut self, parent: ElementId, seed: ElementSeed) -> ElementId {
        let id = self.alloc(seed);
        let parent = if self.is_alive(parent) {
            parent
        } else {
            self.root
        };
        self.link_parent(id, parent, usize::MAX);
        id
    }

    /// Insert a new element as a child of `parent` at `index` (clamped).
    pub(crate) fn insert_at(
        &mut self,
        parent: ElementId,
        seed: ElementSeed,
        index: usize,
    ) -> ElementId {
        let id = self.alloc(seed);
        self.link_parent(id, parent, index);
        id
    }

    /// Remove an element and its subtree. Removing the root or a stale id
    /// is a no-op.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) || id == self.root {
            return;
        }
        if let Some(parent) = self.element(id).parent {
            self.unlink_parent(id, parent);
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let children = core::mem::take(&mut self.element_mut(id).children);
        for child in children {
            self.remove_subtree(child);
        }
        self.elements[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.elements
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .is_some_and(|el| el.generation == id.1)
    }

    /// Kind of a live element, or `None` for stale ids.
    pub fn kind_of(&self, id: ElementId) -> Option<ElementKind> {
        self.get(id).map(|el| el.kind)
    }

    /// Layout mode of a live element.
    pub fn layout_of(&self, id: ElementId) -> Option<LayoutMode> {
        self.get(id).map(|el| el.layout)
    }

    /// Flags of a live element.
    pub fn flags_of(&self, id: ElementId) -> Option<ElementFlags> {
        self.get(id).map(|el| el.flags)
    }

    /// Parent of a live element, or `None` for the root or stale ids.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.get(id).and_then(|el| el.parent)
    }

    /// Ordered children of an element, or an empty slice for stale ids.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// Position of `id` within its parent's child sequence.
    pub fn index_in_parent(&self, id: ElementId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.element(parent).children.iter().position(|&c| c == id)
    }

    /// Number of ancestors between `id` and the root (the root has depth 0).
    pub fn depth_of(&self, id: ElementId) -> Option<usize> {
        if !self.is_alive(id) {
            return None;
        }
        let mut depth = 0;
        let mut cur = id;
        while let Some(parent) = self.parent_of(cur) {
            depth += 1;
            cur = parent;
        }
        Some(depth)
    }

    /// Whether `descendant` is `ancestor` or lies in its subtree.
    pub fn is_in_subtree(&self, descendant: ElementId, ancestor: ElementId) -> bool {
        if !self.is_alive(descendant) || !self.is_alive(ancestor) {
            return false;
        }
        let mut cur = Some(descendant);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent_of(id);
        }
        false
    }

    /// Whether the element's accepts-children override is set.
    ///
    /// This is only the per-element flag; combine with the element's kind
    /// via `trellis_semantics::can_accept_child` for the full answer.
    pub fn accepts_children(&self, id: ElementId) -> bool {
        self.get(id)
            .is_some_and(|el| el.flags.contains(ElementFlags::ACCEPTS_CHILDREN))
    }

    /// Store the world-space rectangle the host's renderer resolved for an
    /// element. `None` marks the element as not currently rendered.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Option<Rect>) {
        if let Some(el) = self.get_mut(id) {
            el.bounds = bounds;
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: ElementId, flags: ElementFlags) {
        if let Some(el) = self.get_mut(id) {
            el.flags = flags;
        }
    }

    /// Update the layout mode.
    pub fn set_layout(&mut self, id: ElementId, layout: LayoutMode) {
        if let Some(el) = self.get_mut(id) {
            el.layout = layout;
        }
    }

    /// The rendered rectangle of a visible, non-degenerate element.
    ///
    /// Returns `None` for stale ids, hidden elements, elements the host has
    /// not laid out, and rectangles with no area. Degenerate boxes must
    /// never become drop targets, so they are filtered here at the source.
    pub fn rendered_bounds(&self, id: ElementId) -> Option<Rect> {
        let el = self.get(id)?;
        if !el.flags.contains(ElementFlags::VISIBLE) {
            return None;
        }
        let rect = el.bounds?;
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        Some(rect)
    }

    /// Visit live, visible elements whose rendered bounds contain `point`.
    ///
    /// Visit order is unspecified (slot order); callers that need
    /// deepest-first ordering rank the results themselves.
    pub fn visit_containing_point<F: FnMut(ElementId, Rect)>(&self, point: Point, mut f: F) {
        for (idx, slot) in self.elements.iter().enumerate() {
            let Some(el) = slot.as_ref() else {
                continue;
            };
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            let id = ElementId::new(idx as u32, el.generation);
            if let Some(rect) = self.rendered_bounds(id)
                && rect.contains(point)
            {
                f(id, rect);
            }
        }
    }

    // --- internals ---

    fn alloc(&mut self, seed: ElementSeed) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.elements[idx] = Some(Element::new(generation, seed));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.elements.push(Some(Element::new(generation, seed)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ((self.elements.len() - 1) as u32, generation)
        };
        ElementId::new(idx, generation)
    }

    fn get(&self, id: ElementId) -> Option<&Element> {
        let el = self.elements.get(id.idx())?.as_ref()?;
        (el.generation == id.1).then_some(el)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let el = self.elements.get_mut(id.idx())?.as_mut()?;
        (el.generation == id.1).then_some(el)
    }

    /// Access an element; panics if `id` is stale. Internal use only, after
    /// a liveness check.
    pub(crate) fn element(&self, id: ElementId) -> &Element {
        self.elements[id.idx()].as_ref().expect("dangling ElementId")
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements[id.idx()].as_mut().expect("dangling ElementId")
    }

    /// Splice `id` into `parent`'s children at `index` (clamped to the end)
    /// and set the back-reference. Returns the index actually used.
    pub(crate) fn link_parent(&mut self, id: ElementId, parent: ElementId, index: usize) -> usize {
        let children = &mut self.element_mut(parent).children;
        let index = index.min(children.len());
        children.insert(index, id);
        self.element_mut(id).parent = Some(parent);
        index
    }

    pub(crate) fn unlink_parent(&mut self, id: ElementId, parent: ElementId) {
        let p = self.element_mut(parent);
        p.children.retain(|c| *c != id);
        self.element_mut(id).parent = None;
    }
}
