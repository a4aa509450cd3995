// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation commands and their application.
//!
//! The placement engine decides *where* an element should land and encodes
//! the decision as a [`TreeOp`]; this module is the only place that turns
//! such a decision into structure. Application is total and defensive:
//!
//! - An unknown or stale destination parent falls back to the root.
//! - A destination inside the moved element's own subtree falls back to the
//!   root (a move must never create a cycle).
//! - Requested indices are clamped into `[0, child_count]`;
//!   [`InsertIndex::End`] means `child_count`.
//! - A declared old parent that does not actually list the element is
//!   tolerated; the insert half still runs, so the element is placed
//!   rather than lost.
//!
//! After any successful application the affected element appears in exactly
//! one parent's child sequence.

use crate::tree::DesignTree;
use crate::types::{ElementId, ElementSeed};

/// Position within a parent's child sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertIndex {
    /// Append after the current last child.
    End,
    /// Insert before the child currently at this index (clamped).
    At(usize),
}

/// A parent/index pair naming a location in the tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Destination {
    /// Parent the element should end up under.
    pub parent: ElementId,
    /// Position within that parent's children.
    pub index: InsertIndex,
}

impl Destination {
    /// A destination at an explicit parent and index.
    pub const fn new(parent: ElementId, index: InsertIndex) -> Self {
        Self { parent, index }
    }

    /// A destination appending to `parent`.
    pub const fn end_of(parent: ElementId) -> Self {
        Self {
            parent,
            index: InsertIndex::End,
        }
    }
}

/// Create a brand-new element at a destination.
#[derive(Clone, Debug)]
pub struct InsertOp {
    /// Data for the element to create.
    pub seed: ElementSeed,
    /// Where it should land.
    pub to: Destination,
}

/// Re-home an existing element.
#[derive(Copy, Clone, Debug)]
pub struct MoveOp {
    /// The element to move.
    pub id: ElementId,
    /// Where the issuer believes the element currently is. May be stale;
    /// application tolerates a parent that no longer lists the element.
    pub from: Destination,
    /// Where it should land.
    pub to: Destination,
}

/// A mutation command for [`DesignTree::apply`].
#[derive(Clone, Debug)]
pub enum TreeOp {
    /// Create a new element.
    Insert(InsertOp),
    /// Move an existing element.
    Move(MoveOp),
}

impl TreeOp {
    /// Convenience constructor for an insert command.
    pub fn insert(seed: ElementSeed, to: Destination) -> Self {
        Self::Insert(InsertOp { seed, to })
    }

    /// Convenience constructor for a move command.
    pub fn move_element(id: ElementId, from: Destination, to: Destination) -> Self {
        Self::Move(MoveOp { id, from, to })
    }
}

/// Where an applied command actually placed the element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Applied {
    /// The affected element (freshly created for inserts).
    pub id: ElementId,
    /// Parent the element landed under (after any fallback).
    pub parent: ElementId,
    /// Index the element landed at (after clamping).
    pub index: usize,
}

impl DesignTree {
    /// Apply a mutation command.
    ///
    /// Returns `None` only for a [`MoveOp`] whose element is stale or is
    /// the root; inserts always succeed.
    pub fn apply(&mut self, op: TreeOp) -> Option<Applied> {
        match op {
            TreeOp::Insert(op) => Some(self.apply_insert(op)),
            TreeOp::Move(op) => self.apply_move(op),
        }
    }

    /// Create the seeded element at `op.to` (see module docs for the
    /// fallback and clamping rules).
    pub fn apply_insert(&mut self, op: InsertOp) -> Applied {
        let parent = if self.is_alive(op.to.parent) {
            op.to.parent
        } else {
            self.root()
        };
        let index = self.resolve_index(parent, op.to.index);
        let id = self.insert_at(parent, op.seed, index);
        Applied { id, parent, index }
    }

    /// Move `op.id` to `op.to` (see module docs for the fallback and
    /// clamping rules). Returns `None` if the element is stale or is the
    /// root; the tree is left untouched in that case.
    pub fn apply_move(&mut self, op: MoveOp) -> Option<Applied> {
        if !self.is_alive(op.id) || op.id == self.root() {
            return None;
        }

        // Detach. The declared old parent is only a hint: unlink from the
        // recorded parent (the structural truth), then drop any leftover
        // listing under the declared parent so stale bookkeeping cannot
        // leave a second reference behind.
        if let Some(actual) = self.parent_of(op.id) {
            self.unlink_parent(op.id, actual);
        }
        if self.is_alive(op.from.parent) {
            self.element_mut(op.from.parent)
                .children
                .retain(|c| *c != op.id);
        }

        // Destination, with root fallback for stale parents and for
        // would-be cycles.
        let parent = if self.is_alive(op.to.parent) && !self.is_in_subtree(op.to.parent, op.id) {
            op.to.parent
        } else {
            self.root()
        };
        let index = self.resolve_index(parent, op.to.index);
        let index = self.link_parent(op.id, parent, index);
        Some(Applied {
            id: op.id,
            parent,
            index,
        })
    }

    /// Resolve an [`InsertIndex`] against the parent's current child count.
    fn resolve_index(&self, parent: ElementId, index: InsertIndex) -> usize {
        let count = self.children_of(parent).len();
        match index {
            InsertIndex::End => count,
            InsertIndex::At(i) => i.min(count),
        }
    }
}
