// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_design_tree --heading-base-level=0

//! Trellis Design Tree: the element tree a design document is made of.
//!
//! - Represents the document as a single-rooted hierarchy of elements, each
//!   with a kind, layout mode, flags, ordered children, and the world-space
//!   rectangle the host's renderer last resolved for it.
//! - Hands out generational [`ElementId`] handles; every accessor tolerates
//!   stale ids by returning `None` or an empty slice.
//! - Applies [`InsertOp`]/[`MoveOp`] mutation commands under a non-loss
//!   guarantee: whatever the command declared about the old location, and
//!   whether or not the destination still exists, the affected element ends
//!   up in exactly one parent's child list.
//!
//! ## Not a layout engine
//!
//! This crate does not measure or arrange anything. The host computes layout
//! with whatever system it likes and feeds resolved rectangles back in via
//! [`DesignTree::set_bounds`]; placement code reads them out through
//! [`DesignTree::rendered_bounds`] and the point-query visitor.
//!
//! ## Mutation discipline
//!
//! All structural edits go through `&mut self` methods on [`DesignTree`];
//! the placement engine never holds a mutable reference. It emits
//! [`TreeOp`] values which the host applies atomically between queries.
//!
//! ## Example
//!
//! ```rust
//! use trellis_design_tree::{DesignTree, Destination, ElementSeed, InsertIndex, TreeOp};
//! use trellis_semantics::ElementKind;
//!
//! let mut tree = DesignTree::new();
//! let root = tree.root();
//! let frame = tree.insert(root, ElementSeed::new(ElementKind::Frame));
//!
//! // Ops are defensive: an out-of-range index is clamped, never an error.
//! let applied = tree.apply(TreeOp::insert(
//!     ElementSeed::new(ElementKind::Text),
//!     Destination::new(frame, InsertIndex::At(99)),
//! ));
//! assert_eq!(applied.unwrap().index, 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod tree;
mod types;

pub use apply::{Applied, Destination, InsertIndex, InsertOp, MoveOp, TreeOp};
pub use tree::DesignTree;
pub use types::{ElementFlags, ElementId, ElementSeed};
