// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_semantics --heading-base-level=0

//! Trellis Semantics: the element vocabulary shared across the Trellis crates.
//!
//! This crate defines *what elements are*, independent of geometry and of any
//! concrete tree representation:
//!
//! - [`ElementKind`]: a closed enumeration of the element categories a design
//!   document can contain, with classification helpers (void/replaced,
//!   interactive, containers) and a tag-equivalence lookup for markup export.
//! - [`LayoutMode`]: how a container arranges its children. Consumers derive
//!   flow axes from this; the mode itself is the only thing stored.
//! - [`can_accept_child`]: the containment predicate every placement path
//!   must consult before proposing to nest one element inside another.
//!
//! Kinds are modeled as a closed enum with explicit lookup tables rather than
//! tag strings, so eligibility and tag mapping cannot drift apart across
//! call sites.
//!
//! # Example
//!
//! ```rust
//! use trellis_semantics::{ElementKind, can_accept_child};
//!
//! // A list only accepts list items, no matter what else is dragged over it.
//! assert!(can_accept_child(ElementKind::List, ElementKind::ListItem, true));
//! assert!(!can_accept_child(ElementKind::List, ElementKind::Frame, true));
//!
//! // An explicit override always wins.
//! assert!(!can_accept_child(ElementKind::Frame, ElementKind::Text, false));
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod kind;
mod layout;
mod rules;

pub use kind::ElementKind;
pub use layout::LayoutMode;
pub use rules::can_accept_child;
