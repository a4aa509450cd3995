// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integrations with other Trellis crates.
//!
//! ## Feature
//!
//! Enable `design_tree_adapter` for the [`design_tree`] module, which
//! implements this crate's lookup traits for
//! `trellis_design_tree::DesignTree` and converts resolved drops into tree
//! mutation ops.

#[cfg(feature = "design_tree_adapter")]
pub mod design_tree;
