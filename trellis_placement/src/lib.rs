// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_placement --heading-base-level=0

//! Trellis Placement: where a dragged element lands.
//!
//! Given a pointer position and read access to the element tree and its
//! rendered rectangles, this crate decides the destination of a dragged (or
//! freshly created) element, enforcing containment legality and never
//! silently discarding a drop the document can accept somewhere.
//!
//! ## Pipeline
//!
//! For every pointer move, a [`DragSession`](session::DragSession) runs:
//!
//! 1. [`candidates`]: rank the rendered elements under the pointer,
//!    deepest first, keeping only drop-capable containers.
//! 2. [`axis`] + [`gap`]: per candidate, derive the container's flow axis
//!    and the insertion gaps between its visible children.
//! 3. [`chooser`]: turn point-in-gap / point-in-inside-band tests into a
//!    tentative drop, or pass on the candidate.
//! 4. [`resolver`]: make the tentative drop legal — accept it, climb to the
//!    nearest accepting ancestor, or bounce to sibling placement.
//!
//! The session keeps the decision from the most recent pointer position;
//! on release the host converts it into a `trellis_design_tree` op (see
//! [`adapters`] with the `design_tree_adapter` feature) and applies it.
//!
//! ## Inputs
//!
//! All stages are generic over an id type `K` and read the document through
//! the three small traits in [`lookup`]: [`TreeRead`](lookup::TreeRead),
//! [`LayoutRead`](lookup::LayoutRead), and
//! [`PointQuery`](lookup::PointQuery). The crate never computes layout and
//! never mutates the tree.
//!
//! ## Tuning
//!
//! The UI feel constants live in [`PlacementParams`]: a minimum gap extent
//! (slivers below it are never offered as targets) and the inside-band
//! inset. Defaults carry the tool's tuned values.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod axis;
pub mod candidates;
pub mod chooser;
pub mod gap;
pub mod lookup;
pub mod resolver;
pub mod session;

/// Tuning for the geometric placement path.
///
/// These encode UX feel, not structural correctness; hosts may override
/// them per session. Defaults are the tool's tuned values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementParams {
    /// Minimum main-axis extent for a gap to be offered as a drop target.
    /// Degenerate slivers below this read as broken feedback.
    pub min_gap_extent: f64,
    /// Fractional inset (per side) of a container's rectangle forming the
    /// "drop inside" band.
    pub inside_band_ratio: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            min_gap_extent: 6.0,
            inside_band_ratio: 0.15,
        }
    }
}
