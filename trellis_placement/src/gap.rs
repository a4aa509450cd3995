// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion gap geometry.
//!
//! A gap is the region between (or around) a container's visible children
//! along the container's main axis, wide enough to aim a drop at. Gaps
//! carry the child-sequence index a release in them would insert at.

use alloc::vec::Vec;
use core::cmp::Ordering;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::PlacementParams;
use crate::axis::Axis;

/// A targetable insertion region inside a container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gap {
    /// Child-sequence index a drop in this gap inserts at.
    pub index: usize,
    /// World-space region of the gap.
    pub rect: Rect,
    /// Axis the gap was computed along.
    pub axis: Axis,
}

/// Compute the insertion gaps of a container.
///
/// `children` pairs each visible child's index in the child sequence with
/// its rendered rectangle; callers are expected to have filtered out
/// hidden and degenerate children already. Children are sorted by
/// main-axis position internally, so callers need not pre-sort (for flow
/// and flex layouts the visual order and the sequence order coincide).
///
/// Emitted gaps, in main-axis order:
///
/// - a leading gap from the container's edge to the first child,
/// - one gap between each adjacent pair,
/// - a trailing gap from the last child to the container's edge,
/// - for an empty container, a single gap spanning the whole container at
///   index 0.
///
/// Between-gaps span the cross-axis envelope of their two neighbors; edge
/// gaps use the container's cross extent. Any gap whose main-axis extent
/// is below [`PlacementParams::min_gap_extent`] is discarded, so sub-pixel
/// slivers (including overlap between children) are never offered as drop
/// targets.
pub fn locate_gaps(
    container: Rect,
    axis: Axis,
    children: &[(usize, Rect)],
    params: &PlacementParams,
) -> Vec<Gap> {
    let mut gaps = Vec::with_capacity(children.len() + 1);
    if children.is_empty() {
        push_gap(&mut gaps, 0, container, axis, params);
        return gaps;
    }

    let mut sorted: SmallVec<[(usize, Rect); 16]> = SmallVec::from_slice(children);
    sorted.sort_by(|a, b| {
        axis.min(a.1)
            .partial_cmp(&axis.min(b.1))
            .unwrap_or(Ordering::Equal)
    });

    let cross = axis.cross();
    let container_cross = (cross.min(container), cross.max(container));

    // Leading edge gap.
    let (first_seq, first_rect) = sorted[0];
    push_gap(
        &mut gaps,
        first_seq,
        axis.rect((axis.min(container), axis.min(first_rect)), container_cross),
        axis,
        params,
    );

    // Between each adjacent pair.
    for pair in sorted.windows(2) {
        let (_, prev) = pair[0];
        let (next_seq, next) = pair[1];
        let envelope = (
            cross.min(prev).min(cross.min(next)),
            cross.max(prev).max(cross.max(next)),
        );
        push_gap(
            &mut gaps,
            next_seq,
            axis.rect((axis.max(prev), axis.min(next)), envelope),
            axis,
            params,
        );
    }

    // Trailing edge gap.
    let (last_seq, last_rect) = sorted[sorted.len() - 1];
    push_gap(
        &mut gaps,
        last_seq + 1,
        axis.rect((axis.max(last_rect), axis.max(container)), container_cross),
        axis,
        params,
    );

    gaps
}

fn push_gap(gaps: &mut Vec<Gap>, index: usize, rect: Rect, axis: Axis, params: &PlacementParams) {
    let extent = axis.max(rect) - axis.min(rect);
    if extent < params.min_gap_extent {
        return;
    }
    gaps.push(Gap { index, rect, axis });
}
