// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tentative drop selection within one candidate container.

use kurbo::{Point, Rect};

use crate::PlacementParams;
use crate::gap::Gap;

/// A speculative drop produced for one candidate container.
///
/// Tentative drops carry no legality guarantee; the resolver either
/// confirms them or rewrites them (see [`crate::resolver`]).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TentativeDrop<K> {
    /// Append into the container.
    Into {
        /// The container to append into.
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

/// Decide what a release at `point` over one candidate container means.
///
/// Gaps take priority over the inside band: a pointer near a sibling
/// boundary always reads as a between-placement, never as an ambiguous
/// nested into-placement. A childless container is the degenerate case —
/// its single spanning gap and an append are the same location, so it
/// reads as `Into`. The inside band is the container's rectangle inset by
/// [`PlacementParams::inside_band_ratio`] per side; a point in it (outside
/// every gap) means "append into this container". A point in neither —
/// the dead zone near the container's edge — yields `None` and the caller
/// moves on to the next candidate.
pub fn choose_drop<K: Copy>(
    point: Point,
    container: K,
    container_rect: Rect,
    child_count: usize,
    gaps: &[Gap],
    params: &PlacementParams,
) -> Option<TentativeDrop<K>> {
    if !container_rect.contains(point) {
        return None;
    }

    for gap in gaps {
        if gap.rect.contains(point) {
            if child_count == 0 {
                return Some(TentativeDrop::Into { container });
            }
            return Some(TentativeDrop::Between {
                container,
                index: gap.index,
            });
        }
    }

    if inside_band(container_rect, params.inside_band_ratio).contains(point) {
        return Some(TentativeDrop::Into { container });
    }

    None
}

/// The container rectangle inset by `ratio` of its size per side.
pub(crate) fn inside_band(rect: Rect, ratio: f64) -> Rect {
    let dx = rect.width() * ratio;
    let dy = rect.height() * ratio;
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}
