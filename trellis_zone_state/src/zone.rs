// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-zone classification and the hysteresis filter.
//!
//! This module answers "if the user released right now over this element,
//! would the dragged element land before it, after it, or inside it?" from
//! nothing but the element's rectangle and the pointer position. It is used
//! for direct element-on-element reorder feedback and deliberately knows
//! nothing about gaps, axes, or the tree.
//!
//! ## Classification
//!
//! The target's rectangle is split into vertical thirds: the top band maps
//! to [`ZonePosition::Before`], the bottom band to [`ZonePosition::After`],
//! and the middle band to [`ZonePosition::Inside`] when the target accepts
//! children. For targets that do not, the middle band splits at the
//! midpoint into before/after, so every pointer position still classifies.
//!
//! ## Hysteresis
//!
//! Raw classification flickers when the pointer rests near a band boundary:
//! sub-pixel jitter flips the zone every sample and the insertion indicator
//! strobes. [`ZoneFilter`] damps this. While the pointer stays on the same
//! target and moves less than [`ZoneParams::move_buffer`] between samples, a
//! changed raw zone must persist for [`ZoneParams::stability_threshold`]
//! consecutive samples before the filter commits to it; until then the
//! previously returned zone is repeated. Decisive movement (at least the
//! buffer distance in one sample) and target changes commit immediately.
//!
//! ## Usage
//!
//! ```
//! use trellis_zone_state::zone::{ZoneFilter, ZonePosition, classify_zone};
//! use kurbo::{Point, Rect};
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 90.0);
//! let mut filter: ZoneFilter<u32> = ZoneFilter::new();
//!
//! // Pointer settles in the top third of element 7.
//! for y in [26.0, 28.0] {
//!     let raw = classify_zone(7, bounds, Point::new(50.0, y), true);
//!     let zone = filter.filter(raw, Point::new(50.0, y));
//!     assert_eq!(zone.position, ZonePosition::Before);
//! }
//!
//! // One jittery sample just over the boundary keeps the old answer.
//! let raw = classify_zone(7, bounds, Point::new(50.0, 31.0), true);
//! let zone = filter.filter(raw, Point::new(50.0, 31.0));
//! assert_eq!(zone.position, ZonePosition::Before);
//! ```

use kurbo::{Point, Rect};

/// Where, relative to the target element, a release would land.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ZonePosition {
    /// As the target's previous sibling.
    Before,
    /// As the target's next sibling.
    After,
    /// As the target's last child.
    Inside,
}

/// A classified drop zone on one target element.
///
/// Carries no tree-mutation semantics by itself; the host translates a zone
/// into an insert or move once the drag is released.
#[derive(Clone, Debug, PartialEq)]
pub struct InsertionZone<K> {
    /// The element the pointer is over.
    pub target: K,
    /// Which band of the target the pointer is in.
    pub position: ZonePosition,
    /// The target's rectangle at classification time.
    pub bounds: Rect,
}

impl<K> InsertionZone<K> {
    /// The rectangle a host should highlight for this zone.
    ///
    /// `Before`/`After` produce an insertion line of the given thickness
    /// centered on the corresponding edge; `Inside` produces the whole
    /// target rectangle.
    pub fn indicator_rect(&self, thickness: f64) -> Rect {
        let half = thickness * 0.5;
        match self.position {
            ZonePosition::Before => Rect::new(
                self.bounds.x0,
                self.bounds.y0 - half,
                self.bounds.x1,
                self.bounds.y0 + half,
            ),
            ZonePosition::After => Rect::new(
                self.bounds.x0,
                self.bounds.y1 - half,
                self.bounds.x1,
                self.bounds.y1 + half,
            ),
            ZonePosition::Inside => self.bounds,
        }
    }
}

/// Tuning for the hysteresis filter.
///
/// The defaults are empirically chosen UX values, not structural
/// invariants; hosts may override them per drag session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoneParams {
    /// Pointer displacement between consecutive samples below which a zone
    /// change is treated as jitter and damped.
    pub move_buffer: f64,
    /// Number of consecutive jittery samples after which the filter
    /// commits to the new zone anyway.
    pub stability_threshold: u32,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            move_buffer: 8.0,
            stability_threshold: 3,
        }
    }
}

/// Classify the pointer's position within a target element.
///
/// Pure: the result depends only on the arguments. `accepts_children`
/// decides whether the middle band is an `Inside` zone or splits into
/// before/after at the midpoint.
pub fn classify_zone<K>(
    target: K,
    bounds: Rect,
    point: Point,
    accepts_children: bool,
) -> InsertionZone<K> {
    let third = bounds.height() / 3.0;
    let position = if point.y < bounds.y0 + third {
        ZonePosition::Before
    } else if point.y > bounds.y1 - third {
        ZonePosition::After
    } else if accepts_children {
        ZonePosition::Inside
    } else if point.y < bounds.y0 + bounds.height() * 0.5 {
        ZonePosition::Before
    } else {
        ZonePosition::After
    };
    InsertionZone {
        target,
        position,
        bounds,
    }
}

#[derive(Clone, Debug)]
struct Sample<K> {
    zone: InsertionZone<K>,
    pointer: Point,
    /// Countdown of confidence in the returned zone, saturating at
    /// `stability_threshold`. Reaches zero after `stability_threshold`
    /// consecutive jittery samples, which commits the new zone.
    stability: u32,
}

/// Hysteresis filter for one drag session.
///
/// Feed it the raw classification for every pointer-move sample; it returns
/// the damped zone to display. Reset it when the drag ends, is canceled, or
/// no target is under the pointer. State is owned by the value: concurrent
/// drags use independent filters.
#[derive(Clone, Debug)]
pub struct ZoneFilter<K> {
    /// Tuning parameters; see [`ZoneParams`].
    pub params: ZoneParams,
    last: Option<Sample<K>>,
}

impl<K: PartialEq + Clone> ZoneFilter<K> {
    /// Create a filter with default parameters.
    pub fn new() -> Self {
        Self::with_params(ZoneParams::default())
    }

    /// Create a filter with custom parameters.
    pub fn with_params(params: ZoneParams) -> Self {
        Self { params, last: None }
    }

    /// Process one pointer-move sample and return the zone to display.
    ///
    /// `pointer` must be the position `raw` was classified at; displacement
    /// between consecutive samples is measured from it.
    pub fn filter(&mut self, raw: InsertionZone<K>, pointer: Point) -> InsertionZone<K> {
        let threshold = self.params.stability_threshold.max(1);
        let Some(last) = self.last.as_mut() else {
            // First zone of the drag: commit with minimal confidence.
            return self.commit(raw, pointer, 1);
        };

        if last.zone.target != raw.target {
            // No hysteresis across targets.
            return self.commit(raw, pointer, 1);
        }

        if last.zone.position == raw.position {
            // Agreement rebuilds confidence (saturating) and refreshes the
            // stored geometry.
            last.stability = (last.stability + 1).min(threshold);
            last.zone = raw.clone();
            last.pointer = pointer;
            return raw;
        }

        let buffer = self.params.move_buffer;
        if pointer.distance_squared(last.pointer) >= buffer * buffer {
            // Decisive movement: track it immediately.
            return self.commit(raw, pointer, 1);
        }

        // Jitter: burn one unit of confidence and keep the old answer until
        // it runs out.
        last.stability = last.stability.saturating_sub(1);
        if last.stability == 0 {
            return self.commit(raw, pointer, threshold);
        }
        last.pointer = pointer;
        last.zone.clone()
    }

    /// The zone most recently returned, if any.
    pub fn current(&self) -> Option<&InsertionZone<K>> {
        self.last.as_ref().map(|s| &s.zone)
    }

    /// Forget all transient state.
    ///
    /// Call when the drag ends or is canceled, and whenever no zone is
    /// found under the pointer, so the next drag starts fresh.
    pub fn reset(&mut self) {
        self.last = None;
    }

    fn commit(
        &mut self,
        zone: InsertionZone<K>,
        pointer: Point,
        stability: u32,
    ) -> InsertionZone<K> {
        self.last = Some(Sample {
            zone: zone.clone(),
            pointer,
            stability,
        });
        zone
    }
}

impl<K: PartialEq + Clone> Default for ZoneFilter<K> {
    fn default() -> Self {
        Self::new()
    }
}
