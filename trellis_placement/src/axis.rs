// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow axis derivation.

use kurbo::{Point, Rect};
use trellis_semantics::LayoutMode;

/// Primary flow direction of a container.
///
/// Derived from [`LayoutMode`], never stored. All gap geometry is computed
/// along the main axis and enveloped across the cross axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Axis {
    /// Children advance left to right.
    Horizontal,
    /// Children advance top to bottom.
    Vertical,
}

impl Axis {
    /// The main axis for a container layout mode. Total: flow-like modes
    /// default to vertical, and grid is treated row-major (horizontal), a
    /// deliberate simplification rather than a 2-D solve.
    pub const fn for_layout(mode: LayoutMode) -> Self {
        match mode {
            LayoutMode::FlexRow | LayoutMode::Grid => Self::Horizontal,
            LayoutMode::Flow | LayoutMode::FlexColumn => Self::Vertical,
        }
    }

    /// The other axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// A point's coordinate along this axis.
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// A rectangle's minimum along this axis.
    pub fn min(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x0,
            Self::Vertical => rect.y0,
        }
    }

    /// A rectangle's maximum along this axis.
    pub fn max(self, rect: Rect) -> f64 {
        match self {
            Self::Horizontal => rect.x1,
            Self::Vertical => rect.y1,
        }
    }

    /// Build a rectangle from main-axis and cross-axis ranges.
    pub fn rect(self, main: (f64, f64), cross: (f64, f64)) -> Rect {
        match self {
            Self::Horizontal => Rect::new(main.0, cross.0, main.1, cross.1),
            Self::Vertical => Rect::new(cross.0, main.0, cross.1, main.1),
        }
    }
}
