// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container layout modes.

/// How a container arranges its children.
///
/// This is the stored property; flow axes are derived from it by consumers
/// (see `trellis_placement`). The default is normal block flow.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LayoutMode {
    /// Normal block flow: children stack vertically.
    #[default]
    Flow,
    /// Flex container with a horizontal main axis.
    FlexRow,
    /// Flex container with a vertical main axis.
    FlexColumn,
    /// Grid container. Treated row-major for placement purposes.
    Grid,
}
