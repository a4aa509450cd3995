// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the design tree: element identifiers, flags, and seeds.

use trellis_semantics::{ElementKind, LayoutMode};

/// Identifier for an element in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and drop capability.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is rendered (participates in point queries).
        const VISIBLE = 0b0000_0001;
        /// Element may receive dropped children. Clearing this on a
        /// container kind is the per-element containment override.
        const ACCEPTS_CHILDREN = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ACCEPTS_CHILDREN
    }
}

/// Data for a brand-new element, before it has an id or a place in the tree.
///
/// Palette drags carry one of these; inserting it into the tree is what
/// gives it an [`ElementId`].
#[derive(Clone, Debug)]
pub struct ElementSeed {
    /// Category of the element.
    pub kind: ElementKind,
    /// How the element arranges its children, if it is a container.
    pub layout: LayoutMode,
    /// Visibility and drop-capability flags.
    pub flags: ElementFlags,
}

impl ElementSeed {
    /// Seed for an element of the given kind with default layout and flags.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            layout: LayoutMode::default(),
            flags: ElementFlags::default(),
        }
    }

    /// Set the layout mode.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Set the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }
}
