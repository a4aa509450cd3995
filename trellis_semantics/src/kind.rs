// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element kind enumeration and classification tables.

/// Category of an element in a design document.
///
/// The set is closed: everything the editor can create falls into one of
/// these variants, and all branching on element category goes through the
/// classification methods below rather than tag-name comparison.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    /// Document root. Accepts any child.
    Page,
    /// Generic container (a styled box).
    Frame,
    /// Text block. Leaf: never accepts children.
    Text,
    /// Raster or vector image. Replaced content.
    Image,
    /// Embedded video. Replaced content.
    Video,
    /// Single-line form input.
    Input,
    /// Clickable button.
    Button,
    /// Checkbox form control.
    Checkbox,
    /// Horizontal rule. Void.
    Divider,
    /// Ordered or unordered list. Accepts only [`ElementKind::ListItem`].
    List,
    /// Item within a list.
    ListItem,
    /// Table. Accepts only [`ElementKind::TableRow`].
    Table,
    /// Row within a table. Accepts only [`ElementKind::TableCell`].
    TableRow,
    /// Cell within a table row.
    TableCell,
}

impl ElementKind {
    /// Whether this kind is void or replaced content (image-like, form
    /// control, rule). Such elements render their own content and can
    /// never hold children.
    pub const fn is_void_or_replaced(self) -> bool {
        matches!(
            self,
            Self::Image | Self::Video | Self::Input | Self::Checkbox | Self::Divider
        )
    }

    /// Whether this kind is an interactive control.
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Button | Self::Input | Self::Checkbox)
    }

    /// Whether this kind is a leaf text element.
    pub const fn is_leaf_text(self) -> bool {
        matches!(self, Self::Text)
    }

    /// Whether this kind can structurally hold children at all.
    ///
    /// This is the inherent property of the kind; a per-element override
    /// flag can still turn an individual container off. Which *specific*
    /// children a container takes is answered by
    /// [`can_accept_child`][crate::can_accept_child].
    pub const fn is_container(self) -> bool {
        !self.is_void_or_replaced() && !self.is_interactive() && !self.is_leaf_text()
    }

    /// The sole child kind a strict container accepts, if this kind is one.
    ///
    /// Strict pairs mirror markup structure: lists hold items, tables hold
    /// rows, rows hold cells. `None` means the kind has no strict rule.
    pub const fn strict_child(self) -> Option<Self> {
        match self {
            Self::List => Some(Self::ListItem),
            Self::Table => Some(Self::TableRow),
            Self::TableRow => Some(Self::TableCell),
            _ => None,
        }
    }

    /// The markup tag this kind exports as.
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::Page => "main",
            Self::Frame => "div",
            Self::Text => "p",
            Self::Image => "img",
            Self::Video => "video",
            Self::Input | Self::Checkbox => "input",
            Self::Button => "button",
            Self::Divider => "hr",
            Self::List => "ul",
            Self::ListItem => "li",
            Self::Table => "table",
            Self::TableRow => "tr",
            Self::TableCell => "td",
        }
    }

    /// All kinds, in declaration order. Handy for exhaustive table tests.
    pub const ALL: [Self; 14] = [
        Self::Page,
        Self::Frame,
        Self::Text,
        Self::Image,
        Self::Video,
        Self::Input,
        Self::Button,
        Self::Checkbox,
        Self::Divider,
        Self::List,
        Self::ListItem,
        Self::Table,
        Self::TableRow,
        Self::TableCell,
    ];
}
