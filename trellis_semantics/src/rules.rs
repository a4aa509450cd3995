// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The containment predicate.

use crate::kind::ElementKind;

/// Whether an element of `parent` kind may hold a child of `child` kind.
///
/// `accepts_override` is the per-element accepts-children flag; an element
/// whose flag is cleared rejects everything regardless of its kind.
///
/// Rules, in priority order:
///
/// 1. Override off rejects.
/// 2. Inherently non-container kinds (leaf text, void/replaced content,
///    interactive controls) reject.
/// 3. Strict containers accept only their structural child kind
///    ([`ElementKind::strict_child`]); all other containers accept any
///    child.
///
/// The function is pure: the result depends only on the three arguments.
/// Every path that proposes an into-placement must consult it; nothing in
/// Trellis nests elements without passing this check.
///
/// ```rust
/// use trellis_semantics::{ElementKind, can_accept_child};
///
/// assert!(can_accept_child(ElementKind::Page, ElementKind::Table, true));
/// assert!(!can_accept_child(ElementKind::Image, ElementKind::Text, true));
/// assert!(!can_accept_child(ElementKind::TableRow, ElementKind::Frame, true));
/// assert!(can_accept_child(ElementKind::TableRow, ElementKind::TableCell, true));
/// ```
pub fn can_accept_child(
    parent: ElementKind,
    child: ElementKind,
    accepts_override: bool,
) -> bool {
    if !accepts_override {
        return false;
    }
    if !parent.is_container() {
        return false;
    }
    match parent.strict_child() {
        Some(required) => child == required,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::can_accept_child;
    use crate::kind::ElementKind;

    #[test]
    fn override_off_rejects_everything() {
        for parent in ElementKind::ALL {
            for child in ElementKind::ALL {
                assert!(
                    !can_accept_child(parent, child, false),
                    "{parent:?} accepted {child:?} with override off"
                );
            }
        }
    }

    #[test]
    fn non_containers_reject_everything() {
        let leaves = [
            ElementKind::Text,
            ElementKind::Image,
            ElementKind::Video,
            ElementKind::Input,
            ElementKind::Button,
            ElementKind::Checkbox,
            ElementKind::Divider,
        ];
        for parent in leaves {
            for child in ElementKind::ALL {
                assert!(
                    !can_accept_child(parent, child, true),
                    "{parent:?} accepted {child:?}"
                );
            }
        }
    }

    #[test]
    fn strict_containers_accept_only_their_child_kind() {
        for child in ElementKind::ALL {
            assert_eq!(
                can_accept_child(ElementKind::List, child, true),
                child == ElementKind::ListItem
            );
            assert_eq!(
                can_accept_child(ElementKind::Table, child, true),
                child == ElementKind::TableRow
            );
            assert_eq!(
                can_accept_child(ElementKind::TableRow, child, true),
                child == ElementKind::TableCell
            );
        }
    }

    #[test]
    fn open_containers_accept_any_child() {
        for parent in [
            ElementKind::Page,
            ElementKind::Frame,
            ElementKind::ListItem,
            ElementKind::TableCell,
        ] {
            for child in ElementKind::ALL {
                assert!(
                    can_accept_child(parent, child, true),
                    "{parent:?} rejected {child:?}"
                );
            }
        }
    }

    #[test]
    fn predicate_is_pure() {
        // Same inputs, same answer, across the whole table.
        for parent in ElementKind::ALL {
            for child in ElementKind::ALL {
                for flag in [false, true] {
                    let a = can_accept_child(parent, child, flag);
                    let b = can_accept_child(parent, child, flag);
                    assert_eq!(a, b);
                }
            }
        }
    }
}
