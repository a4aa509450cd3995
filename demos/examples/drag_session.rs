// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full drag, from pointer moves to an applied tree mutation.
//!
//! This example shows how to combine:
//! - `trellis_design_tree` for the document and its mutation ops,
//! - `trellis_placement` for per-move drop resolution,
//! - `trellis_zone_state` for the lighter element-relative feedback path.
//!
//! Run:
//! - `cargo run -p trellis_demos --example drag_session`

use kurbo::{Point, Rect};
use trellis_design_tree::{DesignTree, ElementSeed};
use trellis_placement::adapters::design_tree::op_for_drop;
use trellis_placement::resolver::ResolvedDrop;
use trellis_placement::session::{DragSession, DragSource};
use trellis_semantics::{ElementKind, LayoutMode};
use trellis_zone_state::zone::{ZoneFilter, classify_zone};

fn main() {
    // Build a small document: a page holding a column frame with two text
    // blocks and an empty list. Bounds are what a renderer would have
    // resolved; here we just state them.
    let mut tree = DesignTree::new();
    let page = tree.root();
    tree.set_bounds(page, Some(Rect::new(0.0, 0.0, 800.0, 600.0)));

    let frame = tree.insert(
        page,
        ElementSeed::new(ElementKind::Frame).with_layout(LayoutMode::FlexColumn),
    );
    tree.set_bounds(frame, Some(Rect::new(100.0, 50.0, 500.0, 550.0)));

    let title = tree.insert(frame, ElementSeed::new(ElementKind::Text));
    tree.set_bounds(title, Some(Rect::new(110.0, 60.0, 490.0, 160.0)));

    let body = tree.insert(frame, ElementSeed::new(ElementKind::Text));
    tree.set_bounds(body, Some(Rect::new(110.0, 240.0, 490.0, 340.0)));

    let list = tree.insert(frame, ElementSeed::new(ElementKind::List));
    tree.set_bounds(list, Some(Rect::new(110.0, 420.0, 490.0, 540.0)));

    // Drag a table row out of the palette across the document. The row is
    // legal in the frame but not in the list; watch the resolver keep the
    // drop alive either way.
    let source = DragSource::New {
        kind: ElementKind::TableRow,
    };
    let mut session = DragSession::new(source, page);

    for (label, pt) in [
        ("over the gap between title and body", Point::new(300.0, 200.0)),
        ("over the empty list", Point::new(300.0, 480.0)),
        ("off the frame, over the page", Point::new(650.0, 300.0)),
    ] {
        println!("\n== Move: {label} @ ({:.0}, {:.0}) ==", pt.x, pt.y);
        match session.update(pt, &tree) {
            Some(ResolvedDrop::Between { container, index }) => {
                println!("between children of {container:?} at index {index}");
            }
            Some(ResolvedDrop::Into { container }) => {
                println!("append into {container:?}");
            }
            None => println!("no legal destination"),
        }
        if let Some(rect) = session.indicator() {
            println!("indicator: {rect:?}");
        }
    }

    // Release: the decision from the most recent move becomes a tree op.
    let source = *session.source();
    let drop = session.finish().expect("the page accepts table rows");
    let op = op_for_drop(&tree, &source, drop);
    let applied = tree.apply(op).expect("inserts always apply");
    println!(
        "\nApplied: {:?} under {:?} at index {}",
        applied.id, applied.parent, applied.index
    );
    println!("Page children: {:?}", tree.children_of(page));

    // The discrete feedback path: classify the pointer against one element
    // and damp the answer across jittery samples. The pointer drifts over
    // the body's midpoint in small steps; the filter holds `Before` until
    // the new answer has persisted long enough, then commits.
    let mut filter: ZoneFilter<u64> = ZoneFilter::new();
    let bounds = tree.rendered_bounds(body).expect("body is rendered");
    println!("\n== Zone feedback over the body text ==");
    for y in [250.0, 252.0, 288.0, 292.0, 294.0, 296.0] {
        let pt = Point::new(300.0, y);
        let raw = classify_zone(2, bounds, pt, false);
        let zone = filter.filter(raw, pt);
        println!("y={y:5.1} -> {:?}", zone.position);
    }
}
