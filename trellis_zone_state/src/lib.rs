// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_zone_state --heading-base-level=0

//! Trellis Zone State: element-relative drop zones with flicker damping.
//!
//! This is the lightweight sibling of the geometric placement path in
//! `trellis_placement`. Instead of gap geometry it classifies the pointer's
//! position *within one target element* into a before/after/inside
//! [`InsertionZone`](zone::InsertionZone), and damps rapid zone flips with a
//! [`ZoneFilter`](zone::ZoneFilter) so a pointer resting near a band
//! boundary does not strobe the insertion indicator.
//!
//! The filter is an explicit per-drag state object: create one when a drag
//! starts, feed it every pointer move, and drop or
//! [`reset`](zone::ZoneFilter::reset) it when the drag ends. Two concurrent
//! drags (separate canvases, tests) use two filters and never interfere.
//!
//! This crate is `no_std`.

#![no_std]

pub mod zone;
