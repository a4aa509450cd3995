// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Trellis crates. See the `examples/` directory.
