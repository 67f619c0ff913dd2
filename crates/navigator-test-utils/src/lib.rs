// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Navigator integration tests.
//!
//! Deterministic in-process stand-ins for the external services: a scripted
//! completion provider and an offline embedding adapter.

pub mod mock_completion;
pub mod mock_embedder;

pub use mock_completion::MockCompletion;
pub use mock_embedder::MockEmbedder;
