// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits that define the seams of the Navigator engine.

pub mod adapter;
pub mod completion;
pub mod embedding;
pub mod plan;

pub use adapter::PluginAdapter;
pub use completion::CompletionAdapter;
pub use embedding::EmbeddingAdapter;
pub use plan::PlanStore;
