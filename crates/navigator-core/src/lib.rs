// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core trait definitions, error types, and the response contract for the
//! Navigator mentor engine.
//!
//! This crate has no I/O of its own. It defines the seams the rest of the
//! workspace plugs into: the adapter traits, the shared conversation and
//! response types, and the total [`response::normalize`] projection.

pub mod error;
pub mod response;
pub mod traits;
pub mod types;

pub use error::NavigatorError;
pub use response::normalize;
pub use traits::{CompletionAdapter, EmbeddingAdapter, PlanStore, PluginAdapter};
pub use types::{
    AdapterType, ChatMessage, ChatRole, Completion, CompletionRequest, Guidance, HealthStatus,
    Mode, NavigatorResponse, PlanStep, ProjectContext, ToolCallRequest, ToolSchema,
};
