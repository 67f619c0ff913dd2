// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI provider for the Navigator mentor engine.
//!
//! One client serves both concerns the engine needs from the provider:
//! chat completions (with tool calling) and text embeddings. All calls are
//! single-attempt; orchestration policy lives upstream.

pub mod adapter;
pub mod client;
pub mod types;

pub use client::OpenAiClient;
