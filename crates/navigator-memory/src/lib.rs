// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed memory for the Navigator mentor engine.
//!
//! Memory fragments are embedded before insertion and recalled by cosine
//! similarity against a query embedding. Projects and their plans live in
//! the same database. Schema is managed by embedded refinery migrations.

pub mod database;
pub mod service;
pub mod store;
pub mod types;

pub use database::{open, open_in_memory};
pub use service::MemoryService;
pub use store::{MemoryStore, ProjectStore};
pub use types::{MemoryRecord, RecalledFragment, cosine_similarity};
