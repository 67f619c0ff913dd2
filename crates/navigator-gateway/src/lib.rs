// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Navigator mentor engine.
//!
//! Routes:
//! - `POST /v1/navigator` — one mentor turn
//! - `GET /health` — liveness and uptime

pub mod handlers;
pub mod server;

pub use server::{GatewayState, router, start_server};
