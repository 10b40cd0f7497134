// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Parlor chat backend.
//!
//! Exposes the service operations over a small axum REST API with
//! permissive CORS (the frontend is served separately) and request tracing.

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{AppState, ServerConfig, router, start_server};
