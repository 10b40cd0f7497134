// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Parlor chat backend.
//!
//! Provides the error taxonomy and the domain types (users, conversations,
//! messages) shared by the storage, service, and gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ParlorError;
pub use types::{Conversation, Message, Sender, User};
