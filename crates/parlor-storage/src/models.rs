// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types live in `parlor-core::types` so the service and
//! gateway crates can use them without depending on storage. This module
//! re-exports them for convenience within the storage crate.

pub use parlor_core::types::{Conversation, Message, Sender, User};
