// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration layer for the Parlor chat backend.
//!
//! Ties storage, password hashing, and the reply engine together into the
//! operations the gateway exposes: account registration/login, conversation
//! lifecycle, and chat turns. All operations are stateless functions over a
//! shared [`parlor_storage::Database`] handle.

pub mod accounts;
pub mod chat;
pub mod conversations;

use chrono::{SecondsFormat, Utc};

/// Current time as a fixed-width RFC 3339 string with millisecond precision.
///
/// Fixed width keeps lexicographic ordering consistent with creation order.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
