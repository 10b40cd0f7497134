// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Substring-based intent matching.

use crate::catalog::{INTENTS, Intent};

/// Match free-text input against the intent catalog.
///
/// Input is normalized by trimming surrounding whitespace and lowercasing.
/// Intents are scanned in declared order; the first one with any trigger
/// occurring as a substring wins. Empty, whitespace-only, and non-matching
/// input all yield `None`.
pub fn match_intent(text: &str) -> Option<&'static Intent> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    INTENTS
        .iter()
        .find(|intent| intent.triggers.iter().any(|t| normalized.contains(t)))
}
