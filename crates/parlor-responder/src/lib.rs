// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based reply engine for the Parlor chat backend.
//!
//! Three small pieces: a static intent catalog (trigger phrases -> candidate
//! replies), a substring matcher over normalized input, and a uniform random
//! reply selector with an injectable random source. No network, no state,
//! no latency.

pub mod catalog;
pub mod matcher;
pub mod selector;

pub use catalog::{DEFAULT_REPLY, INTENTS, Intent};
pub use matcher::match_intent;
pub use selector::select_reply;

use rand::Rng;

/// Produce a bot reply for free-text input: match an intent, then pick one
/// of its replies at random, falling back to the default reply.
pub fn respond<R: Rng + ?Sized>(text: &str, rng: &mut R) -> &'static str {
    select_reply(match_intent(text), rng)
}
