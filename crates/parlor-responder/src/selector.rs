// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Uniform random reply selection.
//!
//! The random source is an explicit parameter rather than an ambient global
//! so callers can substitute a seeded generator in tests.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{DEFAULT_REPLY, Intent};

/// Pick one reply for the matched intent, uniformly at random.
///
/// With no matched intent the fixed default reply is returned. No side
/// effects beyond advancing `rng`.
pub fn select_reply<R: Rng + ?Sized>(intent: Option<&Intent>, rng: &mut R) -> &'static str {
    match intent {
        Some(intent) => intent.replies.choose(rng).copied().unwrap_or(DEFAULT_REPLY),
        None => DEFAULT_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::INTENTS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn no_intent_yields_exactly_the_default_reply() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_reply(None, &mut rng),
            "That's an interesting point. Could you tell me more about that? (I'm a local bot, so I'm still learning!)"
        );
    }

    #[test]
    fn selected_reply_is_a_candidate_of_the_intent() {
        let mut rng = StdRng::seed_from_u64(1);
        for intent in INTENTS {
            for _ in 0..20 {
                let reply = select_reply(Some(intent), &mut rng);
                assert!(intent.replies.contains(&reply));
            }
        }
    }

    #[test]
    fn every_candidate_is_eventually_selected() {
        // Statistical: 200 draws over at most 3 candidates makes a miss
        // astronomically unlikely with a fixed seed.
        let mut rng = StdRng::seed_from_u64(42);
        for intent in INTENTS {
            let mut seen = vec![false; intent.replies.len()];
            for _ in 0..200 {
                let reply = select_reply(Some(intent), &mut rng);
                let idx = intent.replies.iter().position(|r| *r == reply).unwrap();
                seen[idx] = true;
            }
            assert!(
                seen.iter().all(|s| *s),
                "{}: not all replies drawn: {seen:?}",
                intent.name
            );
        }
    }

    #[test]
    fn seeded_rng_makes_selection_deterministic() {
        let intent = &INTENTS[0];
        let a: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| select_reply(Some(intent), &mut rng)).collect()
        };
        let b: Vec<&str> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..10).map(|_| select_reply(Some(intent), &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
