// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static intent catalog: trigger phrases and candidate replies.
//!
//! The table is an ordered slice, not a map -- declaration order is the
//! tie-break when several intents' triggers occur in the same input, so the
//! order here is load-bearing.

/// A named category of recognized user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    /// Intent identifier, e.g. "greetings".
    pub name: &'static str,
    /// Lowercase substrings whose presence in normalized input indicates
    /// this intent.
    pub triggers: &'static [&'static str],
    /// Candidate replies, chosen from uniformly at random. Never empty.
    pub replies: &'static [&'static str],
}

/// Reply used when no intent matches.
pub const DEFAULT_REPLY: &str = "That's an interesting point. Could you tell me more about that? (I'm a local bot, so I'm still learning!)";

/// The intent table, in declaration order.
pub const INTENTS: &[Intent] = &[
    Intent {
        name: "greetings",
        triggers: &["hello", "hi", "hey", "greetings"],
        replies: &[
            "Hello! How can I assist you today?",
            "Hi there! I'm your local assistant.",
            "Hey! Ready to chat?",
        ],
    },
    Intent {
        name: "status",
        triggers: &["how are you", "how's it going", "how are things"],
        replies: &[
            "I'm running smoothly on your local machine!",
            "Doing great, thanks for asking!",
            "All systems go.",
        ],
    },
    Intent {
        name: "identity",
        triggers: &["who are you", "what are you", "your name"],
        replies: &[
            "I am a custom-built local chatbot created with FastAPI and React.",
            "I'm your private, local AI companion.",
        ],
    },
    Intent {
        name: "capabilities",
        triggers: &["what can you do", "help", "commands"],
        replies: &[
            "I can store our chats, remember who you are, and respond to basic queries without any external APIs!",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_triggers_and_replies() {
        for intent in INTENTS {
            assert!(!intent.triggers.is_empty(), "{} has no triggers", intent.name);
            assert!(!intent.replies.is_empty(), "{} has no replies", intent.name);
        }
    }

    #[test]
    fn intent_names_are_unique() {
        for (i, a) in INTENTS.iter().enumerate() {
            for b in &INTENTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn triggers_are_lowercase() {
        // Matching lowercases the input only, so the table must already be
        // lowercase to be reachable.
        for intent in INTENTS {
            for trigger in intent.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }

    #[test]
    fn declared_order_starts_with_greetings() {
        let names: Vec<&str> = INTENTS.iter().map(|i| i.name).collect();
        assert_eq!(names, ["greetings", "status", "identity", "capabilities"]);
    }
}
