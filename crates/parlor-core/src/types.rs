// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Parlor workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Author tag on a stored message: the account holder or the bot.
///
/// Stored in the database as its lowercase string form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A registered account.
///
/// Created on registration, read on login, never mutated. The password is
/// only ever held as an opaque PHC hash string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// A thread of messages owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
}

/// One turn of text within a conversation, authored by "user" or "bot".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    /// Lowercase [`Sender`] tag.
    pub sender: String,
    pub content: String,
    pub created_at: String,
}
