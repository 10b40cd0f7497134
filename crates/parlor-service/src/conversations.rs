// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation lifecycle: create, list, delete, history.

use parlor_core::{Conversation, Message, ParlorError};
use parlor_storage::Database;
use parlor_storage::queries;

use crate::now_rfc3339;

/// Create a new conversation owned by `user_id`.
///
/// Fails with [`ParlorError::NotFound`] if the user does not exist.
pub async fn create_conversation(
    db: &Database,
    user_id: &str,
) -> Result<Conversation, ParlorError> {
    if queries::users::get_user(db, user_id).await?.is_none() {
        return Err(ParlorError::not_found("user", user_id));
    }

    let conversation = Conversation {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        created_at: now_rfc3339(),
    };
    queries::conversations::create_conversation(db, &conversation).await?;

    tracing::debug!(
        conversation_id = conversation.id.as_str(),
        user_id,
        "created conversation"
    );
    Ok(conversation)
}

/// List a user's conversations, oldest first.
///
/// An unknown user yields an empty list rather than an error.
pub async fn list_conversations(
    db: &Database,
    user_id: &str,
) -> Result<Vec<Conversation>, ParlorError> {
    queries::conversations::list_conversations_for_user(db, user_id).await
}

/// Delete a conversation and its messages.
///
/// Fails with [`ParlorError::NotFound`] if the conversation does not exist.
pub async fn delete_conversation(db: &Database, conversation_id: &str) -> Result<(), ParlorError> {
    queries::conversations::delete_conversation(db, conversation_id).await?;
    tracing::debug!(conversation_id, "deleted conversation");
    Ok(())
}

/// Fetch a conversation's messages, oldest first.
///
/// A missing conversation yields an empty history rather than an error.
pub async fn history(db: &Database, conversation_id: &str) -> Result<Vec<Message>, ParlorError> {
    queries::messages::list_messages(db, conversation_id).await
}
