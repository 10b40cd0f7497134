// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation CRUD operations.

use parlor_core::{Conversation, ParlorError};
use rusqlite::params;

use crate::database::{Database, map_tr_err};

/// Create a new conversation.
pub async fn create_conversation(
    db: &Database,
    conversation: &Conversation,
) -> Result<(), ParlorError> {
    let conversation = conversation.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO conversations (id, user_id, created_at)
                 VALUES (?1, ?2, ?3)",
                params![conversation.id, conversation.user_id, conversation.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(map_tr_err)
}

/// Get a conversation by ID.
pub async fn get_conversation(
    db: &Database,
    id: &str,
) -> Result<Option<Conversation>, ParlorError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, created_at FROM conversations WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                Ok(Conversation {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    created_at: row.get(2)?,
                })
            });
            match result {
                Ok(conversation) => Ok(Some(conversation)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// List a user's conversations, oldest first.
pub async fn list_conversations_for_user(
    db: &Database,
    user_id: &str,
) -> Result<Vec<Conversation>, ParlorError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, created_at FROM conversations
                 WHERE user_id = ?1 ORDER BY created_at ASC, rowid ASC",
            )?;
            let rows = stmt.query_map(params![user_id], |row| {
                Ok(Conversation {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    created_at: row.get(2)?,
                })
            })?;
            let mut conversations = Vec::new();
            for row in rows {
                conversations.push(row?);
            }
            Ok(conversations)
        })
        .await
        .map_err(map_tr_err)
}

/// Delete a conversation and all of its messages.
///
/// The message delete happens explicitly in the same transaction rather than
/// leaning on the schema's CASCADE clause, so the cascade holds on any
/// storage substrate. Fails with [`ParlorError::NotFound`] if the
/// conversation does not exist.
pub async fn delete_conversation(db: &Database, id: &str) -> Result<(), ParlorError> {
    let id_param = id.to_string();
    let deleted = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "DELETE FROM messages WHERE conversation_id = ?1",
                params![id_param],
            )?;
            let deleted = tx.execute(
                "DELETE FROM conversations WHERE id = ?1",
                params![id_param],
            )?;
            tx.commit()?;
            Ok(deleted)
        })
        .await
        .map_err(map_tr_err)?;

    if deleted == 0 {
        return Err(ParlorError::not_found("conversation", id));
    }
    Ok(())
}
