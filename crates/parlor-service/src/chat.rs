// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One chat turn: persist the user message, produce a reply, persist it.

use parlor_core::{Message, ParlorError, Sender};
use parlor_storage::Database;
use parlor_storage::queries;
use rand::Rng;

use crate::now_rfc3339;

/// Handle one chat turn against `conversation_id` and return the persisted
/// bot message.
///
/// Fails with [`ParlorError::NotFound`] if the conversation does not exist,
/// so orphaned messages are never created. On success exactly two messages
/// are durably recorded: the user's text, then the bot reply.
pub async fn handle_turn(
    db: &Database,
    conversation_id: &str,
    text: &str,
) -> Result<Message, ParlorError> {
    // Draw the reply before the first await so the thread-local RNG does not
    // live inside the future.
    let reply = parlor_responder::respond(text, &mut rand::thread_rng());
    record_turn(db, conversation_id, text, reply).await
}

/// Same as [`handle_turn`] with an explicit random source, so tests can pass
/// a seeded generator.
pub async fn handle_turn_with<R: Rng + Send>(
    db: &Database,
    rng: &mut R,
    conversation_id: &str,
    text: &str,
) -> Result<Message, ParlorError> {
    let reply = parlor_responder::respond(text, rng);
    record_turn(db, conversation_id, text, reply).await
}

async fn record_turn(
    db: &Database,
    conversation_id: &str,
    user_text: &str,
    reply: &str,
) -> Result<Message, ParlorError> {
    if queries::conversations::get_conversation(db, conversation_id)
        .await?
        .is_none()
    {
        return Err(ParlorError::not_found("conversation", conversation_id));
    }

    let user_msg = Message {
        id: uuid::Uuid::new_v4().to_string(),
        conversation_id: conversation_id.to_string(),
        sender: Sender::User.to_string(),
        content: user_text.to_string(),
        created_at: now_rfc3339(),
    };
    queries::messages::insert_message(db, &user_msg).await?;
    tracing::debug!(conversation_id, "persisted user message");

    let bot_msg = Message {
        id: uuid::Uuid::new_v4().to_string(),
        conversation_id: conversation_id.to_string(),
        sender: Sender::Bot.to_string(),
        content: reply.to_string(),
        created_at: now_rfc3339(),
    };
    queries::messages::insert_message(db, &bot_msg).await?;
    tracing::debug!(conversation_id, "persisted bot reply");

    Ok(bot_msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_auth::PasswordHasher;
    use parlor_responder::{DEFAULT_REPLY, INTENTS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    async fn setup_with_conversation() -> (Database, String, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        let hasher = PasswordHasher::new(1024, 2, 1);
        let user = crate::accounts::register(&db, &hasher, "alice", "password123")
            .await
            .unwrap();
        let conversation = crate::conversations::create_conversation(&db, &user.id)
            .await
            .unwrap();
        (db, conversation.id, dir)
    }

    #[tokio::test]
    async fn turn_records_user_then_bot_message() {
        let (db, conversation_id, _dir) = setup_with_conversation().await;
        let greetings = &INTENTS[0];

        let mut rng = StdRng::seed_from_u64(5);
        let bot_msg = handle_turn_with(&db, &mut rng, &conversation_id, "hello")
            .await
            .unwrap();
        assert!(greetings.replies.contains(&bot_msg.content.as_str()));

        let history = crate::conversations::history(&db, &conversation_id)
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, "user");
        assert_eq!(history[0].content, "hello");
        assert_eq!(history[1].sender, "bot");
        assert_eq!(history[1].content, bot_msg.content);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn unmatched_text_gets_the_default_reply() {
        let (db, conversation_id, _dir) = setup_with_conversation().await;

        let mut rng = StdRng::seed_from_u64(5);
        let bot_msg = handle_turn_with(&db, &mut rng, &conversation_id, "explain monads")
            .await
            .unwrap();
        assert_eq!(bot_msg.content, DEFAULT_REPLY);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn tie_break_prefers_earlier_declared_intent() {
        let (db, conversation_id, _dir) = setup_with_conversation().await;
        let greetings = &INTENTS[0];

        let mut rng = StdRng::seed_from_u64(5);
        let bot_msg = handle_turn_with(&db, &mut rng, &conversation_id, "Hey, how's it going?")
            .await
            .unwrap();
        assert!(greetings.replies.contains(&bot_msg.content.as_str()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn turn_against_missing_conversation_is_not_found() {
        let (db, _conversation_id, _dir) = setup_with_conversation().await;

        let err = handle_turn(&db, "no-such-conversation", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ParlorError::NotFound { .. }), "got {err:?}");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn turns_accumulate_in_order() {
        let (db, conversation_id, _dir) = setup_with_conversation().await;

        handle_turn(&db, &conversation_id, "hello").await.unwrap();
        handle_turn(&db, &conversation_id, "how are you").await.unwrap();

        let history = crate::conversations::history(&db, &conversation_id)
            .await
            .unwrap();
        assert_eq!(history.len(), 4);
        let senders: Vec<&str> = history.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, ["user", "bot", "user", "bot"]);
        assert_eq!(history[2].content, "how are you");

        db.close().await.unwrap();
    }
}
