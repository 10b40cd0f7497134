// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User account CRUD operations.

use parlor_core::{ParlorError, User};
use rusqlite::params;

use crate::database::{Database, map_constraint_err, map_tr_err};

/// Create a new user.
///
/// The UNIQUE constraint on `username` is the authoritative duplicate guard;
/// a violation surfaces as [`ParlorError::Conflict`], so two registrations
/// racing on the same name cannot both commit.
pub async fn create_user(db: &Database, user: &User) -> Result<(), ParlorError> {
    let user = user.clone();
    let username = user.username.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO users (id, username, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user.id, user.username, user.password_hash, user.created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| {
            map_constraint_err(e, || {
                ParlorError::Conflict(format!("username `{username}` is already taken"))
            })
        })
}

/// Get a user by ID.
pub async fn get_user(db: &Database, id: &str) -> Result<Option<User>, ParlorError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, password_hash, created_at FROM users WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: row.get(3)?,
                })
            });
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}

/// Get a user by username.
pub async fn get_user_by_username(
    db: &Database,
    username: &str,
) -> Result<Option<User>, ParlorError> {
    let username = username.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, username, password_hash, created_at FROM users WHERE username = ?1",
            )?;
            let result = stmt.query_row(params![username], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: row.get(3)?,
                })
            });
            match result {
                Ok(user) => Ok(Some(user)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(map_tr_err)
}
