// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Account registration and login.

use parlor_auth::PasswordHasher;
use parlor_core::{ParlorError, User};
use parlor_storage::Database;
use parlor_storage::queries::users;

use crate::now_rfc3339;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 32;
const PASSWORD_MIN: usize = 8;
// Kept from the original bcrypt-era cap; harmless under Argon2id and it
// bounds hashing work per request.
const PASSWORD_MAX: usize = 72;

fn validate_credentials(username: &str, password: &str) -> Result<(), ParlorError> {
    let name_len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&name_len) {
        return Err(ParlorError::Validation(format!(
            "username must be {USERNAME_MIN}-{USERNAME_MAX} characters"
        )));
    }
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&password.len()) {
        return Err(ParlorError::Validation(format!(
            "password must be {PASSWORD_MIN}-{PASSWORD_MAX} bytes"
        )));
    }
    Ok(())
}

/// Register a new account.
///
/// Fails with [`ParlorError::Conflict`] if the username is already taken
/// (enforced by the storage layer's UNIQUE constraint, so concurrent
/// registrations cannot race past the check) and with
/// [`ParlorError::Validation`] on out-of-bounds input.
pub async fn register(
    db: &Database,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<User, ParlorError> {
    validate_credentials(username, password)?;

    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash: hasher.hash(password)?,
        created_at: now_rfc3339(),
    };
    users::create_user(db, &user).await?;

    tracing::info!(username, user_id = user.id.as_str(), "registered account");
    Ok(user)
}

/// Verify credentials and return the matching account.
///
/// Unknown usernames and wrong passwords both fail with the same
/// [`ParlorError::Unauthorized`] message.
pub async fn login(
    db: &Database,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<User, ParlorError> {
    let unauthorized = || ParlorError::Unauthorized("invalid username or password".to_string());

    let Some(user) = users::get_user_by_username(db, username).await? else {
        return Err(unauthorized());
    };
    if !hasher.verify(password, &user.password_hash)? {
        return Err(unauthorized());
    }

    tracing::debug!(username, user_id = user.id.as_str(), "login succeeded");
    Ok(user)
}
