// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `serve` subcommand: open storage and run the HTTP gateway.

use parlor_auth::PasswordHasher;
use parlor_config::ParlorConfig;
use parlor_core::ParlorError;
use parlor_gateway::{AppState, ServerConfig, start_server};
use parlor_storage::Database;

/// Run the server until the process is terminated.
pub async fn run(config: &ParlorConfig) -> Result<(), ParlorError> {
    // The default database path lives under the XDG data dir, which may not
    // exist on first run.
    let db_path = std::path::Path::new(&config.storage.database_path);
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ParlorError::Config(format!(
                "cannot create data directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let db =
        Database::open_with_options(&config.storage.database_path, config.storage.wal_mode).await?;
    let hasher = PasswordHasher::from_config(&config.auth);
    let state = AppState::new(db, hasher);

    let server_config = ServerConfig {
        host: config.server.bind_address.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await
}
