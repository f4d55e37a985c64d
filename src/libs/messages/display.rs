//! Display implementation for todolist application messages.
//!
//! Every user-facing string lives here, whether it ends up on the console,
//! in a log line or on an HTML page. Call sites only ever name a
//! [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskFieldRequired(field) => format!("Please enter a {} for the task.", field),
            Message::StorageFailed(error) => format!("Storage operation failed: {}", error),
            Message::StorageWorkerFailed(error) => format!("Storage worker failed: {}", error),
            Message::FormRejected(reason) => format!("Form body rejected, treating it as empty: {}", reason),

            // === PAGE MESSAGES ===
            Message::PageNotFound => "The page you are looking for does not exist.".to_string(),
            Message::PageNotFoundAt(path) => format!("No page at {}", path),
            Message::InternalError => "Something went wrong on our side. Please try again.".to_string(),
            Message::TemplateRenderFailed(error) => format!("Failed to render page: {}", error),
            Message::TemplateRegistrationFailed(name, error) => format!("Failed to load template '{}': {}", name, error),

            // === SERVER MESSAGES ===
            Message::ServerStarting(address) => format!("Serving todolist on http://{}", address),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalReceived => "Shutdown signal received, finishing open requests...".to_string(),
            Message::ShutdownSignalFailed(error) => format!("Failed to listen for shutdown signal: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigNotFound => "Configuration file not found, using defaults".to_string(),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::InvalidPort(raw) => format!("Invalid port number: {}", raw),
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => format!("  v{}: {} (applied: {})", version, name, applied_at),
            Message::NoMigrationsApplied => "No migrations have been applied yet".to_string(),
        };
        write!(f, "{}", text)
    }
}
