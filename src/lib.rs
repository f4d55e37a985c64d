//! # Todolist
//!
//! A small personal task tracker served as a web application. Tasks have a
//! title, a description and a creation time, and are kept in a local SQLite
//! database.
//!
//! ## Layout
//!
//! - [`db`]: connection, migrations and the task repository
//! - [`libs`]: task types, configuration, messages and HTML views
//! - [`web`]: axum router and route handlers
//! - [`commands`]: command-line entry points
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
