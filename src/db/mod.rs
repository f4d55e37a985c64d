//! Database layer for the todolist application.
//!
//! A single SQLite file holds the `tasks` table. The connection is opened
//! once at startup, migrated once, and then handed to the web layer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::db::{db::Db, tasks::Tasks};
//!
//! let mut db = Db::open("todolist.db")?;
//! let mut tasks = Tasks::new(&mut db.conn);
//! let task = tasks.create("Buy milk", "2% milk")?;
//! tasks.delete(task.id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and configuration.
pub mod db;

/// Versioned schema migrations, run once when a [`db::Db`] is opened.
pub mod migrations;

/// CRUD operations on task records.
pub mod tasks;
