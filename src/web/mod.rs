//! HTTP front end.
//!
//! ## Routes
//!
//! | Method | Path           | Result                              |
//! |--------|----------------|-------------------------------------|
//! | GET    | `/`            | task list with the creation form    |
//! | POST   | `/`            | create, then the refreshed list     |
//! | GET    | `/about`       | static page                         |
//! | GET    | `/howto`       | static page                         |
//! | GET    | `/update/{id}` | edit form                           |
//! | POST   | `/update/{id}` | update, then `302` to `/`           |
//! | GET    | `/delete/{id}` | delete, then `302` to `/`           |
//!
//! ## Storage sessions
//!
//! The process owns one SQLite connection behind a mutex. A handler's storage
//! work runs on the blocking pool while holding the lock; the lock is the
//! request's storage session and is released once the work returns.

pub mod error;
pub mod handlers;

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskError;
use crate::{msg_error, msg_info};
use axum::routing::get;
use axum::Router;
use error::AppError;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        AppState {
            db: Arc::new(Mutex::new(db.conn)),
        }
    }

    /// Runs `f` against the task repository in one storage session.
    pub async fn with_tasks<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Tasks<'_>) -> Result<T, TaskError> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = db.lock();
            let mut tasks = Tasks::new(&mut conn);
            f(&mut tasks)
        })
        .await?;

        Ok(result?)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::create))
        .route("/about", get(handlers::about))
        .route("/howto", get(handlers::howto))
        .route("/update/{id}", get(handlers::edit).post(handlers::update))
        .route("/delete/{id}", get(handlers::delete))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// The database connection is dropped, and therefore closed, when the
/// server returns.
pub async fn serve(config: &Config, db: Db) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    msg_info!(Message::ServerStarting(listener.local_addr()?.to_string()));

    axum::serve(listener, router(AppState::new(db))).with_graceful_shutdown(shutdown_signal()).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => msg_info!(Message::ShutdownSignalReceived),
        Err(e) => {
            msg_error!(Message::ShutdownSignalFailed(e.to_string()));
            std::future::pending::<()>().await;
        }
    }
}
