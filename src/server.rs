use rocket::{Ignite, Rocket, Shutdown};
use tokio::task::{JoinError, JoinHandle};

use crate::{create_rocket, db};

/// Errors surfaced by the server lifecycle. A store that cannot be opened
/// is fatal to server start.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to open store: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("server failed to launch: {0}")]
    Launch(#[from] rocket::Error),
    #[error("server task failed: {0}")]
    Join(#[from] JoinError),
}

/// A running server. The store handle lives in Rocket managed state and is
/// dropped with the instance on shutdown, closing the connection.
pub struct Server {
    shutdown: Shutdown,
    task: JoinHandle<Result<Rocket<Ignite>, rocket::Error>>,
}

/// Opens the store at `db_url` and serves the resource routes on a
/// background task.
pub async fn run_server(db_url: &str) -> Result<Server, ServeError> {
    let conn = db::open(db_url)?;
    let rocket = create_rocket(conn).ignite().await?;
    let shutdown = rocket.shutdown();
    let task = tokio::spawn(rocket.launch());
    Ok(Server { shutdown, task })
}

impl Server {
    /// Graceful teardown; resolves once the listener and store are released.
    pub async fn close(self) -> Result<(), ServeError> {
        self.shutdown.notify();
        self.task.await??;
        Ok(())
    }
}
