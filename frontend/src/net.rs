//! Background worker owning the API client and a small Tokio runtime.
//!
//! The UI thread stays synchronous: it sends [`Command`]s and drains
//! [`Event`]s from a channel each tick. The worker processes one command at
//! a time, so a page never has more than one request in flight.

use std::sync::mpsc;

use kanora_client::ApiClient;
use kanora_types::{ApiResponse, ArtistDetails, ArtistSummary};

/// Requests the UI can dispatch.
#[derive(Debug, Clone)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    FetchArtists,
    FetchArtistDetails { artist_id: String },
}

/// Results delivered back to the UI.
///
/// Transport failures arrive as `Err(description)`; the pages collapse them
/// into a generic message and log the description.
#[derive(Debug, Clone)]
pub enum Event {
    LoginResult(Result<ApiResponse<()>, String>),
    LogoutResult(Result<ApiResponse<()>, String>),
    ArtistsResult(Result<ApiResponse<Vec<ArtistSummary>>, String>),
    ArtistDetailsResult {
        /// Artist the fetch was issued for; stale results are discarded.
        artist_id: String,
        result: Result<ApiResponse<ArtistDetails>, String>,
    },
}

/// Sending half handed to the UI.
pub struct Handle {
    cmd_tx: mpsc::Sender<Command>,
}

impl Handle {
    /// Queue a command for the worker. Errors are ignored: if the worker is
    /// gone the application is shutting down anyway.
    pub fn dispatch(&self, command: Command) {
        if self.cmd_tx.send(command).is_err() {
            tracing::warn!("network worker is gone; dropping command");
        }
    }

    /// A handle whose worker never answers, for tests that drive state
    /// transitions directly.
    #[cfg(test)]
    pub fn detached() -> (Self, mpsc::Receiver<Command>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        (Self { cmd_tx }, cmd_rx)
    }
}

/// Spawn the worker thread.
///
/// Returns the command handle and the event receiver the UI polls each
/// tick.
pub fn spawn(base_url: &str) -> anyhow::Result<(Handle, mpsc::Receiver<Event>)> {
    let client = ApiClient::new(base_url)?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let (event_tx, event_rx) = mpsc::channel::<Event>();

    std::thread::Builder::new()
        .name("kanora-net".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("failed to build network runtime: {e}");
                    return;
                }
            };

            while let Ok(command) = cmd_rx.recv() {
                let event = runtime.block_on(run_command(&client, command));
                if event_tx.send(event).is_err() {
                    // UI is gone; stop the worker.
                    break;
                }
            }
        })?;

    Ok((Handle { cmd_tx }, event_rx))
}

async fn run_command(client: &ApiClient, command: Command) -> Event {
    match command {
        Command::Login { username, password } => Event::LoginResult(
            client
                .login(&username, &password)
                .await
                .map_err(|e| e.to_string()),
        ),
        Command::Logout => Event::LogoutResult(client.logout().await.map_err(|e| e.to_string())),
        Command::FetchArtists => {
            Event::ArtistsResult(client.list_artists().await.map_err(|e| e.to_string()))
        }
        Command::FetchArtistDetails { artist_id } => {
            let result = client
                .get_artist_details(&artist_id)
                .await
                .map_err(|e| e.to_string());
            Event::ArtistDetailsResult { artist_id, result }
        }
    }
}
