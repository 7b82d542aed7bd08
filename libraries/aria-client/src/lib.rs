//! Aria Backend Client
//!
//! HTTP client for the Aria music server API plus the async glue that wires
//! the playback engine to it.
//!
//! # Features
//!
//! - **Catalog**: list albums per library, fetch album detail, list a
//!   user's libraries
//! - **Streaming**: download song payloads as raw byte streams
//! - **Preferences**: fire-and-forget persistence of user preferences
//! - **Playback glue**: [`RemotePlayer`] dispatches the engine's load
//!   requests onto spawned fetch tasks
//!
//! # Example
//!
//! ```ignore
//! use aria_client::{ApiClient, HttpTrackLoader, RemotePlayer, ServerConfig};
//! use aria_playback::PlaybackConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ApiClient::new(ServerConfig::new("http://127.0.0.1:9876"))?);
//!     client.set_token("tok_abc").await;
//!
//!     let loader = Arc::new(HttpTrackLoader::new(client.clone()));
//!     let mut player = RemotePlayer::new(device, loader, None, PlaybackConfig::default());
//!
//!     let detail = client.get_album("OK Computer").await?;
//!     player.play_queue(detail.songs, 0);
//!
//!     loop {
//!         player.pump().await;
//!     }
//! }
//! ```

mod client;
mod config;
mod error;
mod loader;
mod player;
mod prefs;

// Re-export main types
pub use client::ApiClient;
pub use config::ServerConfig;
pub use error::{ClientError, Result};
pub use loader::HttpTrackLoader;
pub use player::RemotePlayer;
pub use prefs::PreferenceSync;
