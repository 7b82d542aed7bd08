//! Main Aria backend client.

use crate::config::ServerConfig;
use crate::error::{ClientError, Result};
use aria_core::types::{Album, AlbumDetail, Library, LibraryId, TrackId, UserId, UserPreferences};
use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Client for the Aria backend REST API.
///
/// All requests carry a bearer token when one is set. The song endpoint is
/// consumed as a raw byte stream; everything else is JSON.
///
/// # Example
///
/// ```ignore
/// use aria_client::{ApiClient, ServerConfig};
/// use aria_core::types::LibraryId;
///
/// let client = ApiClient::new(ServerConfig::new("http://127.0.0.1:9876"))?;
/// client.set_token("tok_abc").await;
///
/// let albums = client.get_albums(LibraryId::new(1)).await?;
/// println!("Found {} albums", albums.len());
/// ```
pub struct ApiClient {
    http: Client,
    config: Arc<RwLock<ServerConfig>>,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized = ServerConfig {
            url,
            token: config.token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("AriaPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized)),
        })
    }

    /// Get the backend URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.token.is_some()
    }

    /// Store a bearer token for subsequent requests.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.config.write().await.token = Some(token.into());
    }

    /// Drop the stored token (logout).
    pub async fn clear_token(&self) {
        self.config.write().await.token = None;
        info!("cleared auth token");
    }

    /// List albums in a library.
    pub async fn get_albums(&self, library_id: LibraryId) -> Result<Vec<Album>> {
        let (url, token) = self.base().await;
        let url = format!("{}/albums?library_id={}", url, library_id);
        debug!(url = %url, "fetching albums");

        let response = self.send_get(&url, token.as_deref()).await?;
        let response = map_status(response, || format!("library {library_id}")).await?;

        let albums: Vec<Album> = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse album list: {e}")))?;

        debug!(albums = albums.len(), "fetched albums");
        Ok(albums)
    }

    /// Fetch one album with its songs, sorted by track number.
    pub async fn get_album(&self, name: &str) -> Result<AlbumDetail> {
        let (url, token) = self.base().await;
        let url = format!("{}/albums/{}", url, encode_path_segment(name));
        debug!(url = %url, album = %name, "fetching album detail");

        let response = self.send_get(&url, token.as_deref()).await?;
        let response = map_status(response, || format!("album {name}")).await?;

        let detail: AlbumDetail = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse album detail: {e}")))?;

        // The backend does not guarantee song order
        Ok(AlbumDetail {
            songs: detail.songs_in_track_order(),
        })
    }

    /// List the libraries visible to a user.
    pub async fn get_user_libraries(&self, user_id: UserId) -> Result<Vec<Library>> {
        let (url, token) = self.base().await;
        let url = format!("{}/libraries/user/{}", url, user_id);
        debug!(url = %url, "fetching user libraries");

        let response = self.send_get(&url, token.as_deref()).await?;
        let response = map_status(response, || format!("user {user_id}")).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse library list: {e}")))
    }

    /// Download the playable bytes for a song.
    ///
    /// The body is consumed as a chunked byte stream, never as JSON.
    pub async fn fetch_song(&self, track_id: TrackId) -> Result<Vec<u8>> {
        let (url, token) = self.base().await;
        let url = format!("{}/songs/{}/play", url, track_id);
        debug!(url = %url, %track_id, "fetching song payload");

        let response = self.send_get(&url, token.as_deref()).await?;

        let status = response.status();
        if status == StatusCode::UNSUPPORTED_MEDIA_TYPE {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::UnsupportedMedia(message));
        }
        let response = map_status(response, || format!("song {track_id}")).await?;

        let mut payload = Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            payload.extend_from_slice(&chunk?);
        }

        debug!(%track_id, bytes = payload.len(), "song payload fetched");
        Ok(payload)
    }

    /// Persist user preferences.
    pub async fn update_preferences(
        &self,
        user_id: UserId,
        preferences: &UserPreferences,
    ) -> Result<()> {
        let (url, token) = self.base().await;
        let url = format!("{}/users/{}/update_pref", url, user_id);
        debug!(url = %url, "updating user preferences");

        let mut request = self.http.put(&url).json(preferences);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        map_status(response, || format!("user {user_id}")).await?;
        Ok(())
    }

    async fn base(&self) -> (String, Option<String>) {
        let config = self.config.read().await;
        (config.url.clone(), config.token.clone())
    }

    async fn send_get(&self, url: &str, token: Option<&str>) -> Result<Response> {
        let mut request = self.http.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }
}

/// Map a non-success status to the client error taxonomy.
async fn map_status<F>(response: Response, context: F) -> Result<Response>
where
    F: FnOnce() -> String,
{
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::AuthRequired)
    } else if status == StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(context()))
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

fn encode_path_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
