//! Tests for the Aria backend client.
//!
//! These use mock servers to verify client behavior without requiring a
//! real backend connection.

use aria_client::{ApiClient, ClientError, ServerConfig};
use aria_core::types::{LibraryId, TrackId, UserId, UserPreferences};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ServerConfig::new(server.uri())).expect("valid server url")
}

// =============================================================================
// Album Endpoints
// =============================================================================

mod albums {
    use super::*;

    #[tokio::test]
    async fn get_albums_sends_library_id_and_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/albums"))
            .and(query_param("library_id", "3"))
            .and(header("Authorization", "Bearer tok_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "album_name": "In Rainbows",
                    "album_artist": "Radiohead",
                    "year": 2007,
                    "artwork": null
                },
                {
                    "album_name": "Untitled",
                    "album_artist": null,
                    "year": null,
                    "artwork": null
                }
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.set_token("tok_abc").await;

        let albums = client.get_albums(LibraryId::new(3)).await.unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].album_name, "In Rainbows");
        assert_eq!(albums[0].album_artist.as_deref(), Some("Radiohead"));
        assert!(albums[1].album_artist.is_none());
    }

    #[tokio::test]
    async fn get_album_sorts_songs_by_track_number() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/albums/In+Rainbows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "songs": [
                    { "id": 11, "title": "Nude", "artist": "Radiohead", "album": "In Rainbows",
                      "duration": 255.0, "track_number": 3, "artwork": null },
                    { "id": 9, "title": "15 Step", "artist": "Radiohead", "album": "In Rainbows",
                      "duration": 237.0, "track_number": 1, "artwork": null },
                    { "id": 10, "title": "Bodysnatchers", "artist": "Radiohead", "album": "In Rainbows",
                      "duration": 242.0, "track_number": 2, "artwork": null }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let detail = client.get_album("In Rainbows").await.unwrap();

        let numbers: Vec<_> = detail.songs.iter().map(|s| s.track_number).collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(detail.songs[0].id, TrackId::new(9));
    }

    #[tokio::test]
    async fn missing_album_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.get_album("Nothing").await;

        assert!(matches!(result.unwrap_err(), ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn rejected_token_is_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.get_albums(LibraryId::new(1)).await;

        assert!(matches!(result.unwrap_err(), ClientError::AuthRequired));
    }
}

// =============================================================================
// Library Endpoints
// =============================================================================

mod libraries {
    use super::*;

    #[tokio::test]
    async fn get_user_libraries_parses_timestamps() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/libraries/user/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "name": "My Music",
                    "path": "/music/personal",
                    "user_id": 5,
                    "is_public": false,
                    "created": "2024-03-01T10:00:00Z",
                    "updated": "2024-06-15T08:30:00Z"
                }
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let libraries = client.get_user_libraries(UserId::new(5)).await.unwrap();

        assert_eq!(libraries.len(), 1);
        assert_eq!(libraries[0].id, LibraryId::new(1));
        assert_eq!(libraries[0].name, "My Music");
        assert!(!libraries[0].is_public);
    }
}

// =============================================================================
// Song Streaming
// =============================================================================

mod songs {
    use super::*;

    #[tokio::test]
    async fn fetch_song_returns_raw_bytes() {
        let server = MockServer::start().await;
        let body: Vec<u8> = (0u8..=255).cycle().take(4096).collect();

        Mock::given(method("GET"))
            .and(path("/songs/42/play"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let payload = client.fetch_song(TrackId::new(42)).await.unwrap();

        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn missing_song_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.fetch_song(TrackId::new(42)).await;

        assert!(matches!(result.unwrap_err(), ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn unplayable_format_is_unsupported_media() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(415).set_body_string("no transcoder for .shn"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client.fetch_song(TrackId::new(42)).await;

        match result.unwrap_err() {
            ClientError::UnsupportedMedia(message) => {
                assert!(message.contains("no transcoder"));
            }
            other => panic!("expected UnsupportedMedia, got {other:?}"),
        }
    }
}

// =============================================================================
// Preference Persistence
// =============================================================================

mod preferences {
    use super::*;

    #[tokio::test]
    async fn update_preferences_puts_merged_record() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/users/5/update_pref"))
            .and(body_json(json!({
                "volume": 0.5,
                "transcoding": null,
                "theme": null,
                "notifications": null
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .update_preferences(UserId::new(5), &UserPreferences::volume_patch(0.5))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn server_failure_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .update_preferences(UserId::new(5), &UserPreferences::volume_patch(0.5))
            .await;

        match result.unwrap_err() {
            ClientError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "db down");
            }
            other => panic!("expected Server error, got {other:?}"),
        }
    }
}
