//! HTTP API Client
//!
//! Functions for communicating with the Momentum REST API. Every request
//! carries the session cookie; there is no retry and no timeout beyond the
//! transport default.

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use crate::api::ApiError;
use crate::model::{EntryDraft, JournalEntry, MusicContent, User};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Get the API base URL from local storage or use default.
///
/// The same base qualifies root-relative media paths returned by the upload
/// endpoint, so it points at the server root rather than an `/api` prefix.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("momentum_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode the server's `{error}` body, falling back to a generic message.
async fn error_message(response: Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| fallback.to_string())
}

// ============ Session ============

/// Submit credentials and establish a cookie-based session.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/api/auth/login", get_api_base()))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest { email, password })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Failed to log in").await,
        ));
    }

    Ok(())
}

/// Create a new account. The server responds 201 without a session; the
/// caller routes to the login view afterwards.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct RegisterRequest<'a> {
        username: &'a str,
        email: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/api/auth/register", get_api_base()))
        .credentials(RequestCredentials::Include)
        .json(&RegisterRequest {
            username,
            email,
            password,
        })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Failed to register").await,
        ));
    }

    Ok(())
}

/// Invalidate the session on the server.
pub async fn logout() -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/auth/logout", get_api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Failed to log out").await,
        ));
    }

    Ok(())
}

/// Probe the current session. Used on app start and after a successful login;
/// a 401 simply means nobody is signed in.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let response = Request::get(&format!("{}/api/auth/me", get_api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Not signed in").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

// ============ Entries ============

/// Fetch the journal entries for the session user.
///
/// The list is returned exactly as the server ordered it (assumed
/// reverse-chronological); the client never re-sorts entries.
pub async fn fetch_entries() -> Result<Vec<JournalEntry>, ApiError> {
    let response = Request::get(&format!("{}/api/entries", get_api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Failed to fetch entries").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Create a journal entry from the composer draft in one request.
pub async fn create_entry(draft: &EntryDraft) -> Result<(), ApiError> {
    let response = Request::post(&format!("{}/api/entries", get_api_base()))
        .credentials(RequestCredentials::Include)
        .json(draft)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Failed to create entry.").await,
        ));
    }

    Ok(())
}

// ============ Tile acquisition ============

/// Upload a local image file as multipart form data; returns the stored URL.
pub async fn upload_image(file: &web_sys::File) -> Result<String, ApiError> {
    #[derive(Debug, serde::Deserialize)]
    struct UploadResponse {
        url: String,
    }

    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let response = Request::post(&format!("{}/api/upload", get_api_base()))
        .credentials(RequestCredentials::Include)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Failed to upload image").await,
        ));
    }

    let result: UploadResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    Ok(result.url)
}

/// Resolve a free-text query to a music match.
///
/// The server answers `{type, imageUrl, content}` where `content` is itself a
/// serialized `{song, artist}` record; this recombines both layers into the
/// single record stored in a music tile.
pub async fn generate_music(query: &str) -> Result<MusicContent, ApiError> {
    #[derive(serde::Serialize)]
    struct MusicRequest<'a> {
        query: &'a str,
    }

    #[derive(Debug, serde::Deserialize)]
    struct MusicResponse {
        #[serde(rename = "imageUrl", default)]
        image_url: Option<String>,
        content: String,
    }

    #[derive(Debug, serde::Deserialize)]
    struct SongMeta {
        song: String,
        artist: String,
    }

    let response = Request::post(&format!("{}/api/generate/music", get_api_base()))
        .credentials(RequestCredentials::Include)
        .json(&MusicRequest { query })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Music search failed").await,
        ));
    }

    let result: MusicResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    let meta: SongMeta =
        serde_json::from_str(&result.content).map_err(|e| ApiError::Malformed(e.to_string()))?;

    Ok(MusicContent {
        song: meta.song,
        artist: meta.artist,
        image_url: result.image_url,
    })
}

/// Interpret a free-text prompt into structured workout data.
///
/// The content object is kept opaque and re-serialized for tile storage, so
/// fields the renderer does not know about survive the round trip.
pub async fn generate_workout(prompt: &str) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct WorkoutRequest<'a> {
        prompt: &'a str,
    }

    #[derive(Debug, serde::Deserialize)]
    struct WorkoutResponse {
        content: serde_json::Value,
    }

    let response = Request::post(&format!("{}/api/generate/workout", get_api_base()))
        .credentials(RequestCredentials::Include)
        .json(&WorkoutRequest { prompt })
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server(
            error_message(response, "Workout generation failed").await,
        ));
    }

    let result: WorkoutResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    Ok(result.content.to_string())
}
