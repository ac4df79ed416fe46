/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadence_core::ErrorKind;
use cadence_playback::PlaybackError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("Media API error: {0}")]
    Client(#[from] cadence_client::ClientError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Playback(err) => match err.kind() {
                ErrorKind::IndexOutOfRange => StatusCode::NOT_FOUND,
                ErrorKind::SearchFailed
                | ErrorKind::ResolutionFailed
                | ErrorKind::DownloadFailed => StatusCode::BAD_GATEWAY,
                ErrorKind::Output => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Client(_) => StatusCode::BAD_GATEWAY,
            ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (kind, error_message) = match self {
            ServerError::BadRequest(msg) => (None, msg),
            ServerError::Playback(ref e) => {
                if status.is_server_error() {
                    tracing::warn!(error = %e, "Playback request failed");
                }
                (Some(e.kind()), e.to_string())
            }
            ServerError::Client(ref e) => {
                tracing::warn!(error = %e, "Media API error");
                (None, e.to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (None, "Configuration error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "kind": kind,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::CadenceError;

    #[test]
    fn playback_errors_map_to_status() {
        let not_found: ServerError = PlaybackError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let empty: ServerError = PlaybackError::EmptyPlaylist.into();
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);

        let upstream: ServerError =
            PlaybackError::Service(CadenceError::resolution("no stream")).into();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);

        let device: ServerError = PlaybackError::Service(CadenceError::output("gone")).into();
        assert_eq!(device.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn config_errors_are_internal() {
        let err = ServerError::Config("bad port".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
