//! Error handling for the inventory API module.

use thiserror::Error;

/// Generic message shown when listing products fails, whatever the cause.
pub const FETCH_FAILED: &str = "Failed to fetch products";
/// Generic message for a failed create when the server sent no body text.
pub const CREATE_FAILED: &str = "Failed to add product";
/// Generic message for a failed stock update when the server sent no body text.
pub const UPDATE_FAILED: &str = "Failed to update stock";

/// Failure of one of the three inventory API operations.
///
/// Network-level failures and non-2xx responses collapse into the same
/// variant per operation; the UI displays only the message text. The status
/// code, when known, is kept for log-level classification.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Listing failed. Always surfaced with the generic message.
    #[error("{FETCH_FAILED}")]
    Fetch { status: Option<u16> },

    /// Product creation failed. Carries the server body text when non-empty.
    #[error("{message}")]
    Create {
        status: Option<u16>,
        message: String,
    },

    /// Stock update failed. Same text policy as Create.
    #[error("{message}")]
    Update {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    /// HTTP status code of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Fetch { status } => *status,
            ApiError::Create { status, .. } => *status,
            ApiError::Update { status, .. } => *status,
        }
    }

    pub(crate) fn create(status: Option<u16>, body: String) -> ApiError {
        ApiError::Create {
            status,
            message: non_empty_or(body, CREATE_FAILED),
        }
    }

    pub(crate) fn update(status: Option<u16>, body: String) -> ApiError {
        ApiError::Update {
            status,
            message: non_empty_or(body, UPDATE_FAILED),
        }
    }

    /// Builds a create error from a non-success response, preferring the
    /// server's body text over the generic message.
    pub async fn create_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Self::create(Some(status), body)
    }

    /// Builds an update error from a non-success response.
    pub async fn update_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Self::update(Some(status), body)
    }
}

fn non_empty_or(body: String, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_string()
    } else {
        body
    }
}
