//! src/waitlist/mod.rs
use crate::domain::WaitlistEmail;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

mod client;
pub use client::WaitlistClient;

/// Error tag: local validation failed, nothing was sent.
pub const INVALID_EMAIL: &str = "INVALID_EMAIL";
/// Error tag: the collection endpoint is not configured.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
/// Error tag: a transport failure that produced no inspectable cause.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// One signup, built fresh for every submit and discarded once the call
/// settles. Nothing is queued or retried.
#[derive(Debug, Serialize)]
pub struct SubmissionRequest {
    email: WaitlistEmail,
    source: String,
    timestamp: String,
}

impl SubmissionRequest {
    /// Stamps the request with the current instant; the caller never supplies
    /// the timestamp.
    pub fn new(email: WaitlistEmail, source: &str) -> Self {
        Self {
            email,
            source: source.to_owned(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// The uniform outcome of a submission attempt. `message` is suitable for
/// direct display; `error` is present only on failure and carries one of the
/// fixed tags or the stringified transport failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn invalid_email() -> Self {
        Self {
            success: false,
            message: "Please enter a valid email address".into(),
            error: Some(INVALID_EMAIL.into()),
        }
    }

    pub fn config_error() -> Self {
        Self {
            success: false,
            message: "Service configuration error. Please try again later.".into(),
            error: Some(CONFIG_ERROR.into()),
        }
    }

    pub fn transport_error(cause: &reqwest::Error) -> Self {
        let cause = cause.to_string();
        Self {
            success: false,
            message: "Unable to submit. Please try again later.".into(),
            error: Some(if cause.is_empty() {
                UNKNOWN_ERROR.into()
            } else {
                cause
            }),
        }
    }

    pub fn accepted() -> Self {
        Self {
            success: true,
            message: "Successfully added to waitlist!".into(),
            error: None,
        }
    }

    /// Maps the enhanced endpoint's own `{success, message}` acknowledgement
    /// through. This path never carries an error tag: the remote's verdict is
    /// the whole payload.
    fn from_remote(ack: RemoteAck) -> Self {
        Self {
            success: ack.success,
            message: ack
                .message
                .unwrap_or_else(|| "Submitted successfully".into()),
            error: None,
        }
    }
}

#[derive(Deserialize)]
struct RemoteAck {
    #[serde(default)]
    success: bool,
    message: Option<String>,
}
