//! src/waitlist/client.rs
use super::{RemoteAck, SubmissionRequest, SubmissionResult};
use crate::configuration::{ResponseMode, WaitlistSettings};
use crate::domain::WaitlistEmail;
use reqwest::Client;

/// One-shot client for the spreadsheet-backed collection endpoint.
///
/// The HTTP client is the injected transport: tests point `endpoint_url` at a
/// local double instead of the real endpoint. No request timeout is set, so a
/// hung remote keeps the caller suspended until the transport gives up on its
/// own.
#[derive(Debug)]
pub struct WaitlistClient {
    http_client: Client,
    settings: Option<WaitlistSettings>,
}

impl WaitlistClient {
    pub fn new(settings: Option<WaitlistSettings>) -> Self {
        Self {
            http_client: Client::new(),
            settings,
        }
    }

    /// Validates the address, then dispatches a single JSON POST to the
    /// configured endpoint. Every outcome folds into a [`SubmissionResult`];
    /// this never fails the caller. One attempt only: no retry, no backoff,
    /// no deduplication of repeated addresses.
    ///
    /// In the default opaque mode the response is never inspected: the
    /// submission counts as successful as soon as the request leaves without
    /// a transport error, and any remote-side rejection is invisible.
    #[tracing::instrument(name = "Submitting an email to the waitlist", skip(self))]
    pub async fn submit(&self, email: &str, source: &str) -> SubmissionResult {
        let email = match WaitlistEmail::parse(email.to_string()) {
            Ok(email) => email,
            Err(e) => {
                tracing::warn!("Rejected waitlist submission: {}", e);
                return SubmissionResult::invalid_email();
            }
        };

        let Some(settings) = self
            .settings
            .as_ref()
            .filter(|settings| !settings.endpoint_url.is_empty())
        else {
            tracing::error!("Waitlist endpoint URL is not configured");
            return SubmissionResult::config_error();
        };

        let request = SubmissionRequest::new(email, source);
        let response = self
            .http_client
            .post(&settings.endpoint_url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await;

        match (settings.response_mode, response) {
            (ResponseMode::Opaque, Ok(_)) => SubmissionResult::accepted(),
            (ResponseMode::Readable, Ok(response)) => {
                match response.json::<RemoteAck>().await {
                    Ok(ack) => SubmissionResult::from_remote(ack),
                    Err(e) => {
                        tracing::error!("Error reading the waitlist acknowledgement: {}", e);
                        SubmissionResult::transport_error(&e)
                    }
                }
            }
            (_, Err(e)) => {
                tracing::error!("Error submitting to waitlist: {}", e);
                SubmissionResult::transport_error(&e)
            }
        }
    }
}
