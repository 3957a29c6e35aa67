use serde::Serialize;
use thiserror::Error;

use crate::config::PLUNK_SEND_ENDPOINT;

/// Errors from the email delivery endpoint.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The endpoint answered with a non-2xx status.
    #[error("delivery endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure (connect, TLS, body read/decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// JSON payload of a Plunk send request.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Client for the Plunk transactional email API.
pub struct PlunkClient {
    client: reqwest::Client,
    api_key: String,
}

impl PlunkClient {
    /// Create a new client authenticating with the given API key.
    pub fn new(api_key: String) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("certwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Send one email. Returns the endpoint's JSON response on HTTP 2xx.
    ///
    /// A single attempt is made; there is no retry.
    pub async fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<serde_json::Value, NotifyError> {
        let payload = SendEmailRequest { to, subject, body };
        let response = self
            .client
            .post(PLUNK_SEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(NotifyError::Api { status, body });
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}
