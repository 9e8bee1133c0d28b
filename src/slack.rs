//! Slack Web API client.
//!
//! Covers the two calls the tool needs: `files.upload` and
//! `chat.postMessage`. Both are single synchronous request/response calls;
//! any HTTP failure or `ok: false` envelope is terminal for the run.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SLACK_API_URL: &str = "https://slack.com/api";

/// Slack Web API client.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SlackClient {
    /// Create a new client against the production Slack API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, SLACK_API_URL)
    }

    /// Create a client with a custom base URL (used by tests).
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Upload content as a file attachment via `files.upload`.
    pub async fn upload_file(&self, params: &FileUploadParams) -> Result<()> {
        let request = UploadRequest {
            channels: params.channels.join(","),
            content: &params.content,
            filetype: &params.filetype,
            title: &params.title,
            initial_comment: &params.initial_comment,
        };

        let response = self
            .http
            .post(format!("{}/files.upload", self.base_url))
            .bearer_auth(&self.token)
            .form(&request)
            .send()
            .await
            .map_err(|e| Error::Slack(format!("upload request failed: {}", e)))?;

        let envelope: ApiResponse = Self::parse_response(response).await?;
        envelope.into_result()?;
        Ok(())
    }

    /// Post a message with one attachment via `chat.postMessage`.
    ///
    /// Returns the channel id the message was posted to.
    pub async fn post_message(&self, channel: &str, attachment: &Attachment) -> Result<String> {
        let request = PostMessageRequest {
            channel,
            attachments: std::slice::from_ref(attachment),
        };

        let response = self
            .http
            .post(format!("{}/chat.postMessage", self.base_url))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Slack(format!("post request failed: {}", e)))?;

        let envelope: PostMessageResponse = Self::parse_response(response).await?;
        envelope.api.into_result()?;

        envelope
            .channel
            .ok_or_else(|| Error::Slack("response is missing the channel id".to_string()))
    }

    async fn parse_response<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Slack(format!("HTTP {}: {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Slack(format!("invalid response: {}", e)))
    }
}

/// Parameters for a `files.upload` call.
#[derive(Debug, Clone, Default)]
pub struct FileUploadParams {
    pub initial_comment: String,
    pub filetype: String,
    pub title: String,
    pub channels: Vec<String>,
    pub content: String,
}

/// Message attachment: leading pretext plus body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub pretext: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    channels: String,
    content: &'a str,
    filetype: &'a str,
    title: &'a str,
    initial_comment: &'a str,
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    attachments: &'a [Attachment],
}

/// Common `{ ok, error }` envelope every Slack endpoint returns.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ApiResponse {
    fn into_result(self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(Error::Slack(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    #[serde(flatten)]
    api: ApiResponse,
    #[serde(default)]
    channel: Option<String>,
}
