//! Dispatch decision and delivery.
//!
//! One request, one delivery path: either upload the buffer as a file or
//! post it inline as a code-fenced attachment. No retries.

use crate::error::Result;
use crate::slack::{Attachment, FileUploadParams, SlackClient};

/// How the content reaches the channel. Decided once after flag parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Upload the buffer via `files.upload` (the default)
    UploadAsFile { title: String, filetype: String },
    /// Post the buffer as a code-fenced message attachment
    PostInline,
}

impl DeliveryMode {
    /// Map the CLI flags onto a delivery mode.
    pub fn from_flags(inline: bool, title: String, filetype: String) -> Self {
        if inline {
            DeliveryMode::PostInline
        } else {
            DeliveryMode::UploadAsFile { title, filetype }
        }
    }
}

/// Everything one delivery needs. Built after acquisition, consumed once.
#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub channel: String,
    pub message: String,
    pub content: String,
    pub mode: DeliveryMode,
}

/// What happened, for the confirmation line on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReport {
    Uploaded,
    Posted { channel: String },
}

/// Wrap content in a fenced code block for inline posting.
pub fn fence(content: &str) -> String {
    format!("```\n{}\n```", content)
}

/// Perform exactly one delivery action against the Slack API.
pub async fn deliver(client: &SlackClient, request: DeliveryRequest) -> Result<DeliveryReport> {
    match request.mode {
        DeliveryMode::UploadAsFile { title, filetype } => {
            let params = FileUploadParams {
                initial_comment: request.message,
                filetype,
                title,
                channels: vec![request.channel],
                content: request.content,
            };
            client.upload_file(&params).await?;
            Ok(DeliveryReport::Uploaded)
        }
        DeliveryMode::PostInline => {
            let attachment = Attachment {
                pretext: request.message,
                text: fence(&request.content),
            };
            let channel = client.post_message(&request.channel, &attachment).await?;
            Ok(DeliveryReport::Posted { channel })
        }
    }
}
