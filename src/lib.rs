//! lax — pipe text into a Slack channel
//!
//! Reads a payload from piped stdin or from a file named with `--file`,
//! normalizes line endings, and delivers it to a configured Slack channel
//! either as an uploaded file (`files.upload`) or as an inline code-fenced
//! message (`chat.postMessage`). One delivery per run, no retries.

pub mod config;
pub mod delivery;
pub mod error;
pub mod input;
pub mod slack;

// Re-export common types
pub use config::Config;
pub use delivery::{deliver, DeliveryMode, DeliveryReport, DeliveryRequest};
pub use error::{Error, Result};
pub use input::{acquire, detect, read_normalized, InputSource};
pub use slack::{Attachment, FileUploadParams, SlackClient};
