//! Domain message type.
//!
//! A [`Message`] is the single kind of payload this service accepts:
//! an author/body pair stamped with the time it entered the system.
//! Validation happens once, at construction; a `Message` that exists
//! always has a non-empty author and body, and cannot be mutated
//! afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Validation failure while constructing a [`Message`].
///
/// Author is checked before body, so inputs failing both report the
/// author first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author is required")]
    EmptyAuthor,
    #[error("body is required")]
    EmptyBody,
}

/// A validated message bound for the broker.
///
/// Fields are private so the validation performed by [`Message::new`]
/// holds for the lifetime of the value. Serializes as
/// `{"author": ..., "body": ..., "sent_at": ...}` with `sent_at` in
/// RFC 3339.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    author: String,
    body: String,
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message, stamping `sent_at` with the current time.
    ///
    /// Inputs are taken exactly as given; no trimming or
    /// normalization is applied.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Result<Self, ValidationError> {
        let author = author.into();
        let body = body.into();

        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if body.is_empty() {
            return Err(ValidationError::EmptyBody);
        }

        Ok(Self {
            author,
            body,
            sent_at: Utc::now(),
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Encode the message for the wire.
    ///
    /// Only the publish boundary calls this; nothing else in the
    /// service looks at the encoded form.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
