//! Message submission service.
//!
//! The one place business rules live: validate input into a
//! [`Message`], then hand it to the injected [`Publisher`] for exactly
//! one publish attempt. Each call is an independent, stateless
//! transaction with no cross-request state, so concurrent calls
//! interleave freely.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::message::{Message, ValidationError};
use crate::queue::{PublishError, Publisher};

/// Failure of a [`MessageService::send_message`] call.
///
/// Either the input never became a message, or the single publish
/// attempt failed. Neither case is retried.
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to publish message: {0}")]
    Publish(#[from] PublishError),
}

/// Core service validating messages and orchestrating publication.
///
/// The publisher is injected at startup and shared across all
/// concurrent requests.
#[derive(Clone)]
pub struct MessageService {
    publisher: Arc<dyn Publisher>,
}

impl MessageService {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    /// Create and validate a new message. Pure construction, no I/O.
    pub fn create_message(&self, author: &str, body: &str) -> Result<Message, ValidationError> {
        let message = Message::new(author, body)?;

        info!(author = author, body_length = body.len(), "message_created");

        Ok(message)
    }

    /// Validate, construct, and publish one message.
    ///
    /// A publish failure is surfaced immediately and once only; the
    /// caller either gets a durably handed-off message or an explicit
    /// error, never a partially-sent state.
    pub async fn send_message(&self, author: &str, body: &str) -> Result<(), SendError> {
        let message = self.create_message(author, body)?;

        self.publisher.publish(&message).await?;

        info!(author = author, "message_sent");

        Ok(())
    }
}
