//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - The [`Publisher`] capability trait the service publishes through
//! - The lapin-backed [`RabbitMqPublisher`] production implementation
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients → POST /messages → MessageService → chat_messages queue → consumers
//! ```

pub mod publisher;

pub use publisher::{
    CloseError, ConnectionError, PublishError, Publisher, RabbitMqPublisher, MESSAGE_QUEUE,
};
