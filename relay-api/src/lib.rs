//! Relay - HTTP-to-RabbitMQ message submission bridge.
//!
//! This library provides the pieces of the `relay-api` binary:
//! - `message`: the validated domain message
//! - `service`: validation and publish orchestration
//! - `queue`: the publisher capability and its RabbitMQ implementation
//! - `web`: axum handlers translating HTTP to service calls
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients → Web Server → MessageService → Publisher → chat_messages queue
//! ```

pub mod config;
pub mod message;
pub mod queue;
pub mod service;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, ValidationError};
pub use queue::{Publisher, RabbitMqPublisher, MESSAGE_QUEUE};
pub use service::{MessageService, SendError};
pub use web::AppState;
