//! Web module for handling message submissions.
//!
//! This module provides thin HTTP handlers that:
//! - Accept a JSON message submission
//! - Delegate validation and publishing to the message service
//! - Map the outcome onto an HTTP status and response envelope
//!
//! All business rules live in the service; handlers only translate.

pub mod handlers;

pub use handlers::{health, post_message, AppState, HealthResponse, MessageRequest, MessageResponse};
