/// GCM Client Library
///
/// This library provides a client for the legacy Google Cloud Messaging
/// (GCM) HTTP API for sending push notifications to Android devices.
///
/// It handles:
/// - Message option validation against the fixed GCM parameter rules
/// - Normalization of loosely keyed (string/symbol-style) option maps
/// - JSON request construction with API-key authorization
/// - Returning the HTTP status and decoded JSON response to the caller
///
/// Note: if the endpoint answers "Unavailable" for a key taken from the
/// Google APIs Console, use a browser API key in the Authorization header
/// instead of a server key.
pub mod client;
pub mod errors;
pub mod models;

pub use client::{GcmClient, GCM_SEND_URL};
pub use errors::{GcmError, ValidationError};
pub use models::{MessageOptions, SendResponse, MAX_REGISTRATION_IDS};
