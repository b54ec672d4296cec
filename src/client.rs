use serde_json::Value;
use tracing::{info, warn};

use crate::errors::GcmError;
use crate::models::{MessageOptions, SendResponse};

/// Fixed GCM send endpoint.
pub const GCM_SEND_URL: &str = "https://android.googleapis.com/gcm/send";

/// Google Cloud Messaging Client
///
/// Holds the API key used to authorize send requests. Construct one client
/// up front and pass it by reference wherever notifications are sent; there
/// is no hidden process-wide account state.
pub struct GcmClient {
    api_key: String,
    endpoint: String,
    http_client: reqwest::Client,
}

impl GcmClient {
    /// Create a new GCM client
    ///
    /// # Arguments
    /// * `api_key` - GCM API key placed in the `Authorization: key=...` header
    ///
    /// # Returns
    /// `Err(GcmError::MissingApiKey)` if the key is empty or whitespace
    pub fn new(api_key: impl Into<String>) -> Result<Self, GcmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GcmError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            endpoint: GCM_SEND_URL.to_string(),
            http_client: reqwest::Client::new(),
        })
    }

    /// Override the send endpoint (used by tests against a local server)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Send a notification to the devices named in `options`
    ///
    /// Validates the options, POSTs them as JSON to the GCM endpoint in a
    /// single attempt, and returns the HTTP status code together with the
    /// decoded response body. Non-2xx statuses are returned as-is in the
    /// response; only transport-level failures become errors.
    pub async fn send_notification(
        &self,
        options: &MessageOptions,
    ) -> Result<SendResponse, GcmError> {
        options.validate()?;

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.api_key))
            .header("Content-Type", "application/json")
            .json(options)
            .send()
            .await?;

        let code = response.status().as_u16();
        let text = response.text().await?;
        let body = decode_body(&text);

        if (200..300).contains(&code) {
            info!(
                code,
                recipients = options.registration_ids.len(),
                "GCM notification sent"
            );
        } else {
            warn!(code, "GCM endpoint answered with non-success status");
        }

        Ok(SendResponse { code, body })
    }

    /// Send a notification described by a loose JSON object
    ///
    /// Convenience entry point for dynamically assembled options: normalizes
    /// and validates `options` via [`MessageOptions::from_value`], then
    /// behaves exactly like [`GcmClient::send_notification`].
    pub async fn send_value(&self, options: &Value) -> Result<SendResponse, GcmError> {
        let options = MessageOptions::from_value(options)?;
        self.send_notification(&options).await
    }
}

/// The GCM endpoint answers JSON on success but plain text (or nothing) on
/// some auth and quota failures; carry those through rather than failing.
fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
