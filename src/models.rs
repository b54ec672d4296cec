use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ValidationError;

/// Maximum number of registration IDs the GCM API accepts per request.
pub const MAX_REGISTRATION_IDS: usize = 1000;

/// GCM Message Options
///
/// The request body for a single GCM send. Optional fields that are left
/// unset are omitted from the serialized JSON entirely.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MessageOptions {
    pub registration_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_while_idle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<i64>,
}

impl MessageOptions {
    /// Create message options targeting the given registration IDs
    pub fn new(registration_ids: Vec<String>) -> Self {
        Self {
            registration_ids,
            ..Default::default()
        }
    }

    /// Set the collapse key used by GCM to coalesce pending messages
    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = Some(collapse_key.into());
        self
    }

    /// Set the custom key/value payload delivered to the application
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// Set whether delivery should wait until the device becomes active
    pub fn with_delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.delay_while_idle = Some(delay_while_idle);
        self
    }

    /// Set how many seconds GCM should retain an undelivered message
    pub fn with_time_to_live(mut self, time_to_live: i64) -> Self {
        self.time_to_live = Some(time_to_live);
        self
    }

    /// Check the fixed GCM parameter rules.
    ///
    /// Rules the type system already guarantees for this struct (integer
    /// time_to_live, boolean delay_while_idle) are enforced for dynamic
    /// input in [`MessageOptions::from_value`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.registration_ids.is_empty() {
            return Err(ValidationError::RegistrationIdsEmpty);
        }
        if self.registration_ids.len() > MAX_REGISTRATION_IDS {
            return Err(ValidationError::TooManyRegistrationIds {
                count: self.registration_ids.len(),
            });
        }
        if self.time_to_live.is_some() && self.collapse_key.is_none() {
            return Err(ValidationError::CollapseKeyRequired);
        }
        Ok(())
    }

    /// Build validated message options from a loose JSON object.
    ///
    /// This is the deserialization boundary for callers that assemble
    /// options dynamically. Keys may be spelled as plain strings
    /// (`"registration_ids"`), symbol-style (`":registration_ids"`), or in
    /// any letter case; all spellings are normalized before validation, so
    /// equivalent inputs produce identical requests. Unrecognized keys are
    /// ignored.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let fields = match value.as_object() {
            Some(map) => map
                .iter()
                .map(|(key, value)| (normalize_key(key), value))
                .collect::<BTreeMap<String, &Value>>(),
            None => return Err(ValidationError::NotAnObject),
        };

        let registration_ids = match fields.get("registration_ids") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(registration_id)
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(ValidationError::RegistrationIdsNotArray),
            None => return Err(ValidationError::RegistrationIdsMissing),
        };
        if registration_ids.is_empty() {
            return Err(ValidationError::RegistrationIdsEmpty);
        }
        if registration_ids.len() > MAX_REGISTRATION_IDS {
            return Err(ValidationError::TooManyRegistrationIds {
                count: registration_ids.len(),
            });
        }

        let collapse_key = match fields.get("collapse_key") {
            Some(Value::String(key)) => Some(key.clone()),
            Some(_) => return Err(ValidationError::CollapseKeyNotString),
            None => None,
        };

        let time_to_live = match fields.get("time_to_live") {
            Some(value) => {
                if collapse_key.is_none() {
                    return Err(ValidationError::CollapseKeyRequired);
                }
                Some(value.as_i64().ok_or(ValidationError::TimeToLiveNotInteger)?)
            }
            None => None,
        };

        let delay_while_idle = match fields.get("delay_while_idle") {
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => return Err(ValidationError::DelayWhileIdleNotBoolean),
            None => None,
        };

        let data = match fields.get("data") {
            Some(Value::Object(map)) => Some(map.clone()),
            Some(_) => return Err(ValidationError::DataNotObject),
            None => None,
        };

        Ok(Self {
            registration_ids,
            collapse_key,
            data,
            delay_while_idle,
            time_to_live,
        })
    }
}

fn normalize_key(key: &str) -> String {
    key.trim_start_matches(':').to_ascii_lowercase()
}

fn registration_id(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(id) => Ok(id.clone()),
        Value::Number(id) if id.is_i64() || id.is_u64() => Ok(id.to_string()),
        _ => Err(ValidationError::RegistrationIdType),
    }
}

/// GCM Send Response
///
/// HTTP status code plus the decoded JSON response body. Non-JSON bodies
/// are carried through as a JSON string, empty bodies as null.
#[derive(Debug, Clone)]
pub struct SendResponse {
    pub code: u16,
    pub body: Value,
}

impl SendResponse {
    /// Whether GCM answered with a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}
