use thiserror::Error;

/// GCM Client Error Types
#[derive(Error, Debug)]
pub enum GcmError {
    #[error("GCM API key is missing or empty")]
    MissingApiKey,

    #[error("Invalid message options: {0}")]
    Validation(#[from] ValidationError),

    #[error("GCM send request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Message validation failures, one variant per violated rule.
///
/// Every variant is raised before any network I/O; a message that fails
/// validation is never partially sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("registration_ids must be provided")]
    RegistrationIdsMissing,

    #[error("registration_ids must contain at least one registration ID")]
    RegistrationIdsEmpty,

    #[error("registration_ids must contain at most 1000 registration IDs, got {count}")]
    TooManyRegistrationIds { count: usize },

    #[error("registration_ids must be an array")]
    RegistrationIdsNotArray,

    #[error("registration_ids entries must be strings or integers")]
    RegistrationIdType,

    #[error("collapse_key must be a string")]
    CollapseKeyNotString,

    #[error("collapse_key is required when time_to_live is set")]
    CollapseKeyRequired,

    #[error("time_to_live must be an integer")]
    TimeToLiveNotInteger,

    #[error("delay_while_idle must be a boolean")]
    DelayWhileIdleNotBoolean,

    #[error("data must be a JSON object of key/value pairs")]
    DataNotObject,

    #[error("message options must be a JSON object")]
    NotAnObject,
}
