//! Error types for building a device request

use thiserror::Error;

/// Failures raised while turning raw field values into a `DeviceConfigRequest`.
///
/// Rendering and auditing never fail; everything that can go wrong happens
/// before a request exists.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("hostname must not be empty")]
    EmptyHostname,

    #[error("hostname '{0}' must not contain path separators")]
    HostnamePathSeparator(String),

    #[error("{field} must be between 1 and 4094, got {value}")]
    VlanOutOfRange { field: &'static str, value: i64 },

    #[error("invalid {field} '{value}', expected one of: {expected}")]
    UnknownChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("malformed override '{0}', expected KEY=VALUE")]
    MalformedOverride(String),

    #[error("failed to assemble device request")]
    Source(#[from] config::ConfigError),
}
