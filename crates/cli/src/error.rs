//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Configuration failures always exit with `GeneralError`.

use grafana_client::ClientError;

/// Structured exit codes for grafana-dash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - configuration problems or unclassified failures.
    GeneralError = 1,

    /// Authentication failure - HTTP 401, the token was rejected.
    ///
    /// Scripts should refresh the token.
    AuthenticationFailed = 2,

    /// Connection error - connect refused, DNS, TLS or timeout.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Resource not found - HTTP 404, usually an unknown dashboard uid.
    NotFound = 4,

    /// Validation error - malformed uid, HTTP 400 or an undecodable body in strict mode.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - HTTP 403, the token lacks the required role.
    PermissionDenied = 6,

    /// Upstream unavailable - HTTP 502, 503 or 504.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::HttpStatus { status, .. } => match status {
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                400 => ExitCode::ValidationError,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },

            ClientError::Network(_) if err.is_connection_error() => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::InvalidUid(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::Network(_)
            | ClientError::ReadBody(_)
            | ClientError::MissingToken
            | ClientError::Build(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
