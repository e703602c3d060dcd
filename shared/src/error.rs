//! Error codes shared between the backend API and the client
//!
//! The backend reports failures as `{ code, message }` envelopes with
//! `E`-prefixed code strings. [`ApiErrorCode`] is the typed view of
//! those codes, with the HTTP status each one maps to.

use http::StatusCode;
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Permission denied (403)
    Forbidden,
    /// Resource not found (404)
    NotFound,
    /// Resource already exists (409)
    Conflict,
    /// Business rule violation (422)
    BusinessRule,
    /// Internal server error (500)
    Internal,
    /// Invalid request (400)
    Invalid,
}

/// Error returned when parsing an unknown code string
#[derive(Debug, Error)]
#[error("unknown error code: {0}")]
pub struct InvalidErrorCode(pub String);

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::BusinessRule => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Invalid => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::Unauthorized => "Authentication required",
            Self::Forbidden => "Permission denied",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::BusinessRule => "Business rule violation",
            Self::Internal => "Internal server error",
            Self::Invalid => "Invalid request",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::NotFound => "E0003",
            Self::Conflict => "E0004",
            Self::BusinessRule => "E0005",
            Self::Invalid => "E0006",
            Self::Forbidden => "E2001",
            Self::Unauthorized => "E3001",
            Self::Internal => "E9001",
        }
    }

    /// Parse a code string received from the backend
    pub fn parse(code: &str) -> Result<Self, InvalidErrorCode> {
        match code {
            "E0000" => Ok(Self::Success),
            "E0002" => Ok(Self::Validation),
            "E0003" => Ok(Self::NotFound),
            "E0004" => Ok(Self::Conflict),
            "E0005" => Ok(Self::BusinessRule),
            "E0006" => Ok(Self::Invalid),
            "E2001" => Ok(Self::Forbidden),
            "E3001" => Ok(Self::Unauthorized),
            "E9001" => Ok(Self::Internal),
            other => Err(InvalidErrorCode(other.to_string())),
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_strings_round_trip() {
        let codes = [
            ApiErrorCode::Success,
            ApiErrorCode::Validation,
            ApiErrorCode::Unauthorized,
            ApiErrorCode::Forbidden,
            ApiErrorCode::NotFound,
            ApiErrorCode::Conflict,
            ApiErrorCode::BusinessRule,
            ApiErrorCode::Internal,
            ApiErrorCode::Invalid,
        ];
        for code in codes {
            assert_eq!(ApiErrorCode::parse(code.code()).unwrap(), code);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(ApiErrorCode::parse("E4242").is_err());
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiErrorCode::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiErrorCode::BusinessRule.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
