// src/error.rs
//! Error types for the navigator

use std::fmt;

pub type Result<T> = std::result::Result<T, NavError>;

/// A geopoint record was shorter than the fixed record length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "truncated geopoint record: expected {} bytes, got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for DecodeError {}

#[derive(Debug)]
pub enum NavError {
    Decode(DecodeError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Parse(String),
    Config(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::Decode(e) => write!(f, "Decode error: {}", e),
            NavError::Io(e) => write!(f, "IO error: {}", e),
            NavError::Json(e) => write!(f, "JSON error: {}", e),
            NavError::Parse(msg) => write!(f, "Parse error: {}", msg),
            NavError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::Decode(e) => Some(e),
            NavError::Io(e) => Some(e),
            NavError::Json(e) => Some(e),
            NavError::Parse(_) | NavError::Config(_) => None,
        }
    }
}

impl From<DecodeError> for NavError {
    fn from(error: DecodeError) -> Self {
        NavError::Decode(error)
    }
}

impl From<std::io::Error> for NavError {
    fn from(error: std::io::Error) -> Self {
        NavError::Io(error)
    }
}

impl From<serde_json::Error> for NavError {
    fn from(error: serde_json::Error) -> Self {
        NavError::Json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let err = NavError::from(DecodeError { expected: 16, actual: 10 });
        assert_eq!(
            err.to_string(),
            "Decode error: truncated geopoint record: expected 16 bytes, got 10"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
