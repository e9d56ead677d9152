// ABOUTME: Unified error type and error codes for the physiology sandbox
// ABOUTME: Provides AppError, ErrorCode and the AppResult alias with conversions from io/serde errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error type for the sandbox. Derivation
//! functions never fail (they propagate non-finite values instead), so errors
//! only arise at the edges: malformed documents, wrongly-typed field values,
//! unknown presets, storage and configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value rejected
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required document member missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Malformed text or document
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Named resource (scenario, profile) does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Durable storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON (de)serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the document",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured context
    pub details: Value,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Malformed text or document
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Required member missing
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field '{field}'"),
        )
        .with_details(serde_json::json!({ "field": field }))
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Storage failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_details(
            serde_json::json!({
                "line": error.line(),
                "column": error.column(),
            }),
        )
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string())
            .with_details(serde_json::json!({ "kind": format!("{:?}", error.kind()) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::not_found("Scenario 'Marathon'");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Scenario 'Marathon' not found"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let error = AppError::from(parse_err);
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.details.get("line").is_some());
    }

    #[test]
    fn test_missing_field_details() {
        let error = AppError::missing_field("record");
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.details["field"], "record");
    }
}
