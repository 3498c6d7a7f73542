//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

/// Date layout accepted by query parameters.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
    InvalidDate,
    MissingField,
    PayloadTooLarge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::MissingField => "missing_field",
            ErrorCode::PayloadTooLarge => "payload_too_large",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn validation_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn validation_error_with_value(
    field: FieldName,
    code: ErrorCode,
    message: String,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse a non-negative integer identifier from a path or query value.
///
/// Identifiers are stored as signed 64-bit integers, so anything above
/// `i64::MAX` is malformed.
pub(crate) fn parse_id(value: &str, field: FieldName) -> Result<u64, Error> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|id| u64::try_from(id).ok())
        .ok_or_else(|| {
            let name = field.as_str();
            validation_error_with_value(
                field,
                ErrorCode::InvalidId,
                format!("{name} must be a non-negative integer"),
                value,
            )
        })
}

/// Parse a `YYYY-MM-DD` calendar date.
pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        let name = field.as_str();
        validation_error_with_value(
            field,
            ErrorCode::InvalidDate,
            format!("Invalid {name} format. Expected YYYY-MM-DD"),
            value,
        )
    })
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn payload_too_large_error(field: FieldName, limit: usize) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ErrorCode::PayloadTooLarge,
        format!("{name} exceeds the {limit} byte upload limit"),
    )
}
