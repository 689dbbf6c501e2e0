/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! JSON helpers used when building request bodies and reading responses
//!
//! Field naming (camelCase) and null skipping are declared on each type with
//! `#[serde(rename_all = "camelCase")]` and `#[serde(skip_serializing_if = "Option::is_none")]`.

use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Returns the content only when it holds something other than whitespace
#[must_use]
pub fn non_blank(content: Option<&str>) -> Option<&str> {
    content.filter(|c| !c.trim().is_empty())
}

/// Serializes an optional value to compact JSON; an absent value stays absent
pub fn to_json<T: Serialize + ?Sized>(value: Option<&T>) -> Result<Option<String>, AppError> {
    value.map(serde_json::to_string).transpose().map_err(AppError::from)
}

/// Serializes an optional value to indented JSON; an absent value stays absent
pub fn to_json_pretty<T: Serialize + ?Sized>(
    value: Option<&T>,
) -> Result<Option<String>, AppError> {
    value
        .map(serde_json::to_string_pretty)
        .transpose()
        .map_err(AppError::from)
}

/// Decodes JSON text, returning `T::default()` for absent or blank input
///
/// Non-blank text that is not valid JSON for `T` is an error.
pub fn from_json_or_default<T: DeserializeOwned + Default>(
    json: Option<&str>,
) -> Result<T, AppError> {
    match non_blank(json) {
        Some(text) => Ok(serde_json::from_str(text)?),
        None => Ok(T::default()),
    }
}
