//! Field presence checks for request bodies.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be a JSON object with every `required` field present and non-null.
    pub fn require(body: &Value, required: &[&str]) -> Result<(), AppError> {
        let map = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;
        for col in required {
            match map.get(*col) {
                None | Some(Value::Null) => {
                    return Err(AppError::Validation(format!("{} is required", col)));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Presence check, then deserialize. Type mismatches are validation errors.
    pub fn parse<T: DeserializeOwned>(body: Value, required: &[&str]) -> Result<T, AppError> {
        Self::require(&body, required)?;
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))
    }
}
