//! Shape checks for the raw API answer.

use serde_json::Value;

use crate::error::{HomeworkError, Result};
use crate::types::ValidatedResponse;

/// Validates a raw API answer and extracts the homework list and cursor.
///
/// Checks run in order: object, both keys present, `homeworks` is an array,
/// `current_date` is an integer.
pub fn check_response(response: &Value) -> Result<ValidatedResponse> {
    tracing::debug!("Checking API response");

    let object = response
        .as_object()
        .ok_or(HomeworkError::InvalidResponseType)?;

    let (homeworks, current_date) = match (object.get("homeworks"), object.get("current_date")) {
        (Some(homeworks), Some(current_date)) => (homeworks, current_date),
        _ => return Err(HomeworkError::EmptyResponse),
    };

    let homeworks = homeworks
        .as_array()
        .ok_or(HomeworkError::HomeworksNotAList)?
        .clone();

    let current_date = current_date
        .as_i64()
        .ok_or(HomeworkError::CurrentDateNotAnInteger)?;

    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}
