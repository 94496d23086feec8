//! Translates a homework record into the verdict notification text.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{HomeworkError, Result};
use crate::types::HomeworkStatus;

/// Builds `Изменился статус проверки работы "<name>". <verdict>` for one record.
///
/// Fails with [`HomeworkError::MissingKey`] when `homework_name` is absent and
/// with [`HomeworkError::UndocumentedStatus`] when `status` is not a known code.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .ok_or(HomeworkError::MissingKey("homework_name"))?;
    let name = match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let raw_status = homework.get("status");
    let status = raw_status
        .and_then(|v| HomeworkStatus::deserialize(v).ok())
        .ok_or_else(|| {
            let shown = match raw_status {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => "null".to_string(),
            };
            HomeworkError::UndocumentedStatus(shown)
        })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_approved_message() {
        let message = parse_status(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_every_known_status_uses_verdict_table() {
        for status in HomeworkStatus::ALL {
            let record = json!({"homework_name": "final_project", "status": status.as_str()});
            let message = parse_status(&record).unwrap();
            assert_eq!(
                message,
                format!(
                    "Изменился статус проверки работы \"final_project\". {}",
                    status.verdict()
                )
            );
        }
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record = json!({
            "id": 124,
            "homework_name": "username__hw_python_oop.zip",
            "status": "rejected",
            "reviewer_comment": "Код не по PEP8",
            "lesson_name": "Итоговый проект"
        });
        assert_eq!(
            parse_status(&record).unwrap(),
            "Изменился статус проверки работы \"username__hw_python_oop.zip\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_missing_homework_name() {
        assert_eq!(
            parse_status(&json!({"status": "approved"})),
            Err(HomeworkError::MissingKey("homework_name"))
        );
    }

    #[test]
    fn test_non_object_record_has_no_name() {
        assert_eq!(
            parse_status(&json!("hw1")),
            Err(HomeworkError::MissingKey("homework_name"))
        );
    }

    #[test]
    fn test_unknown_status() {
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": "on_hold"})),
            Err(HomeworkError::UndocumentedStatus("on_hold".to_string()))
        );
    }

    #[test]
    fn test_missing_status_is_undocumented() {
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1"})),
            Err(HomeworkError::UndocumentedStatus("null".to_string()))
        );
    }

    #[test]
    fn test_non_string_status_is_undocumented() {
        assert_eq!(
            parse_status(&json!({"homework_name": "hw1", "status": 1})),
            Err(HomeworkError::UndocumentedStatus("1".to_string()))
        );
    }
}
