//! Export/import of the whole store as one JSON snapshot. Import validates
//! the full payload before touching any key, so a bad upload never leaves a
//! mix of old and new state.

use crate::errors::AppError;
use crate::models::{AppData, DayEntry, Question, Settings, UserQuestion};
use serde::Deserialize;

/// Uploaded snapshot: every key optional, unknown keys ignored. A present key
/// with the wrong shape fails the whole parse.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(rename = "user-questions")]
    user_questions: Option<Vec<UserQuestion>>,
    entries: Option<Vec<DayEntry>>,
    #[serde(rename = "custom-questions")]
    custom_questions: Option<Vec<Question>>,
    settings: Option<Settings>,
}

pub fn export_snapshot(data: &AppData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Merge-overwrite each key present in the payload.
pub fn import_snapshot(data: &mut AppData, payload: &str) -> Result<(), AppError> {
    let snapshot: Snapshot = serde_json::from_str(payload)
        .map_err(|err| AppError::bad_request(format!("invalid snapshot: {err}")))?;

    if let Some(user_questions) = snapshot.user_questions {
        data.user_questions = user_questions;
    }
    if let Some(entries) = snapshot.entries {
        data.entries = entries;
    }
    if let Some(custom_questions) = snapshot.custom_questions {
        data.custom_questions = custom_questions;
    }
    if let Some(settings) = snapshot.settings {
        data.settings = settings;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerValue;
    use crate::store::{add_user_question, save_answer};

    fn sample_data() -> AppData {
        let mut data = AppData::default();
        add_user_question(&mut data, "pre-6");
        add_user_question(&mut data, "pre-16");
        save_answer(&mut data, "2026-08-29".parse().unwrap(), "pre-6", AnswerValue::YesNo(true))
            .unwrap();
        save_answer(&mut data, "2026-08-30".parse().unwrap(), "pre-16", AnswerValue::Scale(7.0))
            .unwrap();
        data.settings.language = "en".into();
        data
    }

    #[test]
    fn export_import_round_trips_all_keys() {
        let original = sample_data();
        let payload = export_snapshot(&original).unwrap();

        let mut restored = AppData::default();
        import_snapshot(&mut restored, &payload).unwrap();

        assert_eq!(
            serde_json::to_value(&original).unwrap(),
            serde_json::to_value(&restored).unwrap()
        );
    }

    #[test]
    fn malformed_json_is_rejected_without_mutation() {
        let mut data = sample_data();
        let before = serde_json::to_value(&data).unwrap();

        assert!(import_snapshot(&mut data, "{not json").is_err());
        assert_eq!(serde_json::to_value(&data).unwrap(), before);
    }

    #[test]
    fn wrong_shape_under_known_key_is_rejected_without_mutation() {
        let mut data = sample_data();
        let before = serde_json::to_value(&data).unwrap();

        let payload = r#"{"entries": "definitely not a list", "settings": {"language": "en"}}"#;
        assert!(import_snapshot(&mut data, payload).is_err());
        assert_eq!(serde_json::to_value(&data).unwrap(), before);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut data = AppData::default();
        import_snapshot(&mut data, r#"{"future-key": [1, 2, 3]}"#).unwrap();
        assert!(data.entries.is_empty());
    }

    #[test]
    fn absent_keys_keep_existing_values() {
        let mut data = sample_data();
        import_snapshot(&mut data, r#"{"settings": {"language": "de"}}"#).unwrap();

        assert_eq!(data.settings.language, "de");
        assert_eq!(data.entries.len(), 2);
        assert_eq!(data.user_questions.len(), 2);
    }

    #[test]
    fn raw_answer_values_survive_the_snapshot() {
        let payload = r#"{
            "entries": [
                {
                    "date": "2026-08-30",
                    "answers": [
                        {"questionId": "pre-6", "value": true, "timestamp": "2026-08-30T19:30:00Z"},
                        {"questionId": "pre-16", "value": 8, "timestamp": "2026-08-30T19:31:00Z"},
                        {"questionId": "pre-19", "value": "sunshine", "timestamp": "2026-08-30T19:32:00Z"}
                    ]
                }
            ]
        }"#;
        let mut data = AppData::default();
        import_snapshot(&mut data, payload).unwrap();

        let answers = &data.entries[0].answers;
        assert_eq!(answers[0].value, AnswerValue::YesNo(true));
        assert_eq!(answers[1].value, AnswerValue::Scale(8.0));
        assert_eq!(answers[2].value, AnswerValue::FreeText("sunshine".into()));
    }
}
