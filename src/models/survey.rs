use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::JobStatus;

/// Body of `POST /v1/surveys/ai`.
///
/// Integer codes are passed through as given; see [`super::SurveyType`] and
/// [`super::LocalizeLanguage`] for their meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurveyCreateRequest {
    pub language: i64,
    pub title: String,
    pub purpose: String,
    pub num_questions: i64,
    pub survey_type: i64,
}

/// Short-lived API token. Fetched once per survey creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub token: String,
}

impl AccessToken {
    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

/// How a survey creation ended.
///
/// Only `Created` carries data; every other variant is reported to tool
/// callers the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyOutcome {
    /// The job finished. Holds the callback payload without `task_status`.
    Created(Map<String, Value>),
    /// The create response had no callback URL. Nothing was polled.
    CallbackMissing,
    /// The job reported `Failure` or `Canceled`.
    TaskFailed { status: JobStatus, attempts: u32 },
    /// No terminal status within the poll budget.
    TimedOut { attempts: u32 },
}

impl SurveyOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn into_data(self) -> Option<Map<String, Value>> {
        match self {
            Self::Created(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_joins_type_and_token() {
        let token = AccessToken {
            token_type: "Bearer".to_string(),
            token: "abc".to_string(),
        };
        assert_eq!(token.header_value(), "Bearer abc");
    }

    #[test]
    fn request_uses_api_field_names() {
        let req = SurveyCreateRequest {
            language: 2,
            title: "Pets".to_string(),
            purpose: "gauge ownership".to_string(),
            num_questions: 5,
            survey_type: 1,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["num_questions"], 5);
        assert_eq!(value["survey_type"], 1);
        assert_eq!(value["language"], 2);
    }

    #[test]
    fn only_created_has_data() {
        assert!(SurveyOutcome::TimedOut { attempts: 50 }.into_data().is_none());
        assert!(SurveyOutcome::CallbackMissing.into_data().is_none());
        let outcome = SurveyOutcome::Created(Map::new());
        assert!(outcome.is_created());
        assert_eq!(outcome.into_data(), Some(Map::new()));
    }
}
