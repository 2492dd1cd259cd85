//! Request types for MCP tools.

use std::borrow::Cow;

use rmcp::schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{de, Deserialize, Deserializer};
use serde_json::Number;

use crate::models::{LocalizeLanguage, SurveyCreateRequest, SurveyType};

// ============================================================
// Request Types
// ============================================================

/// Arguments of the `survey_create` tool.
///
/// Every field is required by the published schema, but missing or `null`
/// values still fall back to defaults here since not every client enforces
/// the schema. Numbers may arrive as integral floats (`5.0`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SurveyCreateArgs {
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub purpose: String,
    #[serde(
        default = "default_num_questions",
        deserialize_with = "num_questions_or_default"
    )]
    pub num_questions: i64,
    #[serde(default = "default_code", deserialize_with = "code_or_default")]
    pub survey_type: i64,
    #[serde(default = "default_code", deserialize_with = "code_or_default")]
    pub language: i64,
}

fn default_num_questions() -> i64 {
    10
}

fn default_code() -> i64 {
    1
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn num_questions_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    integer_or(deserializer, default_num_questions())
}

fn code_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    integer_or(deserializer, default_code())
}

/// Any JSON number with an integral value; `null` gives `default`.
fn integer_or<'de, D>(deserializer: D, default: i64) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(default);
    };

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Other(&number.to_string()),
            &"an integer",
        )),
    }
}

impl Default for SurveyCreateArgs {
    fn default() -> Self {
        Self {
            title: String::new(),
            purpose: String::new(),
            num_questions: default_num_questions(),
            survey_type: default_code(),
            language: default_code(),
        }
    }
}

impl From<SurveyCreateArgs> for SurveyCreateRequest {
    fn from(args: SurveyCreateArgs) -> Self {
        Self {
            language: args.language,
            title: args.title,
            purpose: args.purpose,
            num_questions: args.num_questions,
            survey_type: args.survey_type,
        }
    }
}

impl JsonSchema for SurveyCreateArgs {
    fn schema_name() -> Cow<'static, str> {
        "SurveyCreateArgs".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let survey_type = format!("Survey Type of Survey (1-6):\n{}", SurveyType::catalog());
        let language = format!(
            "Survey Language (1-49): Surveys will be generated in your selected language.\n{}",
            LocalizeLanguage::catalog()
        );

        json_schema!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Survey Title: Enter a survey title summarizing your research topic."
                },
                "purpose": {
                    "type": "string",
                    "description": "Survey Topic Prompts: Provide a detailed description of the survey, including its topic and purpose."
                },
                "num_questions": {
                    "type": "number",
                    "description": "Number of questions for survey (1-): A shorter survey with fewer questions is preferable.",
                    "default": 10,
                    "minimum": 1
                },
                "survey_type": {
                    "type": "number",
                    "description": survey_type,
                    "default": 1,
                    "minimum": 1,
                    "maximum": 6
                },
                "language": {
                    "type": "number",
                    "description": language,
                    "default": 1,
                    "minimum": 1,
                    "maximum": 49
                }
            },
            "required": ["title", "purpose", "num_questions", "survey_type", "language"]
        })
    }
}
