// Tool call arguments as received from MCP clients

use crate::error::{ValidationError, ValidationResult};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Arguments accepted by the e-Stat tools.
///
/// Every field is optional here; which ones are required depends on the
/// operation and is checked by the translator. Empty strings and `null`
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArguments {
    #[serde(default, deserialize_with = "text")]
    pub search_word: Option<String>,
    #[serde(default, rename = "surveyYears", deserialize_with = "text")]
    pub survey_years: Option<String>,
    #[serde(default, rename = "startPosition", deserialize_with = "integer")]
    pub start_position: Option<u64>,
    #[serde(default, deserialize_with = "integer")]
    pub limit: Option<u64>,

    // Table / dataset identifiers
    #[serde(default, deserialize_with = "text")]
    pub stats_data_id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub data_set_id: Option<String>,

    // getStatsList
    #[serde(default, rename = "openYears", deserialize_with = "text")]
    pub open_years: Option<String>,
    #[serde(default, rename = "statsField", deserialize_with = "text")]
    pub stats_field: Option<String>,
    #[serde(default, rename = "statsCode", deserialize_with = "text")]
    pub stats_code: Option<String>,
    #[serde(default, rename = "searchKind", deserialize_with = "text")]
    pub search_kind: Option<String>,

    // getStatsData
    #[serde(default, rename = "sectionHeaderFlg", deserialize_with = "integer")]
    pub section_header_flg: Option<u64>,
    #[serde(default, rename = "replaceSpChars", deserialize_with = "integer")]
    pub replace_sp_chars: Option<u64>,
    #[serde(default, rename = "narrowDownArea", deserialize_with = "text")]
    pub narrow_down_area: Option<String>,

    // getDataCatalog
    #[serde(default, rename = "dataType", deserialize_with = "text")]
    pub data_type: Option<String>,
    #[serde(default, rename = "catalogId", deserialize_with = "text")]
    pub catalog_id: Option<String>,
    #[serde(default, rename = "resourceId", deserialize_with = "text")]
    pub resource_id: Option<String>,

    // getMetaInfo
    #[serde(default, rename = "explanationGetFlg", deserialize_with = "text")]
    pub explanation_get_flg: Option<String>,
}

impl ToolArguments {
    /// Read arguments from a JSON value. `null` is treated as an empty object.
    pub fn from_value(value: serde_json::Value) -> ValidationResult<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map_err(|e| ValidationError::InvalidArguments(e.to_string())),
            other => Err(ValidationError::InvalidArguments(format!(
                "expected an object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Number(serde_json::Number),
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => None,
        Some(Loose::Text(s)) if s.is_empty() => None,
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Number(n)) => Some(n.to_string()),
    })
}

fn integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<u64>().map(Some).map_err(|_| {
                de::Error::custom(format!("expected a non-negative integer, got \"{}\"", s))
            })
        }
        Some(Loose::Number(n)) => {
            if let Some(v) = n.as_u64() {
                return Ok(Some(v));
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                    Ok(Some(f as u64))
                }
                _ => Err(de::Error::custom(format!(
                    "expected a non-negative integer, got {}",
                    n
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_arguments_are_empty() {
        let args = ToolArguments::from_value(serde_json::Value::Null).unwrap();
        assert_eq!(args, ToolArguments::default());
    }

    #[test]
    fn test_field_names_follow_tool_schema() {
        let args = ToolArguments::from_value(json!({
            "search_word": "人口",
            "surveyYears": "2020",
            "startPosition": 1,
            "limit": 5,
            "searchKind": "1",
            "explanationGetFlg": "Y"
        }))
        .unwrap();

        assert_eq!(args.search_word.as_deref(), Some("人口"));
        assert_eq!(args.survey_years.as_deref(), Some("2020"));
        assert_eq!(args.start_position, Some(1));
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.search_kind.as_deref(), Some("1"));
        assert_eq!(args.explanation_get_flg.as_deref(), Some("Y"));
    }

    #[test]
    fn test_empty_and_null_values_are_absent() {
        let args = ToolArguments::from_value(json!({
            "search_word": "",
            "stats_data_id": null,
            "limit": "",
            "startPosition": null
        }))
        .unwrap();

        assert_eq!(args, ToolArguments::default());
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let args = ToolArguments::from_value(json!({
            "limit": "10",
            "sectionHeaderFlg": 2.0
        }))
        .unwrap();

        assert_eq!(args.limit, Some(10));
        assert_eq!(args.section_header_flg, Some(2));
    }

    #[test]
    fn test_malformed_numbers_rejected() {
        for bad in [json!({"limit": "ten"}), json!({"limit": -1}), json!({"limit": 1.5})] {
            let err = ToolArguments::from_value(bad).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidArguments(_)));
        }
    }

    #[test]
    fn test_non_object_rejected() {
        let err = ToolArguments::from_value(json!(["search_word"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidArguments("expected an object, got an array".to_string())
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let args = ToolArguments::from_value(json!({
            "data_set_id": "0003000001",
            "lang": "E"
        }))
        .unwrap();

        assert_eq!(args.data_set_id.as_deref(), Some("0003000001"));
    }
}
