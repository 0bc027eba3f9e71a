use portal_logging::portal_warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{FailureKind, FetchError};

/// One job as the backend sends it. Every field is optional and text fields
/// accept numbers too; unusable values surface later as a malformed record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawJobRecord {
    pub id: Option<Value>,
    #[serde(deserialize_with = "lenient_text")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub job_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub job_description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub employment_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub work_model: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub experience_level: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_logo: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dtime: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

/// The `{status, data}` wrapper around every backend response.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: Option<bool>,
    #[serde(default)]
    data: Value,
}

fn parse_envelope(body: &[u8]) -> Result<Envelope, FetchError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    if envelope.status == Some(false) {
        portal_warn!("backend reported status=false");
    }
    Ok(envelope)
}

/// Extracts the job list. A `data` that is not an array is an empty catalog.
pub(crate) fn decode_job_list(body: &[u8]) -> Result<Vec<Value>, FetchError> {
    match parse_envelope(body)?.data {
        Value::Array(records) => Ok(records),
        other => {
            portal_warn!("job list data is not an array ({}); treating as empty", kind_of(&other));
            Ok(Vec::new())
        }
    }
}

/// Extracts a single job. Accepts an object or a one element array.
pub(crate) fn decode_job_detail(body: &[u8]) -> Result<Option<Value>, FetchError> {
    Ok(match parse_envelope(body)?.data {
        Value::Object(map) => Some(Value::Object(map)),
        Value::Array(records) => records.into_iter().next(),
        _ => None,
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
