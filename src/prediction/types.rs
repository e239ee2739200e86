use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PredictorError;

use super::fields::parse_field_value;

/// JSON object posted to the prediction endpoint: the research toggle as
/// `0`/`1`, then every other form field as a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(Map<String, Value>);

impl FormPayload {
    /// Builds a payload from raw `(name, text)` form entries.
    ///
    /// Entries named `research_field` are skipped; the toggle always comes
    /// from `research`. Unparseable numbers serialize as `null`.
    pub fn build<'a, I>(entries: I, research_field: &str, research: bool) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Map::new();
        map.insert(research_field.to_string(), Value::from(u8::from(research)));
        for (name, raw) in entries {
            if name == research_field {
                continue;
            }
            map.insert(name.to_string(), Value::from(parse_field_value(raw)));
        }
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, PredictorError> {
        serde_json::to_string(&self.0).map_err(|e| PredictorError::transport(e.to_string()))
    }
}

/// Body returned by the prediction endpoint. Which field is read depends on
/// the HTTP status, so both are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionBody {
    #[serde(default)]
    pub predicted_chance: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictionBody {
    /// Selects the success or error shape by status. A success body with no
    /// chance yields NaN, which renders in the lowest tier.
    pub fn into_result(self, status_ok: bool) -> Result<f64, PredictorError> {
        if status_ok {
            Ok(self.predicted_chance.unwrap_or(f64::NAN))
        } else {
            Err(PredictorError::rejected(self.error))
        }
    }
}
