use serde::Deserialize;

use crate::error::PredictorError;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "predictor-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Host element the application mounts into.
    pub mount_id: String,
    pub endpoint: String,
    /// Payload key for the research toggle. Must match the service exactly.
    pub research_field: String,
    /// Fields rendered as sliders with a live value label.
    pub tracked_sliders: Vec<String>,
    pub idle_label: String,
    pub busy_label: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            mount_id: "predictor-root".to_string(),
            endpoint: "/predict_api".to_string(),
            research_field: "research".to_string(),
            tracked_sliders: ["gre_score", "toefl_score", "sop", "lor", "cgpa"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            idle_label: "Calculate Chance".to_string(),
            busy_label: "Calculating...".to_string(),
        }
    }
}

impl PredictorConfig {
    pub fn from_json(json: &str) -> Result<Self, PredictorError> {
        serde_json::from_str(json).map_err(|e| PredictorError::Config(e.to_string()))
    }

    pub fn is_tracked(&self, field: &str) -> bool {
        self.tracked_sliders.iter().any(|s| s == field)
    }

    /// Reads overrides from the host page. Falls back to defaults when the
    /// element is absent or holds malformed JSON (the latter is logged).
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("{}; using defaults", e).into());
                Self::default()
            }
        }
    }
}
