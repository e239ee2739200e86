//! Fetch-backed client for the prediction endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::PredictorError;
use crate::prediction::{FormPayload, PredictionBody, PredictionService};

pub const PREDICT_METHOD: &str = "POST";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Everything the browser needs to issue one prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl PredictionRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn describe(&self, payload: &FormPayload) -> Result<PredictionRequest, PredictorError> {
        Ok(PredictionRequest {
            method: PREDICT_METHOD,
            url: self.endpoint.clone(),
            headers: vec![("Content-Type", JSON_CONTENT_TYPE)],
            body: payload.to_json()?,
        })
    }

    fn build_request(&self, payload: &FormPayload) -> Result<Request, PredictorError> {
        let described = self.describe(payload)?;

        let headers = Headers::new().map_err(js_error)?;
        for (name, value) in &described.headers {
            headers.set(name, value).map_err(js_error)?;
        }

        let init = RequestInit::new();
        init.set_method(described.method);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&described.body));

        Request::new_with_str_and_init(&described.url, &init).map_err(js_error)
    }
}

/// Reads a response body. A body that is not JSON is a transport failure
/// whatever the status; otherwise the status picks the shape.
pub fn decode_response(status_ok: bool, text: &str) -> Result<f64, PredictorError> {
    let body: PredictionBody = serde_json::from_str(text)
        .map_err(|e| PredictorError::transport(format!("Unexpected response body: {}", e)))?;
    body.into_result(status_ok)
}

impl PredictionService for FetchClient {
    async fn predict(&self, payload: &FormPayload) -> Result<f64, PredictorError> {
        let request = self.build_request(payload)?;
        let window = web_sys::window().ok_or_else(|| PredictorError::transport("no window"))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| PredictorError::transport("fetch did not resolve to a Response"))?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        decode_response(response.ok(), &text)
    }
}

fn js_error(err: JsValue) -> PredictorError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err));
    PredictorError::transport(detail)
}
