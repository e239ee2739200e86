use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::PredictorError;

/// CSS variable the host stylesheet uses for the status bar's width.
pub const STATUS_BAR_WIDTH_VAR: &str = "--status-bar-width";

/// Looks up an element the host page must provide.
pub fn required_element(document: &Document, id: &str) -> Result<HtmlElement, PredictorError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PredictorError::MissingElement(id.to_string()))
}

/// Write the status bar width (in percent) onto `<html>` so the stylesheet
/// can pick it up.
pub fn set_status_bar_width(percent: u8) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc
                .document_element()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = html
                    .style()
                    .set_property(STATUS_BAR_WIDTH_VAR, &format!("{}%", percent));
            }
        }
    }
}
