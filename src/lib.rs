pub mod api;
mod app;
mod components;
pub mod config;
pub mod dom;
pub mod error;
mod pages;
pub mod prediction;

use leptos::prelude::*;

pub use config::PredictorConfig;
pub use error::PredictorError;

use app::App;

/// Mount the predictor into the host page. If the mount element is missing
/// nothing is rendered and the problem is logged to the console.
pub fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = PredictorConfig::from_document(&document);

    match dom::required_element(&document, &config.mount_id) {
        Ok(root) => {
            leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
        }
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
        }
    }
}
