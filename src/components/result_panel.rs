use leptos::prelude::*;

use crate::dom::set_status_bar_width;
use crate::prediction::{Outcome, ResultDisplay};

const PLACEHOLDER_OUTPUT: &str = "--";
const PLACEHOLDER_MESSAGE: &str = "Adjust your profile and press Calculate Chance.";

#[component]
pub fn ResultPanel(
    /// Latest settled submission, if any
    outcome: ReadSignal<Option<Outcome>>,
    /// Latest successful prediction. Failures leave the bar as it was.
    last_display: ReadSignal<Option<ResultDisplay>>,
) -> impl IntoView {
    // Starts at 0% and follows successful predictions only
    Effect::new(move |_| {
        let width = last_display.with(|d| d.as_ref().map_or(0, |d| d.bar_width));
        set_status_bar_width(width);
    });

    let bar_color = move || {
        last_display.with(|d| d.as_ref().map(ResultDisplay::color).unwrap_or_default())
    };
    let output_color = move || outcome.with(|o| o.as_ref().map(Outcome::color).unwrap_or_default());
    let output_text = move || {
        outcome.with(|o| {
            o.as_ref()
                .map(Outcome::output_text)
                .unwrap_or_else(|| PLACEHOLDER_OUTPUT.to_string())
        })
    };
    let message = move || {
        outcome.with(|o| {
            o.as_ref()
                .map(Outcome::message)
                .unwrap_or_else(|| PLACEHOLDER_MESSAGE.to_string())
        })
    };

    view! {
        <section class="result-panel">
            <h3>"Predicted Chance of Admission"</h3>
            <p id="prediction-output" class="prediction-output" style:color=output_color>
                {output_text}
            </p>
            <div class="status-track">
                <div id="status-bar" class="status-bar" style:background-color=bar_color></div>
            </div>
            <p id="result-message" class="result-message">{message}</p>
        </section>
    }
}
