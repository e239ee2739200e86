use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchClient;
use crate::components::field_input::FieldInput;
use crate::components::result_panel::ResultPanel;
use crate::config::PredictorConfig;
use crate::prediction::{self, BusyState, FormPayload, Outcome, ResultDisplay, SubmitState, FIELDS};

impl BusyState for RwSignal<SubmitState> {
    fn set_state(&self, state: SubmitState) {
        self.set(state);
    }
}

#[component]
pub fn PredictorPage() -> impl IntoView {
    let config = use_context::<PredictorConfig>().unwrap_or_default();

    let values: Vec<_> = FIELDS
        .iter()
        .map(|spec| (spec, RwSignal::new(spec.default_text())))
        .collect();
    let research = RwSignal::new(false);
    let state = RwSignal::new(SubmitState::Idle);
    let (outcome, set_outcome) = signal::<Option<Outcome>>(None);
    let (last_display, set_last_display) = signal::<Option<ResultDisplay>>(None);

    let form_values = values.clone();
    let submit_config = config.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entries: Vec<(&str, String)> = form_values
            .iter()
            .map(|(spec, value)| (spec.name, value.get_untracked()))
            .collect();
        let payload = FormPayload::build(
            entries.iter().map(|(name, raw)| (*name, raw.as_str())),
            &submit_config.research_field,
            research.get_untracked(),
        );

        let endpoint = submit_config.endpoint.clone();
        spawn_local(async move {
            let client = FetchClient::new(endpoint);
            let outcome = prediction::submit(&client, &state, payload).await;
            if let Some(detail) = outcome.diagnostic() {
                web_sys::console::error_1(&format!("Fetch error: {}", detail).into());
            }
            if let Some(display) = outcome.display() {
                set_last_display.set(Some(display.clone()));
            }
            set_outcome.set(Some(outcome));
        });
    };

    let fields = values
        .into_iter()
        .map(|(spec, value)| {
            let tracked = config.is_tracked(spec.name);
            view! { <FieldInput spec=spec value=value tracked=tracked /> }
        })
        .collect::<Vec<_>>();

    let is_busy = move || state.get().is_busy();
    let PredictorConfig {
        idle_label,
        busy_label,
        ..
    } = config;

    view! {
        <div class="page predictor-page">
            <h2>"Graduate Admission Predictor"</h2>
            <p class="page-description">
                "Enter your scores to estimate your chance of admission."
            </p>

            <form id="prediction-form" class="prediction-form" on:submit=on_submit>
                {fields}

                <div class="form-group toggle-field">
                    <label for="research_toggle">
                        <input
                            type="checkbox"
                            id="research_toggle"
                            class="toggle"
                            prop:checked=move || research.get()
                            on:change=move |ev| research.set(event_target_checked(&ev))
                        />
                        " Research Experience"
                    </label>
                </div>

                <button id="predict-btn" type="submit" class="btn btn-primary" disabled=is_busy>
                    {move || if is_busy() { busy_label.clone() } else { idle_label.clone() }}
                </button>
                <div
                    id="loading-spinner"
                    class="loading-spinner"
                    style:display=move || if is_busy() { "block" } else { "none" }
                ></div>
            </form>

            <ResultPanel outcome=outcome last_display=last_display />
        </div>
    }
}
