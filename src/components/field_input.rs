use leptos::prelude::*;

use crate::prediction::fields::format_number;
use crate::prediction::{format_slider_value, FieldKind, FieldSpec};

/// Renders one numeric form field. Scores listed in `tracked` become sliders
/// with a live value label; the rest are plain number inputs.
#[component]
pub fn FieldInput(
    spec: &'static FieldSpec,
    /// Raw text value, as the form would submit it
    value: RwSignal<String>,
    tracked: bool,
) -> impl IntoView {
    match (spec.kind, tracked) {
        (FieldKind::Rating, _) => view! { <RatingSelect spec=spec value=value /> }.into_any(),
        (FieldKind::Score, true) => view! { <SliderField spec=spec value=value /> }.into_any(),
        (FieldKind::Score, false) => view! { <NumberField spec=spec value=value /> }.into_any(),
    }
}

/// Range input paired with a `<field>_value` label. The label is formatted on
/// first render and again on every `input` event.
#[component]
pub fn SliderField(spec: &'static FieldSpec, value: RwSignal<String>) -> impl IntoView {
    let step = spec.step_attr();
    let label_step = step.clone();
    let formatted = move || format_slider_value(Some(&label_step), &value.get());

    view! {
        <div class="form-group slider-field">
            <label for=spec.name>
                {spec.label} ": "
                <span id=spec.value_label_id() class="slider-value">{formatted}</span>
            </label>
            <input
                type="range"
                id=spec.name
                name=spec.name
                class="input-range"
                min=format_number(spec.min)
                max=format_number(spec.max)
                step=step
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn NumberField(spec: &'static FieldSpec, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=spec.name>{spec.label}</label>
            <input
                type="number"
                id=spec.name
                name=spec.name
                class="input"
                min=format_number(spec.min)
                max=format_number(spec.max)
                step=spec.step_attr()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn RatingSelect(spec: &'static FieldSpec, value: RwSignal<String>) -> impl IntoView {
    let initial = value.get_untracked();
    let options = (spec.min as u8..=spec.max as u8)
        .map(|rating| {
            let text = rating.to_string();
            let label = text.clone();
            let selected = text == initial;
            view! { <option value=text selected=selected>{label}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="form-group">
            <label for=spec.name>{spec.label}</label>
            <select
                id=spec.name
                name=spec.name
                class="input"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options}
            </select>
        </div>
    }
}
