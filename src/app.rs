use leptos::prelude::*;

use crate::config::PredictorConfig;
use crate::pages::predictor::PredictorPage;

#[component]
pub fn App(config: PredictorConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div class="app-layout">
            <main class="content">
                <PredictorPage />
            </main>
        </div>
    }
}
