use yew::prelude::*;

use crate::components::{PredictionForm, PredictionTable};
use crate::hooks::use_predictions::{PredictionState, use_predictions};

#[function_component(PredictionPage)]
pub fn prediction_page() -> Html {
    let predictions = use_predictions();

    html! {
        <section class="page prediction">
            <h2>{"Energy Consumption Prediction"}</h2>
            <PredictionForm
                on_submit={predictions.submit.clone()}
                disabled={predictions.state == PredictionState::Loading}
            />
            {
                match &predictions.state {
                    PredictionState::Idle => html! {},
                    PredictionState::Loading => html! {
                        <div class="status loading">
                            <div class="spinner"></div>
                            <p>{"Fetching predictions..."}</p>
                        </div>
                    },
                    PredictionState::Loaded(results) => html! {
                        <PredictionTable results={results.clone()} />
                    },
                    PredictionState::Error(msg) => html! {
                        <p class="status error">{msg}</p>
                    },
                }
            }
        </section>
    }
}
