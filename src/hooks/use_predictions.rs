use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::prediction::{PredictionQuery, PredictionResults};
use crate::services::api::fetch_predictions;
use crate::services::batch::BatchGeneration;

/// Message shown for any failed prediction request.
pub const PREDICTION_FAILED: &str = "Error fetching prediction data. Please try again.";

#[derive(Clone, PartialEq, Debug)]
pub enum PredictionState {
    Idle,
    Loading,
    Loaded(Rc<PredictionResults>),
    /// Previous results are cleared on failure.
    Error(String),
}

impl PredictionState {
    pub fn results(&self) -> Option<&Rc<PredictionResults>> {
        match self {
            Self::Loaded(results) => Some(results),
            _ => None,
        }
    }
}

/// Handle returned by `use_predictions`
#[derive(Clone, PartialEq)]
pub struct PredictionHandle {
    pub state: PredictionState,
    pub submit: Callback<PredictionQuery>,
}

#[hook]
pub fn use_predictions() -> PredictionHandle {
    let state = use_state(|| PredictionState::Idle);
    let generation = use_state(BatchGeneration::new);

    let submit = {
        let state = state.clone();
        let generation = (*generation).clone();

        Callback::from(move |query: PredictionQuery| {
            let state = state.clone();
            let generation = generation.clone();
            let ticket = generation.begin();

            state.set(PredictionState::Loading);

            spawn_local(async move {
                let result = fetch_predictions(&query).await;
                if !generation.is_current(ticket) {
                    return;
                }

                match result {
                    Ok(records) => state.set(PredictionState::Loaded(Rc::new(
                        PredictionResults::new(records, query.year),
                    ))),
                    Err(e) => {
                        gloo::console::error!(&format!("Prediction request failed: {e}"));
                        state.set(PredictionState::Error(PREDICTION_FAILED.to_string()));
                    }
                }
            });
        })
    };

    PredictionHandle {
        state: (*state).clone(),
        submit,
    }
}
