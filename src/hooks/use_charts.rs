use chrono::{DateTime, Utc};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::chart::ChartSpec;
use crate::services::api::EnergyClient;
use crate::services::batch::{BatchGeneration, BatchOutcome, FETCH_FAILED, load_charts};
use crate::services::endpoints::ChartSubject;

#[derive(Clone, PartialEq, Debug)]
pub enum ChartsState {
    Loading,
    Loaded {
        charts: Rc<Vec<ChartSpec>>,
        fetched_at: DateTime<Utc>,
    },
    /// Every request failed; no charts are shown.
    Error(String),
}

impl ChartsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn charts(&self) -> &[ChartSpec] {
        match self {
            Self::Loaded { charts, .. } => charts,
            _ => &[],
        }
    }

    /// Shared handle to the loaded charts, for passing down as props.
    pub fn loaded(&self) -> Option<Rc<Vec<ChartSpec>>> {
        match self {
            Self::Loaded { charts, .. } => Some(charts.clone()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<BatchOutcome> for ChartsState {
    fn from(outcome: BatchOutcome) -> Self {
        match outcome.error {
            Some(msg) => Self::Error(msg),
            None => Self::Loaded {
                charts: Rc::new(outcome.charts),
                fetched_at: Utc::now(),
            },
        }
    }
}

/// Fetches every chart for `subject`, refetching whenever it changes.
#[hook]
pub fn use_charts(subject: ChartSubject) -> UseStateHandle<ChartsState> {
    let state = use_state(|| ChartsState::Loading);
    let generation = use_state(BatchGeneration::new);

    {
        let state = state.clone();
        let generation = (*generation).clone();

        use_effect_with(subject, move |subject| {
            let endpoints = subject.endpoints();
            let ticket = generation.begin();
            let cleanup_generation = generation.clone();

            state.set(ChartsState::Loading);
            gloo::console::log!(&format!("Fetching {} charts", endpoints.len()));

            spawn_local(async move {
                let outcome = match EnergyClient::new() {
                    Ok(client) => load_charts(&client, &endpoints).await,
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to create client: {e}"));
                        BatchOutcome {
                            error: Some(FETCH_FAILED.to_string()),
                            ..BatchOutcome::default()
                        }
                    }
                };

                if !generation.is_current(ticket) {
                    gloo::console::log!("Discarding results of a superseded batch");
                    return;
                }

                for failure in &outcome.failures {
                    gloo::console::warn!(&format!("Request failed: {failure}"));
                }
                for dropped in &outcome.dropped {
                    gloo::console::warn!(&format!("Unrecognized payload dropped: {dropped}"));
                }

                gloo::console::log!(&format!(
                    "Batch settled: {} of {} charts loaded",
                    outcome.charts.len(),
                    endpoints.len()
                ));
                state.set(outcome.into());
            });

            move || cleanup_generation.invalidate()
        });
    }

    state
}
