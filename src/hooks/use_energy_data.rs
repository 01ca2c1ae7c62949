use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::energy_data::{EnergyData, EnergyFilter};
use crate::services::api::fetch_energy_data;

pub const ENERGY_DATA_FAILED: &str = "Failed to load energy data";

#[derive(Clone, PartialEq, Debug)]
pub enum EnergyDataState {
    Loading,
    Loaded(Rc<EnergyData>),
    Error(String),
}

/// Loads explorer rows for the current filter.
#[hook]
pub fn use_energy_data(filter: EnergyFilter) -> UseStateHandle<EnergyDataState> {
    let state = use_state(|| EnergyDataState::Loading);

    {
        let state = state.clone();

        use_effect_with(filter, move |filter| {
            let filter = filter.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(EnergyDataState::Loading);

            spawn_local(async move {
                match fetch_energy_data(&filter).await {
                    Ok(data) if !aborted_check.get() => {
                        state.set(EnergyDataState::Loaded(Rc::new(data)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(&format!("Energy data request failed: {e}"));
                        state.set(EnergyDataState::Error(ENERGY_DATA_FAILED.to_string()));
                    }
                    _ => {} // Filter changed while in flight
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
