use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::country_selector::CountrySelector;
use crate::config::Config;
use crate::models::prediction::{
    EnergySelection, PREDICTION_ENERGY_TYPES, PredictionQuery, clamp_prediction_year,
    format_energy_type,
};

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub on_submit: Callback<PredictionQuery>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let country = use_state(|| Config::PREDICTION_COUNTRY.to_string());
    let year = use_state(|| Config::MIN_PREDICTION_YEAR);
    let energy = use_state(|| Config::PREDICTION_ENERGY.to_string());
    let all_types = use_state(|| true);

    let on_country = {
        let country = country.clone();
        Callback::from(move |value: String| country.set(value))
    };

    let on_year = {
        let year = year.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().trim().parse::<i32>() {
                year.set(clamp_prediction_year(value));
            }
        })
    };

    let on_energy = {
        let energy = energy.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            energy.set(target.value());
        })
    };

    let on_all_types = {
        let all_types = all_types.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            all_types.set(input.checked());
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        let country = country.clone();
        let year = year.clone();
        let energy = energy.clone();
        let all_types = all_types.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let selection = if *all_types {
                EnergySelection::All
            } else {
                EnergySelection::Only((*energy).clone())
            };
            on_submit.emit(PredictionQuery::new((*country).clone(), *year, selection));
        })
    };

    html! {
        <form class="prediction-form" {onsubmit}>
            <label>
                {"Country"}
                <CountrySelector
                    countries={Config::PREDICTION_COUNTRIES}
                    selected={Some((*country).clone())}
                    on_change={on_country}
                    label="Country"
                />
            </label>
            <label>
                {"Year"}
                <input
                    type="number"
                    min={Config::MIN_PREDICTION_YEAR.to_string()}
                    value={year.to_string()}
                    oninput={on_year}
                    required=true
                />
            </label>
            <label>
                {"Energy Type"}
                <select onchange={on_energy} disabled={*all_types}>
                    {
                        PREDICTION_ENERGY_TYPES.iter().map(|&kind| {
                            let selected = *energy == kind;
                            html! {
                                <option value={kind} {selected}>{format_energy_type(kind)}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </label>
            <label class="checkbox">
                <input type="checkbox" checked={*all_types} onchange={on_all_types} />
                {"Show all predictions (all energy types)"}
            </label>
            <button type="submit" disabled={props.disabled}>{"Get Prediction"}</button>
        </form>
    }
}
