use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::country_selector::CountrySelector;
use crate::config::Config;
use crate::models::energy_data::{EnergyFilter, parse_year};

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filter: EnergyFilter,
    pub on_apply: Callback<EnergyFilter>,
}

/// Edits a draft filter and emits it on "Apply Filters".
#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let country = use_state(|| props.filter.country.clone());
    let start_year = use_state(|| year_text(props.filter.start_year));
    let end_year = use_state(|| year_text(props.filter.end_year));

    let on_country = {
        let country = country.clone();
        Callback::from(move |value: String| country.set(value))
    };

    let on_start = text_setter(&start_year);
    let on_end = text_setter(&end_year);

    let on_apply = {
        let on_apply = props.on_apply.clone();
        let country = country.clone();
        let start_year = start_year.clone();
        let end_year = end_year.clone();
        Callback::from(move |_: MouseEvent| {
            on_apply.emit(EnergyFilter {
                country: (*country).clone(),
                start_year: parse_year(&start_year),
                end_year: parse_year(&end_year),
            });
        })
    };

    html! {
        <div class="filter-panel">
            <h2>{"Filter Options"}</h2>
            <div class="filter-fields">
                <label>
                    {"Country"}
                    <CountrySelector
                        countries={Config::COUNTRIES}
                        selected={Some((*country).clone())}
                        on_change={on_country}
                        label="Country"
                    />
                </label>
                <label>
                    {"Start Year"}
                    <input type="number" placeholder="e.g., 2000" value={(*start_year).clone()} oninput={on_start} />
                </label>
                <label>
                    {"End Year"}
                    <input type="number" placeholder="e.g., 2020" value={(*end_year).clone()} oninput={on_end} />
                </label>
            </div>
            <button class="apply" onclick={on_apply}>{"Apply Filters"}</button>
        </div>
    }
}

fn year_text(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

fn text_setter(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}
