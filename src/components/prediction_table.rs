use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::prediction::PredictionResults;

#[derive(Properties, PartialEq)]
pub struct PredictionTableProps {
    pub results: Rc<PredictionResults>,
}

#[function_component(PredictionTable)]
pub fn prediction_table(props: &PredictionTableProps) -> Html {
    let all_years = use_state(|| true);

    let on_toggle = {
        let all_years = all_years.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            all_years.set(input.checked());
        })
    };

    let rows = props.results.visible(*all_years);

    html! {
        <div class="results">
            <h3>{"Predicted Energy Consumption"}</h3>
            <label class="checkbox">
                <input type="checkbox" checked={*all_years} onchange={on_toggle} />
                {"Show all years"}
            </label>
            if rows.is_empty() {
                <p class="empty">{"No predictions returned."}</p>
            } else {
                <table class="results-table">
                    <thead>
                        <tr>
                            <th>{"Country"}</th>
                            <th>{"Energy Type"}</th>
                            <th>{"Year"}</th>
                            <th>{"Prediction"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            rows.into_iter().map(|r| html! {
                                <tr>
                                    <td>{r.country.clone()}</td>
                                    <td>{r.energy_type.clone()}</td>
                                    <td>{r.year}</td>
                                    <td>{format!("{:.2} kWh", r.prediction)}</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            }
        </div>
    }
}
