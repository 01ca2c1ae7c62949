use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{Chart, FilterPanel, SeriesToggle};
use crate::hooks::use_energy_data::{EnergyDataState, use_energy_data};
use crate::models::energy_data::{CONSUMPTION_SOURCES, EnergyData, EnergyFilter};

/// Charts derived client-side from `/api/energy_data` rows.
#[function_component(ExplorerPage)]
pub fn explorer_page() -> Html {
    let filter = use_state(EnergyFilter::default);
    let data = use_energy_data((*filter).clone());

    let on_apply = {
        let filter = filter.clone();
        Callback::from(move |next: EnergyFilter| filter.set(next))
    };

    html! {
        <section class="page explorer">
            <h2>{"Energy Data Explorer"}</h2>
            <FilterPanel filter={(*filter).clone()} {on_apply} />
            {
                match &*data {
                    EnergyDataState::Loading => html! {
                        <div class="status loading">
                            <div class="spinner"></div>
                            <p>{"Loading data..."}</p>
                        </div>
                    },
                    EnergyDataState::Error(msg) => html! {
                        <div class="status error"><p>{msg}</p></div>
                    },
                    EnergyDataState::Loaded(data) if data.is_empty() => html! {
                        <p class="empty">{"No data for this filter."}</p>
                    },
                    EnergyDataState::Loaded(data) => html! {
                        <ExplorerCharts data={data.clone()} />
                    },
                }
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExplorerChartsProps {
    data: Rc<EnergyData>,
}

#[function_component(ExplorerCharts)]
fn explorer_charts(props: &ExplorerChartsProps) -> Html {
    let year = use_state(|| props.data.latest_year());
    let visible = use_state(|| {
        CONSUMPTION_SOURCES
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    });

    // New rows reset the pie to their latest year
    {
        let year = year.clone();
        use_effect_with(props.data.clone(), move |data| {
            year.set(data.latest_year());
        });
    }

    let on_year = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            year.set(target.value().parse().ok());
        })
    };

    let on_visible = {
        let visible = visible.clone();
        Callback::from(move |keys: Vec<String>| visible.set(keys))
    };

    let breakdown = (*year).and_then(|y| props.data.source_breakdown(y));
    let trends = Rc::new(props.data.consumption_trends(&visible));
    let split = Rc::new(props.data.renewable_split());
    let solar = Rc::new(props.data.solar_electricity());

    html! {
        <>
        <p class="row-count">{format!("{} yearly records", props.data.records().len())}</p>
        <div class="chart-grid">
            <div class="chart-card">
                <select class="year-selector" onchange={on_year} aria-label="Breakdown year">
                    {
                        props.data.years().into_iter().map(|y| {
                            let selected = *year == Some(y);
                            html! { <option value={y.to_string()} {selected}>{y}</option> }
                        }).collect::<Html>()
                    }
                </select>
                if let Some(spec) = breakdown {
                    <Chart spec={Rc::new(spec)} chart_id="explorer-breakdown" />
                }
            </div>
            <div class="chart-card">
                <SeriesToggle keys={CONSUMPTION_SOURCES} visible={(*visible).clone()} on_change={on_visible} />
                <Chart spec={trends} chart_id="explorer-trends" index={1} />
            </div>
            <div class="chart-card">
                <Chart spec={split} chart_id="explorer-split" index={2} />
            </div>
            <div class="chart-card">
                <Chart spec={solar} chart_id="explorer-solar" index={3} />
            </div>
        </div>
        </>
    }
}
