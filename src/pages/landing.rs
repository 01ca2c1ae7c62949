use yew::prelude::*;

use crate::components::{ChartGrid, CountrySelector, Status};
use crate::config::Config;
use crate::hooks::use_charts::use_charts;
use crate::models::page::Page;
use crate::services::endpoints::ChartSubject;

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub on_navigate: Callback<Page>,
}

/// World overview plus the entry point into a country's page.
#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let subject = ChartSubject::World;
    let title = subject.title();
    let charts = use_charts(subject);

    let on_country = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |country: String| on_navigate.emit(Page::Country(Some(country))))
    };

    html! {
        <section class="page landing">
            <div class="country-picker">
                <p>{"Pick a country to see its energy mix"}</p>
                <CountrySelector countries={Config::COUNTRIES} on_change={on_country} />
            </div>
            <h2>{title}</h2>
            <Status state={(*charts).clone()} />
            if let Some(loaded) = charts.loaded() {
                <ChartGrid charts={loaded} id_prefix="world" />
            }
        </section>
    }
}

