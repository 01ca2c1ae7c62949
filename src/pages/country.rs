use yew::prelude::*;

use crate::components::{ChartGrid, CountrySelector, Status};
use crate::config::Config;
use crate::hooks::use_charts::use_charts;
use crate::models::page::Page;
use crate::services::endpoints::ChartSubject;

#[derive(Properties, PartialEq)]
pub struct CountryPageProps {
    pub country: AttrValue,
    pub on_navigate: Callback<Page>,
}

#[function_component(CountryPage)]
pub fn country_page(props: &CountryPageProps) -> Html {
    let subject = ChartSubject::Country(props.country.to_string());
    let title = subject.title();
    let charts = use_charts(subject);

    let on_country = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |country: String| on_navigate.emit(Page::Country(Some(country))))
    };

    html! {
        <section class="page country">
            <div class="page-header">
                <h2>{title}</h2>
                <CountrySelector
                    countries={Config::COUNTRIES}
                    selected={Some(props.country.to_string())}
                    on_change={on_country}
                />
            </div>
            <Status state={(*charts).clone()} />
            if let Some(loaded) = charts.loaded() {
                <ChartGrid charts={loaded} id_prefix="country" />
            }
        </section>
    }
}
