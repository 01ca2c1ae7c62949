use yew::prelude::*;

use crate::components::{ChartGrid, Status};
use crate::hooks::use_charts::use_charts;
use crate::models::page::EnergyKind;
use crate::services::endpoints::ChartSubject;

#[derive(Properties, PartialEq)]
pub struct EnergyPageProps {
    pub kind: EnergyKind,
}

/// Global view of one energy type.
#[function_component(EnergyPage)]
pub fn energy_page(props: &EnergyPageProps) -> Html {
    let subject = ChartSubject::Energy(props.kind);
    let title = subject.title();
    let charts = use_charts(subject);

    html! {
        <section class="page energy">
            <h2>{title}</h2>
            <Status state={(*charts).clone()} />
            if let Some(loaded) = charts.loaded() {
                <ChartGrid charts={loaded} id_prefix={props.kind.slug()} />
            }
        </section>
    }
}
