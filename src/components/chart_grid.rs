use std::rc::Rc;
use yew::prelude::*;

use super::chart::Chart;
use crate::models::chart::ChartSpec;

#[derive(Properties, PartialEq)]
pub struct ChartGridProps {
    pub charts: Rc<Vec<ChartSpec>>,
    /// Prefix of the chart element ids, unique per page.
    pub id_prefix: AttrValue,
}

/// Lays out the charts in the order their requests were issued.
#[function_component(ChartGrid)]
pub fn chart_grid(props: &ChartGridProps) -> Html {
    if props.charts.is_empty() {
        return html! {
            <p class="empty">{"No charts to display."}</p>
        };
    }

    html! {
        <div class="chart-grid">
            {
                props.charts.iter().enumerate().map(|(index, spec)| {
                    let chart_id = format!("{}-chart-{index}", props.id_prefix);
                    html! {
                        <div class="chart-card" key={chart_id.clone()}>
                            <Chart spec={Rc::new(spec.clone())} chart_id={chart_id} {index} />
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
