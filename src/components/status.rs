use chrono::Local;
use yew::prelude::*;

use crate::hooks::use_charts::ChartsState;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: ChartsState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        ChartsState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading data..."}</p>
            </div>
        },
        ChartsState::Loaded { charts, fetched_at } => {
            let time = fetched_at.with_timezone(&Local).format("%H:%M:%S");
            html! {
                <div class="status success">
                    <p>{format!("✅ {} charts loaded at {time}", charts.len())}</p>
                </div>
            }
        }
        ChartsState::Error(msg) => html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg}</p>
            </div>
        },
    }
}
