use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, Label, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart::{ChartKind, ChartSpec};
use crate::utils::debounce::on_resize_settled;

/// Series colours, cycled by chart position.
pub const PALETTE: &[&str] = &[
    "#2e7d32", "#d32f2f", "#1976d2", "#ed6c02", "#9c27b0", "#ffeb3b",
];

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub spec: Rc<ChartSpec>,
    /// DOM id of the render target; must be unique on the page.
    pub chart_id: AttrValue,
    /// Position on the page, used to offset the palette.
    #[prop_or(0)]
    pub index: usize,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.spec.clone(), props.chart_id.clone(), props.index, container_ref),
            |(spec, chart_id, index, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, chart_id, spec, *index);

                    let spec = spec.clone();
                    let chart_id = chart_id.clone();
                    let index = *index;
                    on_resize_settled(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &chart_id, &spec, index);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.chart_id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart_id: &str, spec: &ChartSpec, index: usize) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(spec, index);
    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

/// Rotates the palette so neighbouring charts start on different colours.
fn palette_from(index: usize) -> Vec<&'static str> {
    (0..PALETTE.len())
        .map(|i| PALETTE[(index + i) % PALETTE.len()])
        .collect()
}

fn palette_colors(index: usize) -> Vec<Color> {
    palette_from(index).into_iter().map(Color::from).collect()
}

/// Builds the ECharts option for a chart spec.
pub fn build_chart(spec: &ChartSpec, index: usize) -> CharmingChart {
    let base = CharmingChart::new()
        .title(
            Title::new()
                .text(spec.title.as_str())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color("#1f2937")),
        )
        .legend(Legend::new().bottom("0"));

    match spec.kind {
        ChartKind::Pie => build_pie(base, spec),
        _ => build_time_series(base, spec, index),
    }
}

fn build_pie(chart: CharmingChart, spec: &ChartSpec) -> CharmingChart {
    let data: Vec<(f64, &str)> = spec
        .categories()
        .iter()
        .map(|c| (c.value, c.name.as_str()))
        .collect();

    chart
        .color(palette_colors(0))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Pie::new()
                .name(spec.title.as_str())
                .radius("60%")
                .label(Label::new().formatter("{b}: {c}"))
                .data(data),
        )
}

fn build_time_series(chart: CharmingChart, spec: &ChartSpec, index: usize) -> CharmingChart {
    let mut chart = chart
        .color(palette_colors(index))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(spec.years())
                .axis_label(AxisLabel::new().color("#6b7280")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color("#6b7280"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color("#e5e7eb")
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for key in &spec.series_keys {
        let name = spec.series_name(key);
        // NaN is drawn as a gap
        let values: Vec<f64> = spec
            .values(key)
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        chart = match spec.kind {
            ChartKind::Bar => chart.series(Bar::new().name(name).data(values)),
            ChartKind::Area => chart.series(
                Line::new()
                    .name(name)
                    .stack("total")
                    .area_style(AreaStyle::new())
                    .data(values),
            ),
            _ => chart.series(Line::new().name(name).data(values)),
        };
    }

    chart
}
