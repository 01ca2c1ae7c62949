use super::prediction::format_energy_type;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Series key for single-series consumption charts.
pub const CONSUMPTION: &str = "consumption";
/// Series key for the renewable half of a renewable/non-renewable split.
pub const RENEWABLE_ENERGY: &str = "renewable_energy";
/// Series key for the non-renewable half of a renewable/non-renewable split.
pub const NON_RENEWABLE_ENERGY: &str = "non_renewable_energy";

/// The kind of chart a `ChartSpec` renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Pie,
    Bar,
    Area,
}

impl ChartKind {
    /// Returns true for kinds plotted against a year axis.
    pub const fn is_time_series(&self) -> bool {
        !matches!(self, Self::Pie)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Area => "area",
        }
    }
}

/// One data point of a time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    pub year: i32,
    pub fields: BTreeMap<String, f64>,
}

impl ChartSeriesPoint {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, skipping absent values.
    pub fn with(mut self, key: &str, value: Option<f64>) -> Self {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }
}

/// One slice of a pie or bar breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDatum {
    pub name: String,
    pub value: f64,
}

impl CategoryDatum {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSeries {
    Points(Vec<ChartSeriesPoint>),
    Categories(Vec<CategoryDatum>),
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::Categories(categories) => categories.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A chart ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series: ChartSeries,
    /// Which point fields to plot, in legend order.
    pub series_keys: Vec<String>,
    /// Legend name for single-series charts.
    pub series_label: Option<String>,
}

impl ChartSpec {
    pub fn time_series(
        kind: ChartKind,
        title: impl Into<String>,
        points: Vec<ChartSeriesPoint>,
        series_keys: &[&str],
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            series: ChartSeries::Points(points),
            series_keys: series_keys.iter().map(|k| (*k).to_string()).collect(),
            series_label: None,
        }
    }

    pub fn pie(title: impl Into<String>, categories: Vec<CategoryDatum>) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: title.into(),
            series: ChartSeries::Categories(categories),
            series_keys: vec!["value".to_string()],
            series_label: None,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.series_label = label;
        self
    }

    pub fn points(&self) -> &[ChartSeriesPoint] {
        match &self.series {
            ChartSeries::Points(points) => points,
            ChartSeries::Categories(_) => &[],
        }
    }

    pub fn categories(&self) -> &[CategoryDatum] {
        match &self.series {
            ChartSeries::Categories(categories) => categories,
            ChartSeries::Points(_) => &[],
        }
    }

    /// Year axis labels for time-series charts.
    pub fn years(&self) -> Vec<String> {
        self.points().iter().map(|p| p.year.to_string()).collect()
    }

    /// Values of one series aligned with `years()`; missing fields become `None`.
    pub fn values(&self, key: &str) -> Vec<Option<f64>> {
        self.points().iter().map(|p| p.get(key)).collect()
    }

    /// Display name for a series key in the legend.
    pub fn series_name(&self, key: &str) -> String {
        match key {
            RENEWABLE_ENERGY => "Renewable Energy".to_string(),
            NON_RENEWABLE_ENERGY => "Non-Renewable Energy".to_string(),
            _ => match (&self.series_label, self.series_keys.len()) {
                (Some(label), 1) => label.clone(),
                _ => format_energy_type(key.trim_end_matches("_consumption")),
            },
        }
    }
}
