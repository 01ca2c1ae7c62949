use super::chart::{
    CategoryDatum, ChartKind, ChartSeriesPoint, ChartSpec, NON_RENEWABLE_ENERGY, RENEWABLE_ENERGY,
};
use super::error::AppError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Consumption columns plotted by the explorer, in legend order.
pub const CONSUMPTION_SOURCES: &[&str] = &[
    "renewables_consumption",
    "coal_consumption",
    "biofuel_consumption",
    "fossil_fuel_consumption",
    "gas_consumption",
    "hydro_consumption",
    "nuclear_consumption",
    "oil_consumption",
    "wind_consumption",
    "solar_consumption",
];

pub const RENEWABLE_SOURCES: &[&str] = &[
    "wind_consumption",
    "solar_consumption",
    "hydro_consumption",
    "biofuel_consumption",
];

pub const NON_RENEWABLE_SOURCES: &[&str] = &[
    "coal_consumption",
    "oil_consumption",
    "gas_consumption",
    "nuclear_consumption",
    "fossil_fuel_consumption",
];

pub const SOLAR_ELECTRICITY: &str = "solar_electricity";

/// Filter panel inputs for `/api/energy_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyFilter {
    pub country: String,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl Default for EnergyFilter {
    fn default() -> Self {
        Self {
            country: crate::config::Config::EXPLORER_COUNTRY.to_string(),
            start_year: None,
            end_year: None,
        }
    }
}

/// Parses a year text input; blank or non-numeric input means "no bound".
pub fn parse_year(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

/// One country-year row with its `<source>_consumption` columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnergyRecord {
    pub year: i32,
    #[serde(default)]
    pub country: String,
    #[serde(flatten)]
    pub columns: BTreeMap<String, Value>,
}

impl EnergyRecord {
    pub fn value(&self, column: &str) -> Option<f64> {
        self.columns.get(column).and_then(Value::as_f64)
    }

    fn sum(&self, columns: &[&str]) -> f64 {
        columns.iter().filter_map(|c| self.value(c)).sum()
    }
}

#[derive(Deserialize, Debug)]
struct EnergyDataResponse {
    data: Vec<EnergyRecord>,
}

/// Rows returned by `/api/energy_data`, in response order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnergyData {
    records: Vec<EnergyRecord>,
}

impl EnergyData {
    pub fn new(records: Vec<EnergyRecord>) -> Self {
        Self { records }
    }

    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let response: EnergyDataResponse = serde_json::from_value(value)
            .map_err(|e| AppError::DataError(format!("Failed to parse energy data: {e}")))?;
        Ok(Self::new(response.data))
    }

    pub fn records(&self) -> &[EnergyRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Default year for the breakdown pie.
    pub fn latest_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// Consumption by source for one year. Sources with no or zero consumption are left out.
    pub fn source_breakdown(&self, year: i32) -> Option<ChartSpec> {
        let record = self.records.iter().find(|r| r.year == year)?;

        let categories = CONSUMPTION_SOURCES
            .iter()
            .map(|source| CategoryDatum::new(source_name(source), record.value(source).unwrap_or(0.0)))
            .filter(|c| c.value > 0.0)
            .collect();

        Some(ChartSpec::pie(
            format!("Energy Consumption by Source ({year})"),
            categories,
        ))
    }

    /// One line per visible consumption source.
    pub fn consumption_trends(&self, visible: &[String]) -> ChartSpec {
        let keys: Vec<&str> = CONSUMPTION_SOURCES
            .iter()
            .copied()
            .filter(|source| visible.iter().any(|v| v == source))
            .collect();

        let points = self
            .records
            .iter()
            .map(|record| {
                keys.iter().fold(ChartSeriesPoint::new(record.year), |point, key| {
                    point.with(key, record.value(key))
                })
            })
            .collect();

        ChartSpec::time_series(ChartKind::Line, "Energy Consumption Trends", points, &keys)
    }

    /// Stacked renewable vs non-renewable totals; absent columns count as zero.
    pub fn renewable_split(&self) -> ChartSpec {
        let points = self
            .records
            .iter()
            .map(|record| {
                ChartSeriesPoint::new(record.year)
                    .with(RENEWABLE_ENERGY, Some(record.sum(RENEWABLE_SOURCES)))
                    .with(NON_RENEWABLE_ENERGY, Some(record.sum(NON_RENEWABLE_SOURCES)))
            })
            .collect();

        ChartSpec::time_series(
            ChartKind::Area,
            "Renewable vs Non-Renewable Energy",
            points,
            &[RENEWABLE_ENERGY, NON_RENEWABLE_ENERGY],
        )
    }

    pub fn solar_electricity(&self) -> ChartSpec {
        let points = self
            .records
            .iter()
            .map(|record| {
                ChartSeriesPoint::new(record.year)
                    .with(SOLAR_ELECTRICITY, record.value(SOLAR_ELECTRICITY))
            })
            .collect();

        ChartSpec::time_series(
            ChartKind::Line,
            "Solar Electricity Generation",
            points,
            &[SOLAR_ELECTRICITY],
        )
        .with_label(Some("Solar Electricity".to_string()))
    }
}

/// Pie label for a consumption column: `fossil_fuel_consumption` → `fossil fuel`.
pub fn source_name(column: &str) -> String {
    column.replace("_consumption", "").replacen('_', " ", 1)
}
