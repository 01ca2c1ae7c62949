use super::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Energy types the prediction model is trained on, as sent in the `energy` parameter.
pub const PREDICTION_ENERGY_TYPES: &[&str] = &[
    "wind",
    "solar",
    "biofuel",
    "hydro",
    "renewables",
    "gas",
    "coal",
    "fossil_fuel",
];

/// Which energy types a prediction request covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnergySelection {
    #[default]
    All,
    Only(String),
}

/// Inputs of the prediction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionQuery {
    pub country: String,
    pub year: i32,
    pub energy: EnergySelection,
}

impl PredictionQuery {
    pub fn new(country: impl Into<String>, year: i32, energy: EnergySelection) -> Self {
        Self {
            country: country.into(),
            year: clamp_prediction_year(year),
            energy,
        }
    }
}

/// Predictions are only offered for years the model has not seen.
pub fn clamp_prediction_year(year: i32) -> i32 {
    year.max(crate::config::Config::MIN_PREDICTION_YEAR)
}

/// One predicted consumption value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub energy_type: String,
    pub year: i32,
    pub prediction: f64,
}

impl PredictionRecord {
    fn formatted(mut self) -> Self {
        self.energy_type = format_energy_type(&self.energy_type);
        self
    }
}

/// Turns an energy type key into a display label: `fossil_fuel` → `Fossil Fuel`.
pub fn format_energy_type(energy_type: &str) -> String {
    energy_type
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes a `/predict_consumption` body: a flat array of records.
pub fn parse_single(value: Value) -> Result<Vec<PredictionRecord>, AppError> {
    let records: Vec<PredictionRecord> = serde_json::from_value(value)
        .map_err(|e| AppError::DataError(format!("Failed to parse predictions: {e}")))?;

    Ok(records.into_iter().map(PredictionRecord::formatted).collect())
}

/// Decodes a `/predict_all_consumptions` body: energy type → records, flattened in response order.
/// Records without an `energy_type` take the key they are listed under.
pub fn parse_all(value: Value) -> Result<Vec<PredictionRecord>, AppError> {
    let grouped: Map<String, Value> = serde_json::from_value(value)
        .map_err(|e| AppError::DataError(format!("Failed to parse predictions: {e}")))?;

    let mut flattened = Vec::new();
    for (energy_type, records) in grouped {
        let records: Vec<PredictionRecord> = serde_json::from_value(records).map_err(|e| {
            AppError::DataError(format!("Failed to parse {energy_type} predictions: {e}"))
        })?;
        flattened.extend(records.into_iter().map(|mut record| {
            if record.energy_type.is_empty() {
                record.energy_type.clone_from(&energy_type);
            }
            record.formatted()
        }));
    }

    Ok(flattened)
}

/// Predictions as shown in the results table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionResults {
    pub records: Vec<PredictionRecord>,
    pub requested_year: i32,
}

impl PredictionResults {
    pub fn new(records: Vec<PredictionRecord>, requested_year: i32) -> Self {
        Self {
            records,
            requested_year,
        }
    }

    /// Rows to display; intermediate years are hidden unless `all_years` is set.
    pub fn visible(&self, all_years: bool) -> Vec<&PredictionRecord> {
        self.records
            .iter()
            .filter(|r| all_years || r.year == self.requested_year)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_energy_type() {
        assert_eq!(format_energy_type("fossil_fuel"), "Fossil Fuel");
        assert_eq!(format_energy_type("wind"), "Wind");
        assert_eq!(format_energy_type("wind_consumption"), "Wind Consumption");
        assert_eq!(format_energy_type(""), "");
    }

    #[test]
    fn test_clamp_prediction_year() {
        assert_eq!(clamp_prediction_year(2019), 2025);
        assert_eq!(clamp_prediction_year(2030), 2030);
        assert_eq!(PredictionQuery::new("France", 2000, EnergySelection::All).year, 2025);
    }

    #[test]
    fn test_parse_single() {
        let body = json!([
            {"country": "France", "energy_type": "gas_consumption", "year": 2025, "prediction": 1.5}
        ]);

        let records = parse_single(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].energy_type, "Gas Consumption");
    }

    #[test]
    fn test_parse_all_keeps_response_order() {
        let body = json!({
            "wind": [{"country": "Germany", "energy_type": "wind", "year": 2025, "prediction": 1.0}],
            "coal": [{"country": "Germany", "energy_type": "coal", "year": 2025, "prediction": 2.0}]
        });

        let records = parse_all(body).unwrap();
        let types: Vec<_> = records.iter().map(|r| r.energy_type.as_str()).collect();
        assert_eq!(types, vec!["Wind", "Coal"]);
    }

    #[test]
    fn test_parse_all_tags_records_with_their_key() {
        let records = parse_all(json!({"fossil_fuel": [{"year": 2025, "prediction": 1.0}]})).unwrap();

        assert_eq!(records[0].energy_type, "Fossil Fuel");
        assert_eq!(records[0].country, "");
    }

    #[test]
    fn test_parse_all_rejects_flat_array() {
        assert!(parse_all(json!([])).is_err());
    }

    #[test]
    fn test_visible_filters_by_requested_year() {
        let record = |year| PredictionRecord {
            country: "Germany".to_string(),
            energy_type: "Wind".to_string(),
            year,
            prediction: 1.0,
        };
        let results = PredictionResults::new(vec![record(2024), record(2025), record(2026)], 2026);

        assert_eq!(results.visible(true).len(), 3);
        assert_eq!(results.visible(false).len(), 1);
        assert_eq!(results.visible(false)[0].year, 2026);
    }
}
