use super::{chart::ChartKind, error::AppError};
use serde::Deserialize;
use serde_json::Value;

/// Loose view of the `data` object of a response body. Every field may be absent.
#[derive(Deserialize, Debug, Default)]
struct RawData {
    year: Option<Vec<Option<i32>>>,
    consumption: Option<Vec<Option<f64>>>,
    renewable_energy: Option<Vec<Option<f64>>>,
    non_renewable_energy: Option<Vec<Option<f64>>>,
    energy_sources: Option<Vec<String>>,
}

/// The chart payload shapes the backend is known to return.
#[derive(Debug, Clone, PartialEq)]
pub enum EnergyPayload {
    /// `{year, renewable_energy, non_renewable_energy}`
    RenewableSplit {
        years: Vec<Option<i32>>,
        renewable: Vec<Option<f64>>,
        non_renewable: Vec<Option<f64>>,
    },
    /// `{year, consumption}`
    Consumption {
        years: Vec<Option<i32>>,
        consumption: Vec<Option<f64>>,
    },
    /// `{energy_sources, consumption}`
    SourceBreakdown {
        sources: Vec<String>,
        consumption: Vec<Option<f64>>,
    },
}

impl EnergyPayload {
    /// Decodes a response body for a chart of the given kind.
    ///
    /// A renewable split always wins. Time-series charts then look for a
    /// yearly `consumption` array, pie charts for `energy_sources`.
    pub fn decode(value: &Value, kind: ChartKind) -> Result<Self, AppError> {
        let data = match value.get("data") {
            Some(data @ Value::Object(_)) => RawData::deserialize(data)
                .map_err(|e| AppError::DataError(format!("Malformed payload: {e}")))?,
            None | Some(Value::Null) => {
                return Err(AppError::DataError("Payload has no data field".to_string()));
            }
            Some(_) => {
                return Err(AppError::DataError("Payload data is not an object".to_string()));
            }
        };

        let RawData {
            year,
            consumption,
            renewable_energy,
            non_renewable_energy,
            energy_sources,
        } = data;

        if let (Some(years), Some(renewable), Some(non_renewable)) =
            (year.clone(), renewable_energy, non_renewable_energy)
        {
            return Ok(Self::RenewableSplit {
                years,
                renewable,
                non_renewable,
            });
        }

        match (kind.is_time_series(), year, energy_sources, consumption) {
            (true, Some(years), _, Some(consumption)) => Ok(Self::Consumption {
                years,
                consumption,
            }),
            (false, _, Some(sources), Some(consumption)) => Ok(Self::SourceBreakdown {
                sources,
                consumption,
            }),
            _ => Err(AppError::DataError(format!(
                "Unrecognized payload shape for {} chart",
                kind.label()
            ))),
        }
    }

    pub const fn shape(&self) -> &'static str {
        match self {
            Self::RenewableSplit { .. } => "renewable split",
            Self::Consumption { .. } => "consumption",
            Self::SourceBreakdown { .. } => "source breakdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_consumption() {
        let value = json!({"data": {"year": [2000, 2001], "consumption": [1.5, null]}});
        let payload = EnergyPayload::decode(&value, ChartKind::Line).unwrap();

        assert_eq!(
            payload,
            EnergyPayload::Consumption {
                years: vec![Some(2000), Some(2001)],
                consumption: vec![Some(1.5), None],
            }
        );
    }

    #[test]
    fn test_renewable_split_takes_precedence() {
        let value = json!({"data": {
            "year": [2000],
            "consumption": [3.0],
            "renewable_energy": [1.0],
            "non_renewable_energy": [2.0]
        }});

        let payload = EnergyPayload::decode(&value, ChartKind::Line).unwrap();
        assert_eq!(payload.shape(), "renewable split");
    }

    #[test]
    fn test_source_breakdown_only_for_pie() {
        let value = json!({"data": {"energy_sources": ["coal", "gas"], "consumption": [1.0, 2.0]}});

        assert!(EnergyPayload::decode(&value, ChartKind::Line).is_err());
        let payload = EnergyPayload::decode(&value, ChartKind::Pie).unwrap();
        assert_eq!(payload.shape(), "source breakdown");
    }

    #[test]
    fn test_yearly_consumption_is_not_a_pie() {
        let value = json!({"data": {"year": [2000], "consumption": [1.0]}});
        assert!(EnergyPayload::decode(&value, ChartKind::Pie).is_err());
    }

    #[test]
    fn test_missing_data_field() {
        let value = json!({"error": "Country parameter is required"});
        let err = EnergyPayload::decode(&value, ChartKind::Line).unwrap_err();
        assert!(err.to_string().contains("no data field"));
    }

    #[test]
    fn test_null_year_keeps_the_payload() {
        let value = json!({"data": {"year": [2000, null], "consumption": [1.0, 2.0]}});
        let payload = EnergyPayload::decode(&value, ChartKind::Line).unwrap();
        assert_eq!(payload.shape(), "consumption");
    }

    #[test]
    fn test_positional_data_array_is_rejected() {
        let value = json!({"data": [[2000, 2001], [1.0, 2.0], null, null, null]});
        let err = EnergyPayload::decode(&value, ChartKind::Line).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn test_non_object_body() {
        let value = json!([1, 2, 3]);
        assert!(EnergyPayload::decode(&value, ChartKind::Line).is_err());
    }
}
