use crate::models::{
    chart::{
        CONSUMPTION, CategoryDatum, ChartKind, ChartSeriesPoint, ChartSpec, NON_RENEWABLE_ENERGY,
        RENEWABLE_ENERGY,
    },
    error::AppError,
    payload::EnergyPayload,
};
use serde_json::Value;

/// What a view expects back from one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub kind: ChartKind,
    pub title: String,
    /// Legend name for single-series charts.
    pub series_label: Option<String>,
}

impl ChartDescriptor {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            series_label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.series_label = Some(label.into());
        self
    }
}

/// How payloads matching no known shape are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedPayload {
    /// The chart is left out.
    #[default]
    Drop,
    /// Normalization fails with a `DataError`.
    Reject,
}

/// Which years a renewable/non-renewable pie covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieYears {
    /// One renewable and one non-renewable slice per year, in year order.
    #[default]
    Flatten,
    /// Only the last year in the payload.
    Latest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub unrecognized: UnrecognizedPayload,
    pub pie_years: PieYears,
}

/// Maps one raw response body onto a chart.
///
/// With the default options this never fails: bodies that match no known
/// shape yield `Ok(None)`.
pub fn normalize(
    payload: &Value,
    descriptor: &ChartDescriptor,
    options: NormalizeOptions,
) -> Result<Option<ChartSpec>, AppError> {
    let decoded = EnergyPayload::decode(payload, descriptor.kind).map(|payload| {
        let shape = payload.shape();
        (shape, build_chart(payload, descriptor, options.pie_years))
    });

    match (decoded, options.unrecognized) {
        (Ok((_, Some(chart))), _) => Ok(Some(chart)),
        (Ok((_, None)) | Err(_), UnrecognizedPayload::Drop) => Ok(None),
        (Ok((shape, None)), UnrecognizedPayload::Reject) => Err(AppError::DataError(format!(
            "A {shape} payload does not fit the {} chart '{}'",
            descriptor.kind.label(),
            descriptor.title
        ))),
        (Err(e), UnrecognizedPayload::Reject) => Err(e),
    }
}

fn build_chart(
    payload: EnergyPayload,
    descriptor: &ChartDescriptor,
    pie_years: PieYears,
) -> Option<ChartSpec> {
    let kind = descriptor.kind;
    let title = descriptor.title.clone();

    let chart = match payload {
        EnergyPayload::RenewableSplit {
            years,
            renewable,
            non_renewable,
        } if kind.is_time_series() => {
            let points = years
                .into_iter()
                .zip(renewable)
                .zip(non_renewable)
                .filter_map(|((year, r), n)| {
                    Some(
                        ChartSeriesPoint::new(year?)
                            .with(RENEWABLE_ENERGY, r)
                            .with(NON_RENEWABLE_ENERGY, n),
                    )
                })
                .collect();
            ChartSpec::time_series(kind, title, points, &[RENEWABLE_ENERGY, NON_RENEWABLE_ENERGY])
        }
        EnergyPayload::Consumption { years, consumption } if kind.is_time_series() => {
            let points = years
                .into_iter()
                .zip(consumption)
                .filter_map(|(year, value)| {
                    Some(ChartSeriesPoint::new(year?).with(CONSUMPTION, value))
                })
                .collect();
            ChartSpec::time_series(kind, title, points, &[CONSUMPTION])
        }
        EnergyPayload::RenewableSplit {
            years,
            renewable,
            non_renewable,
        } => {
            let pairs: Vec<_> = years
                .into_iter()
                .zip(renewable)
                .zip(non_renewable)
                .map(|((_, r), n)| (r, n))
                .collect();
            let selected = match pie_years {
                PieYears::Flatten => &pairs[..],
                PieYears::Latest => &pairs[pairs.len().saturating_sub(1)..],
            };
            let categories = selected
                .iter()
                .flat_map(|(r, n)| {
                    [
                        r.map(|v| CategoryDatum::new("Renewable Energy", v)),
                        n.map(|v| CategoryDatum::new("Non-Renewable Energy", v)),
                    ]
                })
                .flatten()
                .collect();
            ChartSpec::pie(title, categories)
        }
        EnergyPayload::SourceBreakdown {
            sources,
            consumption,
        } if !kind.is_time_series() => {
            let categories = sources
                .into_iter()
                .zip(consumption)
                .filter_map(|(name, value)| value.map(|v| CategoryDatum::new(name, v)))
                .collect();
            ChartSpec::pie(title, categories)
        }
        _ => return None,
    };

    Some(chart.with_label(descriptor.series_label.clone()))
}
