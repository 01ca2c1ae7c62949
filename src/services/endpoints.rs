use crate::config::Config;
use crate::models::{chart::ChartKind, page::EnergyKind};
use crate::services::normalizer::ChartDescriptor;

/// One GET request behind a chart, plus what the chart expects back.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
    pub chart: ChartDescriptor,
}

impl EndpointDescriptor {
    /// `/plot_energy_type` over the default year range.
    pub fn energy_type(country: &str, energy_type: &str, chart: ChartDescriptor) -> Self {
        Self {
            path: "/plot_energy_type",
            params: vec![
                ("country", country.to_string()),
                ("energy_type", energy_type.to_string()),
                ("start_year", Config::START_YEAR.to_string()),
                ("end_year", Config::END_YEAR.to_string()),
            ],
            chart,
        }
    }

    /// `/plot_renewable_vs_non` over the default year range.
    pub fn renewable_vs_non(country: &str) -> Self {
        Self {
            path: "/plot_renewable_vs_non",
            params: vec![
                ("country", country.to_string()),
                ("start_year", Config::START_YEAR.to_string()),
                ("end_year", Config::END_YEAR.to_string()),
            ],
            chart: ChartDescriptor::new(ChartKind::Line, "Renewable vs Non-Renewable Energy"),
        }
    }

    /// `/plot_energy_consumption_pie` for the default pie year.
    pub fn consumption_pie(country: &str, energy_type: &str, title: &str) -> Self {
        Self {
            path: "/plot_energy_consumption_pie",
            params: vec![
                ("country", country.to_string()),
                ("year", Config::PIE_YEAR.to_string()),
                ("energy_type", energy_type.to_string()),
            ],
            chart: ChartDescriptor::new(ChartKind::Pie, title),
        }
    }
}

/// What a chart page is about. Changing the subject starts a new batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSubject {
    World,
    Country(String),
    Energy(EnergyKind),
}

impl ChartSubject {
    pub fn title(&self) -> String {
        match self {
            Self::World => "Global Energy Overview".to_string(),
            Self::Country(country) => format!("Energy Data Analysis for {country}"),
            Self::Energy(kind) => format!("{} Energy Analysis", kind.label()),
        }
    }

    /// The fixed batch of requests for this subject.
    pub fn endpoints(&self) -> Vec<EndpointDescriptor> {
        match self {
            Self::World => electricity_overview(Config::WORLD),
            Self::Country(country) => {
                let mut endpoints = electricity_overview(country);
                endpoints.push(EndpointDescriptor::consumption_pie(
                    country,
                    "renewable",
                    "Energy Sources Breakdown",
                ));
                endpoints
            }
            Self::Energy(kind) => energy_page(*kind),
        }
    }
}

fn electricity_overview(country: &str) -> Vec<EndpointDescriptor> {
    let mut endpoints: Vec<_> = EnergyKind::all()
        .iter()
        .map(|kind| {
            EndpointDescriptor::energy_type(
                country,
                &format!("{}_electricity", kind.slug()),
                ChartDescriptor::new(ChartKind::Line, format!("{} Electricity", kind.label()))
                    .label(format!("{} Capacity", kind.label())),
            )
        })
        .collect();
    endpoints.push(EndpointDescriptor::renewable_vs_non(country));
    endpoints
}

fn energy_page(kind: EnergyKind) -> Vec<EndpointDescriptor> {
    let slug = kind.slug();
    let label = kind.label();

    vec![
        EndpointDescriptor::energy_type(
            Config::WORLD,
            &format!("{slug}_electricity"),
            ChartDescriptor::new(ChartKind::Line, "Global Trend")
                .label(format!("{label} Electricity")),
        ),
        EndpointDescriptor::energy_type(
            Config::WORLD,
            &format!("{slug}_consumption"),
            ChartDescriptor::new(ChartKind::Bar, "Annual Consumption")
                .label(format!("{label} Consumption")),
        ),
        EndpointDescriptor::energy_type(
            Config::WORLD,
            &format!("{slug}_share_energy"),
            ChartDescriptor::new(ChartKind::Area, "Share of Primary Energy")
                .label(format!("{label} Share (%)")),
        ),
        EndpointDescriptor::consumption_pie(Config::WORLD, slug, "Consumption Breakdown"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(endpoint: &'a EndpointDescriptor, key: &str) -> Option<&'a str> {
        endpoint
            .params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_world_overview() {
        let endpoints = ChartSubject::World.endpoints();

        assert_eq!(endpoints.len(), 4);
        assert!(endpoints.iter().all(|e| param(e, "country") == Some("World")));
        assert_eq!(param(&endpoints[1], "energy_type"), Some("wind_electricity"));
        assert_eq!(endpoints[3].path, "/plot_renewable_vs_non");
    }

    #[test]
    fn test_country_adds_breakdown_pie() {
        let endpoints = ChartSubject::Country("France".to_string()).endpoints();

        assert_eq!(endpoints.len(), 5);
        let pie = &endpoints[4];
        assert_eq!(pie.chart.kind, ChartKind::Pie);
        assert_eq!(param(pie, "year"), Some("2023"));
        assert_eq!(param(pie, "energy_type"), Some("renewable"));
    }

    #[test]
    fn test_energy_page_kinds() {
        let endpoints = ChartSubject::Energy(EnergyKind::Hydro).endpoints();
        let kinds: Vec<_> = endpoints.iter().map(|e| e.chart.kind).collect();

        assert_eq!(
            kinds,
            vec![ChartKind::Line, ChartKind::Bar, ChartKind::Area, ChartKind::Pie]
        );
        assert_eq!(param(&endpoints[0], "energy_type"), Some("hydro_electricity"));
    }

    #[test]
    fn test_subject_titles() {
        assert_eq!(
            ChartSubject::Energy(EnergyKind::Solar).title(),
            "Solar Energy Analysis"
        );
        assert_eq!(
            ChartSubject::Country("Spain".to_string()).title(),
            "Energy Data Analysis for Spain"
        );
    }
}
