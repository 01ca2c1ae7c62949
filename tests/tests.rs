#[cfg(test)]
mod tests {
    use energy_dashboard::hooks::use_charts::ChartsState;
    use energy_dashboard::hooks::use_predictions::{PREDICTION_FAILED, PredictionState};
    use energy_dashboard::models::{
        chart::{CONSUMPTION, ChartKind, NON_RENEWABLE_ENERGY, RENEWABLE_ENERGY},
        error::AppError,
        page::{EnergyKind, Page},
        prediction::{PredictionResults, format_energy_type, parse_all},
    };
    use energy_dashboard::services::{
        batch::{BatchGeneration, BatchOutcome, BatchTicket, FETCH_FAILED, run_batch},
        endpoints::{ChartSubject, EndpointDescriptor},
        normalizer::{ChartDescriptor, NormalizeOptions, UnrecognizedPayload, normalize},
    };
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::{FutureExt, Shared};
    use serde_json::{Value, json};
    use std::rc::Rc;

    // Helper: a yearly consumption body as served by /plot_energy_type
    fn consumption_body() -> Value {
        json!({"data": {"year": [2000, 2001, 2002], "consumption": [1.2, 2.4, 3.6]}})
    }

    fn split_body() -> Value {
        json!({"data": {
            "year": [2022, 2023],
            "renewable_energy": [12.5, 14.0],
            "non_renewable_energy": [80.0, 78.5]
        }})
    }

    // Helper: canned backend keyed on endpoint path
    fn backend(endpoint: &EndpointDescriptor) -> Result<Value, AppError> {
        match endpoint.path {
            "/plot_energy_type" => Ok(consumption_body()),
            "/plot_renewable_vs_non" => Ok(split_body()),
            "/plot_energy_consumption_pie" => Ok(json!({"data": {
                "energy_sources": ["solar", "wind"],
                "consumption": [4.0, 6.0]
            }})),
            other => Err(AppError::NotFound(other.to_string())),
        }
    }

    fn network_error() -> AppError {
        AppError::ApiError("Network error: connection refused".to_string())
    }

    #[test]
    fn test_world_overview_batch() {
        let endpoints = ChartSubject::World.endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |e| async move {
            backend(&e)
        }));

        assert_eq!(outcome.charts.len(), 4);
        assert!(outcome.error.is_none());

        let titles: Vec<&str> = outcome.charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Solar Electricity",
                "Wind Electricity",
                "Hydro Electricity",
                "Renewable vs Non-Renewable Energy"
            ]
        );

        let split = &outcome.charts[3];
        assert_eq!(split.series_keys, vec![RENEWABLE_ENERGY, NON_RENEWABLE_ENERGY]);
        assert_eq!(split.values(NON_RENEWABLE_ENERGY), vec![Some(80.0), Some(78.5)]);
    }

    #[test]
    fn test_country_batch_includes_breakdown_pie() {
        let endpoints = ChartSubject::Country("Germany".to_string()).endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |e| async move {
            backend(&e)
        }));

        assert_eq!(outcome.charts.len(), 5);
        let pie = outcome.charts.last().unwrap();
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(pie.title, "Energy Sources Breakdown");
        assert_eq!(pie.categories().len(), 2);
    }

    #[test]
    fn test_energy_page_charts_keep_their_kinds() {
        let endpoints = ChartSubject::Energy(EnergyKind::Wind).endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |e| async move {
            backend(&e)
        }));

        let kinds: Vec<ChartKind> = outcome.charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ChartKind::Line, ChartKind::Bar, ChartKind::Area, ChartKind::Pie]
        );
        assert_eq!(
            outcome.charts[1].series_name(CONSUMPTION),
            "Wind Consumption"
        );
    }

    #[test]
    fn test_every_request_failing_sets_page_error() {
        let endpoints = ChartSubject::World.endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |_| async {
            Err(network_error())
        }));

        assert!(outcome.charts.is_empty());
        assert_eq!(outcome.failures.len(), endpoints.len());
        assert_eq!(outcome.error.as_deref(), Some(FETCH_FAILED));

        let state = ChartsState::from(outcome);
        assert_eq!(state.error(), Some(FETCH_FAILED));
        assert!(state.charts().is_empty());
    }

    #[test]
    fn test_partial_failure_keeps_other_charts() {
        let endpoints = ChartSubject::World.endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |e| async move {
            // Only the wind request fails
            if e.params.iter().any(|(_, v)| v == "wind_electricity") {
                Err(network_error())
            } else {
                backend(&e)
            }
        }));

        assert_eq!(outcome.charts.len(), endpoints.len() - 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].starts_with("Wind Electricity"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_unrecognized_payload_is_excluded() {
        let endpoints = ChartSubject::World.endpoints();
        let outcome = block_on(run_batch(&endpoints, NormalizeOptions::default(), |e| async move {
            if e.path == "/plot_renewable_vs_non" {
                Ok(json!({"data": {"message": "no data"}}))
            } else {
                backend(&e)
            }
        }));

        assert_eq!(outcome.charts.len(), 3);
        assert_eq!(outcome.dropped, vec!["Renewable vs Non-Renewable Energy"]);
        assert!(outcome.failures.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_rejected_payloads_are_not_page_errors() {
        let endpoints = ChartSubject::World.endpoints();
        let options = NormalizeOptions {
            unrecognized: UnrecognizedPayload::Reject,
            ..NormalizeOptions::default()
        };
        let outcome = block_on(run_batch(&endpoints, options, |_| async {
            Ok(json!({"status": "ok"}))
        }));

        assert!(outcome.charts.is_empty());
        assert_eq!(outcome.dropped.len(), endpoints.len());
        assert!(outcome.error.is_none());
    }

    // Helper: one batch whose single response is released through `gate`
    async fn guarded_batch(
        generation: &BatchGeneration,
        ticket: BatchTicket,
        endpoints: &[EndpointDescriptor],
        gate: Shared<oneshot::Receiver<Value>>,
    ) -> Option<BatchOutcome> {
        let outcome = run_batch(endpoints, NormalizeOptions::default(), |_| {
            let gate = gate.clone();
            async move {
                gate.await
                    .map_err(|_| AppError::ApiError("request dropped".to_string()))
            }
        })
        .await;

        generation.is_current(ticket).then_some(outcome)
    }

    #[test]
    fn test_superseded_batch_does_not_publish() {
        let generation = BatchGeneration::new();
        let endpoints = vec![EndpointDescriptor::energy_type(
            "World",
            "solar_electricity",
            ChartDescriptor::new(ChartKind::Line, "Solar Electricity"),
        )];

        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();

        // The second subject selection starts before the first batch settles
        let old_ticket = generation.begin();
        let new_ticket = generation.begin();

        let (old, new, ()) = block_on(async {
            futures::join!(
                guarded_batch(&generation, old_ticket, &endpoints, rx_old.shared()),
                guarded_batch(&generation, new_ticket, &endpoints, rx_new.shared()),
                async {
                    tx_new.send(consumption_body()).unwrap();
                    tx_old
                        .send(json!({"data": {"year": [1990], "consumption": [9.9]}}))
                        .unwrap();
                },
            )
        });

        assert!(old.is_none());
        let new = new.unwrap();
        assert_eq!(new.charts[0].years(), vec!["2000", "2001", "2002"]);
    }

    #[test]
    fn test_normalize_is_pure() {
        let descriptor = ChartDescriptor::new(ChartKind::Bar, "Annual Consumption");
        let body = consumption_body();

        let first = normalize(&body, &descriptor, NormalizeOptions::default()).unwrap();
        let second = normalize(&body, &descriptor, NormalizeOptions::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(body, consumption_body());
    }

    #[test]
    fn test_normalized_points_are_year_ordered() {
        let descriptor = ChartDescriptor::new(ChartKind::Line, "Trend");
        let chart = normalize(&split_body(), &descriptor, NormalizeOptions::default())
            .unwrap()
            .unwrap();

        let years: Vec<i32> = chart.points().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2022, 2023]);
    }

    #[test]
    fn test_format_energy_type_cases() {
        assert_eq!(format_energy_type("fossil_fuel"), "Fossil Fuel");
        assert_eq!(format_energy_type("wind"), "Wind");
        assert_eq!(format_energy_type("renewables"), "Renewables");
        assert_eq!(format_energy_type(""), "");
    }

    #[test]
    fn test_predict_all_example() {
        let body = json!({
            "wind": [{"country": "Germany", "energy_type": "wind", "year": 2025, "prediction": 123.456}],
            "fossil_fuel": [{"country": "Germany", "energy_type": "fossil_fuel", "year": 2025, "prediction": 900.1}]
        });

        let records = parse_all(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].energy_type, "Wind");
        assert_eq!(records[1].energy_type, "Fossil Fuel");
        assert_eq!(format!("{:.2} kWh", records[0].prediction), "123.46 kWh");
    }

    #[test]
    fn test_prediction_state() {
        let results = Rc::new(PredictionResults::new(Vec::new(), 2030));
        let loaded = PredictionState::Loaded(results.clone());
        assert_eq!(loaded.results(), Some(&results));

        let failed = PredictionState::Error(PREDICTION_FAILED.to_string());
        assert!(failed.results().is_none());
        assert_ne!(PredictionState::Idle, PredictionState::Loading);
    }

    #[test]
    fn test_charts_state_from_outcome() {
        let outcome = BatchOutcome {
            charts: vec![],
            failures: vec!["Solar Electricity: Network error".to_string()],
            dropped: vec![],
            error: None,
        };

        let state = ChartsState::from(outcome);
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert!(state.loaded().is_some_and(|charts| charts.is_empty()));
        assert!(ChartsState::Loading.is_loading());
    }

    #[test]
    fn test_back_navigation_restores_country() {
        let country = Page::Country(Some("Germany".to_string()));
        let saved_state = country.history_state().map(str::to_string);
        let saved_path = country.path();

        // Returning to the saved entry rebuilds the same page
        let restored = Page::from_location(&saved_path, saved_state).resolve();
        assert_eq!(restored, country);
        assert_eq!(restored.path(), "/energy-by-country-year");
    }

    #[test]
    fn test_navigation_guard() {
        assert_eq!(Page::Country(None).resolve(), Page::Landing);
        assert_eq!(
            Page::Country(Some("Spain".to_string())).resolve(),
            Page::Country(Some("Spain".to_string()))
        );
        assert_eq!(
            Page::from_path("/hydro-energy").resolve(),
            Page::Energy(EnergyKind::Hydro)
        );
    }
}
