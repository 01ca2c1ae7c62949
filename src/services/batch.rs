use crate::models::{chart::ChartSpec, error::AppError};
use crate::services::{
    api::EnergyClient,
    endpoints::EndpointDescriptor,
    normalizer::{NormalizeOptions, normalize},
};
use futures::future::join_all;
use serde_json::Value;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Page-level message shown when every request of a batch failed.
pub const FETCH_FAILED: &str = "Failed to fetch data.";

/// Result of one fan-out over a view's endpoints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchOutcome {
    /// Charts in endpoint order, without the failed or unrecognized ones.
    pub charts: Vec<ChartSpec>,
    /// `title: reason` for each request that failed.
    pub failures: Vec<String>,
    /// Titles whose payload did not match the expected chart.
    pub dropped: Vec<String>,
    /// Set only when every request failed.
    pub error: Option<String>,
}

impl BatchOutcome {
    /// Normalizes settled responses, which must be in endpoint order.
    pub fn collect(
        endpoints: &[EndpointDescriptor],
        responses: Vec<Result<Value, AppError>>,
        options: NormalizeOptions,
    ) -> Self {
        let mut outcome = Self::default();

        for (endpoint, response) in endpoints.iter().zip(responses) {
            let title = &endpoint.chart.title;
            match response.and_then(|body| normalize(&body, &endpoint.chart, options)) {
                Ok(Some(chart)) => outcome.charts.push(chart),
                Ok(None) => outcome.dropped.push(title.clone()),
                Err(e @ AppError::DataError(_)) => outcome.dropped.push(format!("{title}: {e}")),
                Err(e) => outcome.failures.push(format!("{title}: {e}")),
            }
        }

        if !endpoints.is_empty() && outcome.failures.len() == endpoints.len() {
            outcome.error = Some(FETCH_FAILED.to_string());
        }

        outcome
    }
}

/// Issues every request at once and waits for all of them to settle.
pub async fn run_batch<F, Fut>(
    endpoints: &[EndpointDescriptor],
    options: NormalizeOptions,
    fetch: F,
) -> BatchOutcome
where
    F: Fn(EndpointDescriptor) -> Fut,
    Fut: Future<Output = Result<Value, AppError>>,
{
    let responses = join_all(endpoints.iter().cloned().map(fetch)).await;
    BatchOutcome::collect(endpoints, responses, options)
}

/// Fetches a view's charts from the backend.
pub async fn load_charts(client: &EnergyClient, endpoints: &[EndpointDescriptor]) -> BatchOutcome {
    run_batch(endpoints, NormalizeOptions::default(), |endpoint| async move {
        client.fetch_chart_payload(&endpoint).await
    })
    .await
}

/// Identifies one batch among those a view has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTicket(u64);

/// Monotonic batch counter shared by a view and its in-flight requests.
/// Only the most recently started batch may publish its results.
#[derive(Debug, Clone, Default)]
pub struct BatchGeneration {
    current: Rc<Cell<u64>>,
}

impl BatchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new batch, superseding every earlier ticket.
    pub fn begin(&self) -> BatchTicket {
        let next = self.current.get() + 1;
        self.current.set(next);
        BatchTicket(next)
    }

    pub fn is_current(&self, ticket: BatchTicket) -> bool {
        self.current.get() == ticket.0
    }

    /// Supersedes the running batch without starting another, e.g. on unmount.
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }
}

impl PartialEq for BatchGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}
