use chrono::NaiveDate;
use log::debug;
use std::time::Duration;
use ureq::Agent;
use urlencoding::encode;

use super::pacing::RequestGate;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Chart, ChartSnapshot};
use crate::playlist::ChartDefinition;
use crate::ports::ChartSource;

/// Fetches chart snapshots as JSON from `{base_url}/{chart_id}/{date|recent}.json`.
///
/// Only charts listed in its catalogue can be fetched; their display fields
/// come from the catalogue, the ranked entries from the snapshot.
pub struct ChartClient {
    agent: Agent,
    base_url: String,
    catalogue: Vec<ChartDefinition>,
    gate: RequestGate,
}

impl ChartClient {
    pub fn new(config: &Config, catalogue: Vec<ChartDefinition>, request_interval: Duration) -> Self {
        ChartClient {
            agent: Agent::new(),
            base_url: config.chart_data_url.clone(),
            catalogue,
            gate: RequestGate::new(request_interval),
        }
    }

    fn snapshot_url(&self, chart_id: &str, as_of: Option<NaiveDate>) -> String {
        let snapshot = match as_of {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "recent".to_string(),
        };
        format!(
            "{}/{}/{}.json",
            self.base_url.trim_end_matches('/'),
            encode(chart_id),
            snapshot
        )
    }

    fn definition(&self, chart_id: &str) -> Result<&ChartDefinition> {
        self.catalogue
            .iter()
            .find(|definition| definition.id == chart_id)
            .ok_or_else(|| Error::chart_unavailable(chart_id, "not a configured chart"))
    }
}

impl ChartSource for ChartClient {
    fn get_chart(&self, chart_id: &str, as_of: Option<NaiveDate>) -> Result<Chart> {
        let definition = self.definition(chart_id)?;
        let url = self.snapshot_url(chart_id, as_of);

        self.gate.wait();
        debug!("Fetching chart data from: {url}");

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| Error::chart_unavailable(chart_id, e))?;
        let snapshot: ChartSnapshot = response
            .into_json()
            .map_err(|e| Error::chart_unavailable(chart_id, format!("invalid chart data: {e}")))?;

        debug!("Chart '{chart_id}' for {} has {} entries", snapshot.date, snapshot.data.len());
        Chart::from_snapshot(definition, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ChartClient {
        let config = Config {
            api_key: "key".to_string(),
            access_token: "token".to_string(),
            chart_data_url: "https://charts.example.com/data/".to_string(),
        };
        ChartClient::new(
            &config,
            vec![ChartDefinition::new("hot-100", "Hot 100", "")],
            Duration::ZERO,
        )
    }

    #[test]
    fn test_recent_snapshot_url() {
        assert_eq!(
            client().snapshot_url("hot-100", None),
            "https://charts.example.com/data/hot-100/recent.json"
        );
    }

    #[test]
    fn test_dated_snapshot_url() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
        assert_eq!(
            client().snapshot_url("hot-100", Some(date)),
            "https://charts.example.com/data/hot-100/2025-04-05.json"
        );
    }

    #[test]
    fn test_unknown_chart_is_unavailable() {
        // Rejected before any request is made
        let err = client().get_chart("polka-songs", None).unwrap_err();

        match err {
            Error::ChartUnavailable { chart_id, .. } => assert_eq!(chart_id, "polka-songs"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
