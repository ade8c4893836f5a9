use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Static description of one chart to publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub id: String,           // Identifier understood by the chart source, e.g. "hot-100"
    pub display_name: String, // Used in the playlist title, e.g. "Hot 100"
    #[serde(default)]
    pub num_songs_phrase: String, // Spliced into the description, e.g. "top 50 " (note the trailing space)
    pub url: String,
}

impl ChartDefinition {
    pub fn new(id: &str, display_name: &str, num_songs_phrase: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            num_songs_phrase: num_songs_phrase.to_string(),
            url: format!("https://www.billboard.com/charts/{id}"),
        }
    }
}

/// Order in which the selected chart entries are added to a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Chart order, number one first
    #[default]
    #[serde(alias = "NATURAL")]
    Natural,
    /// Same as natural: ascending rank
    #[serde(alias = "ASCENDING")]
    Ascending,
    /// Reverse rank order, so the number one song ends the playlist
    #[serde(alias = "DESCENDING")]
    Descending,
}

/// Settings for one run, loaded from JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartDefinition>,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize, // Cap on entries considered per chart, applied in rank order
    #[serde(default)]
    pub ordering: OrderingPolicy,
    #[serde(default = "default_request_interval_ms")]
    pub request_interval_ms: u64, // Minimum spacing between API calls, 0 disables pacing
}

fn default_charts() -> Vec<ChartDefinition> {
    vec![
        ChartDefinition::new("rock-songs", "Rock", "top 50 "),
        ChartDefinition::new("r-b-hip-hop-songs", "R&B/Hip-Hop", "top 50 "),
        ChartDefinition::new("dance-club-play-songs", "Dance/Club Play", "top 50 "),
        ChartDefinition::new("pop-songs", "Pop", "top 40 "),
        ChartDefinition::new("hot-100", "Hot 100", ""),
        ChartDefinition::new("country-songs", "Hot Country", "top 50 "),
    ]
}

fn default_max_entries() -> usize {
    100
}

fn default_request_interval_ms() -> u64 {
    1000
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            charts: default_charts(),
            max_entries: default_max_entries(),
            ordering: OrderingPolicy::default(),
            request_interval_ms: default_request_interval_ms(),
        }
    }
}

impl RunConfig {
    /// Load run settings from a JSON file; missing fields take their defaults
    pub fn load_from_file(path: &str) -> Result<RunConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run configuration '{path}'"))?;
        Self::from_json(&content).with_context(|| format!("Invalid run configuration '{path}'"))
    }

    pub fn from_json(content: &str) -> Result<RunConfig> {
        let config: RunConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Chart ids in configured order
    pub fn chart_ids(&self) -> Vec<String> {
        self.charts.iter().map(|chart| chart.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalogue() {
        let config = RunConfig::default();

        assert_eq!(config.max_entries, 100);
        assert_eq!(config.ordering, OrderingPolicy::Natural);
        assert_eq!(config.request_interval_ms, 1000);
        assert_eq!(
            config.chart_ids(),
            vec![
                "rock-songs",
                "r-b-hip-hop-songs",
                "dance-club-play-songs",
                "pop-songs",
                "hot-100",
                "country-songs"
            ]
        );

        let hot_100 = &config.charts[4];
        assert_eq!(hot_100.display_name, "Hot 100");
        assert_eq!(hot_100.num_songs_phrase, "");
        assert_eq!(hot_100.url, "https://www.billboard.com/charts/hot-100");
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RunConfig::from_json("{}").unwrap();
        assert_eq!(config.charts.len(), 6);
        assert_eq!(config.max_entries, 100);
    }

    #[test]
    fn test_partial_json() {
        let config = RunConfig::from_json(
            r#"{
                "charts": [
                    {"id": "hot-100", "display_name": "Hot 100", "url": "https://example.com/hot-100"}
                ],
                "max_entries": 10,
                "ordering": "DESCENDING"
            }"#,
        )
        .unwrap();

        assert_eq!(config.chart_ids(), vec!["hot-100"]);
        assert_eq!(config.charts[0].num_songs_phrase, "");
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.ordering, OrderingPolicy::Descending);
        assert_eq!(config.request_interval_ms, 1000);
    }

    #[test]
    fn test_lowercase_ordering() {
        let config = RunConfig::from_json(r#"{"ordering": "ascending"}"#).unwrap();
        assert_eq!(config.ordering, OrderingPolicy::Ascending);
    }

    #[test]
    fn test_unknown_ordering_is_rejected() {
        assert!(RunConfig::from_json(r#"{"ordering": "shuffled"}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(RunConfig::load_from_file("/nonexistent/charts.json").is_err());
    }
}
