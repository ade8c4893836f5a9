use thiserror::Error;

/// Failures surfaced by the chart, search and playlist collaborators
#[derive(Debug, Error)]
pub enum Error {
    #[error("chart '{chart_id}' is unavailable: {reason}")]
    ChartUnavailable { chart_id: String, reason: String },

    #[error("could not parse chart date '{date}'")]
    DateFormat {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to add video {video_id} to playlist {playlist_id}: {reason}")]
    Append {
        playlist_id: String,
        video_id: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn chart_unavailable(chart_id: &str, reason: impl ToString) -> Self {
        Error::ChartUnavailable {
            chart_id: chart_id.to_string(),
            reason: reason.to_string(),
        }
    }
}
