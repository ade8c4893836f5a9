use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::Chart;

/// Title and description of the playlist created for a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSpec {
    pub title: String,
    pub description: String,
}

impl PlaylistSpec {
    /// Derive playlist metadata from a chart. Depends on nothing but the chart,
    /// so the same chart always yields the same title.
    pub fn for_chart(chart: &Chart) -> Result<PlaylistSpec> {
        let chart_date = format_chart_date(&chart.snapshot_date)?;

        let title = format!("{} - {}", chart.display_name, chart_date);
        let description = format!(
            "This playlist contains the {}songs in the {} Songs chart for the week of {}.  {}",
            chart.num_songs_phrase, chart.display_name, chart_date, chart.url
        );

        Ok(PlaylistSpec { title, description })
    }
}

/// Render a `YYYY-MM-DD` date as e.g. "April 05, 2025"
pub fn format_chart_date(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|source| {
        Error::DateFormat {
            date: date.to_string(),
            source,
        }
    })?;
    Ok(parsed.format("%B %d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(display_name: &str, date: &str, phrase: &str) -> Chart {
        Chart {
            id: "rock-songs".to_string(),
            display_name: display_name.to_string(),
            snapshot_date: date.to_string(),
            entries: Vec::new(),
            url: "http://www.billboard.com/charts/rock-songs".to_string(),
            num_songs_phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_date_format_pads_day() {
        assert_eq!(format_chart_date("2025-04-05").unwrap(), "April 05, 2025");
        assert_eq!(format_chart_date("2018-12-29").unwrap(), "December 29, 2018");
    }

    #[test]
    fn test_invalid_dates() {
        for date in ["", "05/04/2025", "2025-13-01", "2025-02-30", "last week"] {
            let err = format_chart_date(date).unwrap_err();
            assert!(
                matches!(err, Error::DateFormat { .. }),
                "expected DateFormat for {date:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_title_and_description() {
        let spec = PlaylistSpec::for_chart(&chart("Rock", "2025-04-05", "top 50 ")).unwrap();

        assert_eq!(spec.title, "Rock - April 05, 2025");
        assert_eq!(
            spec.description,
            "This playlist contains the top 50 songs in the Rock Songs chart for the week of \
             April 05, 2025.  http://www.billboard.com/charts/rock-songs"
        );
    }

    #[test]
    fn test_empty_phrase_leaves_no_gap() {
        let spec = PlaylistSpec::for_chart(&chart("Hot 100", "2025-04-05", "")).unwrap();

        assert!(spec.description.starts_with("This playlist contains the songs in the Hot 100 Songs chart"));
    }

    #[test]
    fn test_spec_is_deterministic() {
        let chart = chart("Pop", "2024-01-06", "top 40 ");
        let first = PlaylistSpec::for_chart(&chart).unwrap();
        let second = PlaylistSpec::for_chart(&chart).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_snapshot_date_fails() {
        assert!(PlaylistSpec::for_chart(&chart("Pop", "not-a-date", "")).is_err());
    }
}
