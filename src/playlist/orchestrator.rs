use chrono::NaiveDate;
use log::{error, info, warn};

use crate::error::Result;
use crate::models::ChartEntry;
use crate::ports::{ChartSource, PlaylistStore, VideoSearchPort};
use super::matching::VideoMatcher;
use super::selection::EntrySelection;
use super::{
    ChartOutcome, ChartStatus, EntryOutcome, EntryStatus, OrderingPolicy, PlaylistSpec,
    RunSummary,
};

/// Turns chart snapshots into newly created playlists.
///
/// Charts are processed one at a time and entries one at a time, so the order
/// of items in a playlist is the order they were submitted in. A failing entry
/// only skips that entry; a failing chart only skips that chart.
pub struct PlaylistOrchestrator<C, V, P> {
    charts: C,
    search: V,
    store: P,
    max_entries: usize,
    ordering: OrderingPolicy,
    as_of: Option<NaiveDate>,
}

impl<C, V, P> PlaylistOrchestrator<C, V, P>
where
    C: ChartSource,
    V: VideoSearchPort,
    P: PlaylistStore,
{
    pub fn new(charts: C, search: V, store: P) -> Self {
        Self {
            charts,
            search,
            store,
            max_entries: 100,
            ordering: OrderingPolicy::default(),
            as_of: None,
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Fetch the charts for this date instead of the latest ones
    pub fn with_as_of(mut self, as_of: Option<NaiveDate>) -> Self {
        self.as_of = as_of;
        self
    }

    /// Process every chart id in order. Never stops early.
    pub fn run<S: AsRef<str>>(&self, chart_ids: &[S]) -> RunSummary {
        let mut summary = RunSummary::default();

        for chart_id in chart_ids {
            let chart_id = chart_id.as_ref();
            let status = match self.process_chart(chart_id) {
                Ok(status) => status,
                Err(e) => {
                    error!("Skipping chart '{chart_id}': {e}");
                    ChartStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            summary.charts.push(ChartOutcome {
                chart_id: chart_id.to_string(),
                status,
            });
        }

        summary
    }

    /// Create and fill the playlist for one chart, unless a playlist with the
    /// same title already exists
    pub fn process_chart(&self, chart_id: &str) -> Result<ChartStatus> {
        let chart = self.charts.get_chart(chart_id, self.as_of)?;
        info!(
            "Chart '{}' for {}: {} entries",
            chart.id,
            chart.snapshot_date,
            chart.entries.len()
        );
        let spec = PlaylistSpec::for_chart(&chart)?;

        if self.store.exists_with_title(&spec.title)? {
            warn!(
                "Playlist already exists with title '{}'. Delete it manually and re-run to recreate it.",
                spec.title
            );
            return Ok(ChartStatus::AlreadyExists { title: spec.title });
        }

        let playlist_id = self.store.create(&spec.title, &spec.description)?;
        info!("Created playlist '{}' (ID: {playlist_id})", spec.title);

        let selected = EntrySelection::select(&chart.entries, self.max_entries, self.ordering);
        let entries = self.submit_entries(&playlist_id, &selected);

        Ok(ChartStatus::Created {
            playlist_id,
            title: spec.title,
            entries,
        })
    }

    /// Search for and append each entry, strictly in the given order
    pub fn submit_entries(&self, playlist_id: &str, entries: &[&ChartEntry]) -> Vec<EntryOutcome> {
        let mut outcomes = Vec::with_capacity(entries.len());

        for entry in entries {
            let label = entry.label();
            info!("Adding {label}");

            let query = entry.search_query();
            let status = match VideoMatcher::find_best_match(&self.search, &query) {
                Ok(Some(video_id)) => match self.store.append(playlist_id, &video_id) {
                    Ok(title) => {
                        info!("\tVideo added: {title}");
                        EntryStatus::Added { title }
                    }
                    Err(e) => {
                        warn!("\tCould not add {label}: {e}");
                        EntryStatus::AppendFailed {
                            reason: e.to_string(),
                        }
                    }
                },
                Ok(None) => {
                    warn!("\tNo video found for '{query}'. Moving on to the next song.");
                    EntryStatus::NoMatch
                }
                Err(e) => {
                    warn!("\tSearch for '{query}' failed: {e}");
                    EntryStatus::SearchFailed {
                        reason: e.to_string(),
                    }
                }
            };

            outcomes.push(EntryOutcome {
                rank: entry.rank,
                song: entry.song(),
                status,
            });
        }

        outcomes
    }
}
