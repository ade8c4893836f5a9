/// What happened to a single chart entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Added { title: String }, // Title of the video as reported by the playlist store
    NoMatch,
    SearchFailed { reason: String },
    AppendFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub rank: u32,
    pub song: String,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self.status, EntryStatus::Added { .. })
    }

    /// Why the entry is missing from its playlist, if it is
    pub fn skip_reason(&self) -> Option<String> {
        match &self.status {
            EntryStatus::Added { .. } => None,
            EntryStatus::NoMatch => Some("no video found".to_string()),
            EntryStatus::SearchFailed { reason } => Some(format!("search failed: {reason}")),
            EntryStatus::AppendFailed { reason } => Some(format!("append failed: {reason}")),
        }
    }
}

/// What happened to a chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartStatus {
    Created {
        playlist_id: String,
        title: String,
        entries: Vec<EntryOutcome>,
    },
    AlreadyExists {
        title: String,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOutcome {
    pub chart_id: String,
    pub status: ChartStatus,
}

impl ChartOutcome {
    /// (added, skipped) entry counts for a created playlist
    pub fn entry_counts(&self) -> (usize, usize) {
        match &self.status {
            ChartStatus::Created { entries, .. } => {
                let added = entries.iter().filter(|e| e.is_added()).count();
                (added, entries.len() - added)
            }
            _ => (0, 0),
        }
    }
}

/// Outcome log for one run, in processing order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub charts: Vec<ChartOutcome>,
}

impl RunSummary {
    pub fn created(&self) -> usize {
        self.count(|status| matches!(status, ChartStatus::Created { .. }))
    }

    pub fn already_existing(&self) -> usize {
        self.count(|status| matches!(status, ChartStatus::AlreadyExists { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, ChartStatus::Failed { .. }))
    }

    /// True when charts were requested and every one of them failed
    pub fn all_failed(&self) -> bool {
        !self.charts.is_empty() && self.failed() == self.charts.len()
    }

    fn count(&self, predicate: impl Fn(&ChartStatus) -> bool) -> usize {
        self.charts.iter().filter(|c| predicate(&c.status)).count()
    }

    /// Log a summary block, one line per chart
    pub fn log(&self) {
        log::info!("=== PLAYLIST CREATION SUMMARY ===");
        log::info!(
            "{} created, {} already existed, {} failed",
            self.created(),
            self.already_existing(),
            self.failed()
        );

        for chart in &self.charts {
            match &chart.status {
                ChartStatus::Created {
                    playlist_id,
                    title,
                    entries,
                } => {
                    let (added, skipped) = chart.entry_counts();
                    log::info!(
                        "✓ {}: '{title}' ({playlist_id}) with {added} videos, {skipped} skipped",
                        chart.chart_id
                    );
                    for entry in entries {
                        if let EntryStatus::Added { title } = &entry.status {
                            log::debug!("\t#{} {}: {title}", entry.rank, entry.song);
                        } else if let Some(reason) = entry.skip_reason() {
                            log::info!("\t#{} {}: {reason}", entry.rank, entry.song);
                        }
                    }
                }
                ChartStatus::AlreadyExists { title } => {
                    log::info!("- {}: '{title}' already exists", chart.chart_id);
                }
                ChartStatus::Failed { reason } => {
                    log::info!("✗ {}: {reason}", chart.chart_id);
                }
            }
        }
    }
}
