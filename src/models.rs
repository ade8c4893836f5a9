use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::playlist::ChartDefinition;

/// One ranked song within a chart snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub rank: u32,
    pub artist: String,
    pub title: String,
}

impl ChartEntry {
    /// Text used to search for a video of this entry
    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.title)
    }

    /// `Artist - Title`
    pub fn song(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }

    /// Human readable label used in log output, e.g. `#3: Artist - Title`
    pub fn label(&self) -> String {
        format!("#{}: {}", self.rank, self.song())
    }
}

/// A dated snapshot of a chart together with the display fields of its definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub id: String,
    pub display_name: String,
    pub snapshot_date: String, // As reported by the chart source, normally YYYY-MM-DD
    pub entries: Vec<ChartEntry>,
    pub url: String,
    pub num_songs_phrase: String,
}

impl Chart {
    /// Build a chart from a fetched snapshot. This is the only place a `Chart`
    /// gets its fields; it is never modified afterwards.
    pub fn from_snapshot(definition: &ChartDefinition, snapshot: ChartSnapshot) -> Result<Chart> {
        let mut entries = Vec::with_capacity(snapshot.data.len());
        for item in snapshot.data {
            if item.this_week == 0 {
                return Err(Error::chart_unavailable(
                    &definition.id,
                    format!("entry '{} - {}' has no rank", item.artist, item.song),
                ));
            }
            entries.push(ChartEntry {
                rank: item.this_week,
                artist: item.artist,
                title: item.song,
            });
        }

        // Sources list entries in rank order already; make sure of it
        entries.sort_by_key(|entry| entry.rank);
        if entries.windows(2).any(|pair| pair[0].rank == pair[1].rank) {
            return Err(Error::chart_unavailable(
                &definition.id,
                "snapshot contains duplicate ranks",
            ));
        }

        Ok(Chart {
            id: definition.id.clone(),
            display_name: definition.display_name.clone(),
            snapshot_date: snapshot.date,
            entries,
            url: definition.url.clone(),
            num_songs_phrase: definition.num_songs_phrase.clone(),
        })
    }
}

/// Kind of a search result, decided once when the API response is mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Other,
}

/// One search hit returned by a `VideoSearchPort`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub id: String,
    pub kind: MediaKind,
}

#[cfg(test)]
impl VideoCandidate {
    pub fn video(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Video,
        }
    }

    pub fn other(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: MediaKind::Other,
        }
    }
}

/// Response structure of the chart data endpoint
#[derive(Debug, Deserialize)]
pub struct ChartSnapshot {
    pub date: String,
    #[serde(default)]
    pub data: Vec<SnapshotEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotEntry {
    pub song: String,
    pub artist: String,
    pub this_week: u32,
}

/// Response structure for the YouTube `search.list` call
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    pub kind: String,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

impl From<SearchResult> for VideoCandidate {
    fn from(result: SearchResult) -> Self {
        let ResourceId {
            kind,
            video_id,
            channel_id,
            playlist_id,
        } = result.id;

        match (kind.as_str(), video_id) {
            ("youtube#video", Some(video_id)) => VideoCandidate {
                id: video_id,
                kind: MediaKind::Video,
            },
            (_, video_id) => VideoCandidate {
                id: video_id.or(playlist_id).or(channel_id).unwrap_or_default(),
                kind: MediaKind::Other,
            },
        }
    }
}

/// Response structure for the YouTube `playlists.list` call
#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistResource {
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub struct Snippet {
    pub title: String,
}

/// Response structure for the YouTube `playlists.insert` call
#[derive(Debug, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
}

/// Response structure for the YouTube `playlistItems.insert` call
#[derive(Debug, Deserialize)]
pub struct PlaylistItemResponse {
    pub snippet: Snippet,
}
