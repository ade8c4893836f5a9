//! Collaborator traits consumed by the playlist orchestrator.
//!
//! Production implementations live in `client`; tests use the generated mocks.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Chart, VideoCandidate};

/// Supplies dated, ranked chart snapshots
#[cfg_attr(test, mockall::automock)]
pub trait ChartSource {
    /// Fetch the chart for `chart_id`, the latest one unless `as_of` is given.
    /// Fails with `Error::ChartUnavailable`.
    fn get_chart(&self, chart_id: &str, as_of: Option<NaiveDate>) -> Result<Chart>;
}

/// Resolves a text query to a short ranked list of media candidates
#[cfg_attr(test, mockall::automock)]
pub trait VideoSearchPort {
    /// An empty list means the search found nothing.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<VideoCandidate>>;
}

/// The caller's playlists on the video platform
#[cfg_attr(test, mockall::automock)]
pub trait PlaylistStore {
    /// Whether one of the caller's playlists already has this exact title.
    /// Only the first page of playlists is inspected.
    fn exists_with_title(&self, title: &str) -> Result<bool>;

    /// Create a new public playlist and return its id
    fn create(&self, title: &str, description: &str) -> Result<String>;

    /// Append a video to the end of the playlist and return the video's title.
    /// Fails with `Error::Append`.
    fn append(&self, playlist_id: &str, video_id: &str) -> Result<String>;
}

impl<T: ChartSource + ?Sized> ChartSource for &T {
    fn get_chart(&self, chart_id: &str, as_of: Option<NaiveDate>) -> Result<Chart> {
        (**self).get_chart(chart_id, as_of)
    }
}

impl<T: VideoSearchPort + ?Sized> VideoSearchPort for &T {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<VideoCandidate>> {
        (**self).search(query, limit)
    }
}

impl<T: PlaylistStore + ?Sized> PlaylistStore for &T {
    fn exists_with_title(&self, title: &str) -> Result<bool> {
        (**self).exists_with_title(title)
    }

    fn create(&self, title: &str, description: &str) -> Result<String> {
        (**self).create(title, description)
    }

    fn append(&self, playlist_id: &str, video_id: &str) -> Result<String> {
        (**self).append(playlist_id, video_id)
    }
}
