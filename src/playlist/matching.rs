use log::debug;

use crate::error::Result;
use crate::models::MediaKind;
use crate::ports::VideoSearchPort;

/// Number of search results inspected per chart entry
pub const SEARCH_LIMIT: usize = 3;

/// Picks the video that represents a chart entry
pub struct VideoMatcher;

impl VideoMatcher {
    /// Search once and return the id of the first video-kind result.
    ///
    /// The search API's own type filter is not reliable, so other kinds are
    /// skipped here. Only the first `SEARCH_LIMIT` results are looked at and no
    /// further pages are requested.
    pub fn find_best_match<V: VideoSearchPort + ?Sized>(
        search: &V,
        query: &str,
    ) -> Result<Option<String>> {
        let candidates = search.search(query, SEARCH_LIMIT)?;

        for candidate in candidates.into_iter().take(SEARCH_LIMIT) {
            match candidate.kind {
                MediaKind::Video => return Ok(Some(candidate.id)),
                MediaKind::Other => {
                    debug!("Result {} is not a video, trying the next one", candidate.id)
                }
            }
        }

        Ok(None)
    }
}
