use std::cell::Cell;

use log::info;

use crate::error::Result;
use crate::ports::PlaylistStore;

/// Dry-run playlist store: checks for existing titles against the real store
/// but only logs what it would create or append.
pub struct PreviewPlaylistStore<P> {
    inner: P,
    created: Cell<usize>,
}

impl<P: PlaylistStore> PreviewPlaylistStore<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            created: Cell::new(0),
        }
    }
}

impl<P: PlaylistStore> PlaylistStore for PreviewPlaylistStore<P> {
    fn exists_with_title(&self, title: &str) -> Result<bool> {
        self.inner.exists_with_title(title)
    }

    fn create(&self, title: &str, description: &str) -> Result<String> {
        let count = self.created.get() + 1;
        self.created.set(count);

        info!("🔍 DEBUG MODE: would create playlist '{title}'");
        info!("\tDescription: {description}");
        Ok(format!("preview-{count}"))
    }

    fn append(&self, playlist_id: &str, video_id: &str) -> Result<String> {
        info!("🔍 DEBUG MODE: would add video {video_id} to {playlist_id}");
        Ok(format!("https://www.youtube.com/watch?v={video_id}"))
    }
}
