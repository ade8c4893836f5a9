pub mod charts;
pub mod pacing;
pub mod preview;
pub mod youtube;

pub use charts::ChartClient;
pub use preview::PreviewPlaylistStore;
pub use youtube::YouTubeClient;
