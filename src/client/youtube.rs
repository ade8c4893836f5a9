use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use ureq::Agent;
use urlencoding::encode;

use super::pacing::RequestGate;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    CreatedPlaylist, PlaylistItemResponse, PlaylistListResponse, SearchListResponse,
    VideoCandidate,
};
use crate::ports::{PlaylistStore, VideoSearchPort};

pub const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Number of the caller's playlists inspected by the title check
const PLAYLIST_PAGE_SIZE: usize = 10;

/// A minimal YouTube Data API v3 client authenticated with a bearer token
pub struct YouTubeClient {
    agent: Agent,
    base_url: String,
    api_key: String,
    access_token: String,
    gate: RequestGate,
}

impl YouTubeClient {
    /// Create a new client; `request_interval` spaces out all of its API calls
    pub fn new(config: &Config, request_interval: Duration) -> Self {
        YouTubeClient {
            agent: Agent::new(),
            base_url: YOUTUBE_API_URL.to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
            gate: RequestGate::new(request_interval),
        }
    }

    /// Public URL of a playlist
    pub fn playlist_url(playlist_id: &str) -> String {
        format!("https://www.youtube.com/playlist?list={playlist_id}")
    }

    fn url(&self, resource: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}?key={}",
            self.base_url.trim_end_matches('/'),
            resource,
            encode(&self.api_key)
        );
        for (name, value) in params {
            url.push_str(&format!("&{}={}", name, encode(value)));
        }
        url
    }

    fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        self.gate.wait();
        let url = self.url(resource, params);
        debug!("GET {resource} {params:?}");

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .call()
            .map_err(describe_error)?;

        response
            .into_json()
            .map_err(|e| Error::Api(format!("invalid {resource} response: {e}")))
    }

    fn post<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
        body: serde_json::Value,
    ) -> Result<T> {
        self.gate.wait();
        let url = self.url(resource, params);
        debug!("POST {resource} {params:?}");

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .send_json(body)
            .map_err(describe_error)?;

        response
            .into_json()
            .map_err(|e| Error::Api(format!("invalid {resource} response: {e}")))
    }
}

/// Turn a ureq failure into an API error, keeping the server's message when
/// there is one
fn describe_error(error: ureq::Error) -> Error {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            Error::Api(format!("HTTP {code}: {}", body.trim()))
        }
        ureq::Error::Transport(transport) => Error::Api(transport.to_string()),
    }
}

impl VideoSearchPort for YouTubeClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<VideoCandidate>> {
        let max_results = limit.to_string();
        let response: SearchListResponse = self.get(
            "search",
            &[
                ("part", "id"),
                ("q", query),
                ("maxResults", &max_results),
                ("safeSearch", "none"),
                ("type", "video"),
                ("fields", "items"),
            ],
        )?;

        Ok(response.items.into_iter().map(VideoCandidate::from).collect())
    }
}

impl PlaylistStore for YouTubeClient {
    fn exists_with_title(&self, title: &str) -> Result<bool> {
        let page_size = PLAYLIST_PAGE_SIZE.to_string();
        let response: PlaylistListResponse = self.get(
            "playlists",
            &[
                ("part", "snippet"),
                ("mine", "true"),
                ("maxResults", &page_size),
                ("fields", "items(snippet(title))"),
            ],
        )?;

        Ok(response.items.iter().any(|playlist| playlist.snippet.title == title))
    }

    fn create(&self, title: &str, description: &str) -> Result<String> {
        let created: CreatedPlaylist = self.post(
            "playlists",
            &[("part", "snippet,status"), ("fields", "id")],
            json!({
                "snippet": {
                    "title": title,
                    "description": description,
                },
                "status": {
                    "privacyStatus": "public",
                },
            }),
        )?;

        info!("New playlist added: {title}");
        info!("\tID: {}", created.id);
        info!("\tURL: {}", Self::playlist_url(&created.id));
        Ok(created.id)
    }

    fn append(&self, playlist_id: &str, video_id: &str) -> Result<String> {
        debug!("Adding video {video_id} to playlist {playlist_id}");

        let response: PlaylistItemResponse = self
            .post(
                "playlistItems",
                &[("part", "snippet"), ("fields", "snippet(title)")],
                json!({
                    "snippet": {
                        "playlistId": playlist_id,
                        "resourceId": {
                            "kind": "youtube#video",
                            "videoId": video_id,
                        },
                    },
                }),
            )
            .map_err(|e| Error::Append {
                playlist_id: playlist_id.to_string(),
                video_id: video_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(response.snippet.title)
    }
}
