use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page the playlistItems endpoint hands out
pub const PAGE_SIZE: u32 = 50;

/// Generic list envelope shared by the channels, playlistItems and videos endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: Option<String>,
}

/// One page of an uploads playlist
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    pub items: Vec<PlaylistItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    /// RFC 3339, e.g. `2024-05-01T16:00:11Z`
    pub published_at: String,
    pub title: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

/// Statistics and content details of a single video
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: String,
    #[serde(default)]
    pub statistics: Statistics,
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// The API sends counts as decimal strings; absent when the owner hides them.
    pub view_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT4M13S`
    pub duration: String,
}

/// The calls the upload listing needs from the platform.
#[allow(async_fn_in_trait)]
pub trait VideoSource {
    /// Uploads playlist of a channel, `None` when the channel does not exist
    async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>>;

    async fn playlist_page(&self, playlist_id: &str, page_token: Option<&str>)
    -> Result<PlaylistPage>;

    /// `None` when the video is gone or private
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>>;
}

/// YouTube Data API v3 client
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, YOUTUBE_API_BASE_URL)
    }

    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// GET `<base>/<endpoint>` with the API key appended
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        debug!(endpoint, ?params, "YouTube API request");

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

impl VideoSource for YouTubeClient {
    async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>> {
        let response: ListResponse<ChannelItem> = self
            .get("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|channel| channel.content_details.related_playlists.uploads))
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let max_results = PAGE_SIZE.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: ListResponse<PlaylistItem> = self.get("playlistItems", &params).await?;
        Ok(PlaylistPage {
            items: response.items,
            next_page_token: response.next_page_token,
        })
    }

    async fn video_details(&self, video_id: &str) -> Result<Option<VideoDetails>> {
        let response: ListResponse<VideoDetails> = self
            .get("videos", &[("part", "statistics,contentDetails"), ("id", video_id)])
            .await?;

        Ok(response.items.into_iter().find(|video| video.id == video_id))
    }
}
