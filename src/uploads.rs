use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::duration::parse_iso8601;
use crate::error::{Error, Result};
use crate::youtube::VideoSource;

pub const DEFAULT_MONTHS: u32 = 3;

/// A video that passed the recency and length filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: String,
    pub view_count: u64,
    pub url: String,
    pub duration: Duration,
}

/// Filters applied while listing a channel's uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Recency window in 30-day months
    pub months: u32,
    /// Videos must be strictly longer than this
    pub min_duration: Duration,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            months: DEFAULT_MONTHS,
            min_duration: Duration::ZERO,
        }
    }
}

impl ListOptions {
    /// Oldest publish time still inside the window, relative to `now`
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - chrono::Duration::days(i64::from(self.months) * 30)
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

fn parse_published_at(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid publish time {:?}: {}", text, e)))
}

fn parse_view_count(text: Option<&str>) -> Result<u64> {
    match text {
        Some(count) => count
            .parse()
            .map_err(|_| Error::Parse(format!("invalid view count: {:?}", count))),
        None => Ok(0),
    }
}

/// List a channel's uploads from the last `options.months` months that are
/// longer than `options.min_duration`, newest first.
pub async fn list_recent_uploads<S: VideoSource>(
    source: &S,
    channel_id: &str,
    options: ListOptions,
) -> Result<Vec<Video>> {
    let cutoff = options.cutoff(Utc::now());
    list_uploads_since(source, channel_id, cutoff, options.min_duration).await
}

/// Walk the uploads playlist until the first video published before `cutoff`.
pub async fn list_uploads_since<S: VideoSource>(
    source: &S,
    channel_id: &str,
    cutoff: DateTime<Utc>,
    min_duration: Duration,
) -> Result<Vec<Video>> {
    let playlist_id = source
        .uploads_playlist_id(channel_id)
        .await?
        .ok_or_else(|| Error::ChannelNotFound(channel_id.to_string()))?;
    debug!(%playlist_id, %cutoff, "listing uploads");

    let mut videos = Vec::new();
    let mut page_token: Option<String> = None;

    'pages: loop {
        let page = source
            .playlist_page(&playlist_id, page_token.as_deref())
            .await?;

        for item in page.items {
            let snippet = item.snippet;
            let published_at = parse_published_at(&snippet.published_at)?;
            if published_at < cutoff {
                debug!(video_id = %snippet.resource_id.video_id, %published_at, "reached cutoff");
                break 'pages;
            }

            let video_id = snippet.resource_id.video_id;
            let Some(details) = source.video_details(&video_id).await? else {
                warn!(%video_id, "no details returned, skipping");
                continue;
            };

            let duration = parse_iso8601(&details.content_details.duration)?;
            if duration <= min_duration {
                debug!(%video_id, ?duration, "too short, skipping");
                continue;
            }

            videos.push(Video {
                title: snippet.title,
                view_count: parse_view_count(details.statistics.view_count.as_deref())?,
                url: watch_url(&video_id),
                duration,
            });
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    info!(count = videos.len(), "collected recent uploads");
    Ok(videos)
}
