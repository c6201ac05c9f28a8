use std::fmt::Write;

use reqwest::Client;

use crate::config::{Query, validate_config};
use crate::duration::format_hms;
use crate::error::Result;
use crate::ranking::top_by_views;
use crate::resolver::get_channel_id;
use crate::uploads::{ListOptions, Video, list_recent_uploads};
use crate::youtube::YouTubeClient;

pub async fn run(query: &Query) -> Result<()> {
    let api_key = validate_config()?;
    let client = Client::new();

    eprintln!("Resolving channel {}...", query.channel_url);
    let channel_id = get_channel_id(&client, &query.channel_url).await?;

    eprintln!(
        "Fetching uploads from the last {} months for {}...",
        query.months, channel_id
    );
    let youtube = YouTubeClient::new(client, api_key);
    let options = ListOptions {
        months: query.months,
        min_duration: query.min_duration,
    };
    let videos = list_recent_uploads(&youtube, &channel_id, options).await?;

    let top = top_by_views(videos, query.display);
    print!("{}", render(&top, query.months));

    Ok(())
}

/// Build the report printed for a ranked list
pub fn render(videos: &[Video], months: u32) -> String {
    let mut out = format!(
        ">> Top videos uploaded in the last {} months (by view):\n\n",
        months
    );

    if videos.is_empty() {
        let _ = writeln!(out, "No videos found in the last {} months.", months);
        return out;
    }

    for video in videos {
        let _ = writeln!(out, "    {}", video.title);
        let _ = writeln!(out, "    View count: {}", format_view_count(video.view_count));
        let _ = writeln!(out, "    {}", video.url);
        let _ = writeln!(out, "    {}", format_hms(video.duration));
        out.push('\n');
    }

    out
}

/// Format a count with comma thousands separators (1234567 -> "1,234,567")
pub fn format_view_count(views: u64) -> String {
    let digits = views.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
