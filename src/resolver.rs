use std::sync::OnceLock;

use regex::Regex;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};

static CHANNEL_ANCHOR: OnceLock<Regex> = OnceLock::new();

fn channel_anchor() -> &'static Regex {
    CHANNEL_ANCHOR.get_or_init(|| Regex::new(r#"/channel/(.*?)""#).expect("anchor pattern is valid"))
}

/// Extract the channel ID from a channel page's markup.
///
/// Takes the text between the first `/channel/` and the quote that follows it.
pub fn extract_channel_id(html: &str) -> Option<String> {
    channel_anchor()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Fetch a channel page (e.g. `https://www.youtube.com/@handle`) and scrape its channel ID
pub async fn get_channel_id(client: &Client, channel_url: &str) -> Result<String> {
    debug!(channel_url, "fetching channel page");
    let html = client.get(channel_url).send().await?.text().await?;

    let channel_id =
        extract_channel_id(&html).ok_or_else(|| Error::ChannelNotFound(channel_url.to_string()))?;
    info!(channel_url, %channel_id, "resolved channel");

    Ok(channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{local_client, serve_once};

    #[test]
    fn extracts_id_up_to_quote() {
        assert_eq!(
            extract_channel_id(r#"<a href="/channel/ABC123">x</a>"#).as_deref(),
            Some("ABC123")
        );
    }

    #[test]
    fn takes_first_anchor() {
        let html = concat!(
            r#"<link rel="canonical" href="https://www.youtube.com/channel/UCbKWv2x9t6u8yZoB3KcPtnw">"#,
            r#"<meta content="https://www.youtube.com/channel/UCother">"#,
        );
        assert_eq!(
            extract_channel_id(html).as_deref(),
            Some("UCbKWv2x9t6u8yZoB3KcPtnw")
        );
    }

    #[test]
    fn missing_anchor_yields_none() {
        assert_eq!(extract_channel_id("<html><body>@alanbecker</body></html>"), None);
        // anchor without a closing quote
        assert_eq!(extract_channel_id("see /channel/ABC123 here"), None);
    }

    #[tokio::test]
    async fn fetches_page_and_extracts_id() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"<html><link rel="canonical" href="https://www.youtube.com/channel/UCbKWv2x9t6u8yZoB3KcPtnw"></html>"#,
        )
        .await;

        let channel_id = get_channel_id(&local_client(), &format!("{base_url}/@alanbecker"))
            .await
            .unwrap();
        assert_eq!(channel_id, "UCbKWv2x9t6u8yZoB3KcPtnw");

        let request_line = server.await.unwrap();
        assert_eq!(request_line, "GET /@alanbecker HTTP/1.1");
    }

    #[tokio::test]
    async fn page_without_anchor_is_channel_not_found() {
        let (base_url, server) = serve_once("200 OK", "<html><body>nothing here</body></html>").await;
        let channel_url = format!("{base_url}/@nobody");

        let err = get_channel_id(&local_client(), &channel_url)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ChannelNotFound(url) if url == channel_url));
        server.await.unwrap();
    }
}
