use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::{Error, Result};

static DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Channel whose uploads are ranked.
pub const CHANNEL_URL: &str = "https://www.youtube.com/@alanbecker";

/// Recency window in 30-day months.
pub const MONTHS: u32 = 9;

/// How many videos the report shows.
pub const DISPLAY: usize = 5;

/// Videos at or below this length are left out.
pub const MIN_DURATION: Duration = Duration::from_secs(60);

/// The fixed query a run performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub channel_url: String,
    pub months: u32,
    pub display: usize,
    pub min_duration: Duration,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            channel_url: CHANNEL_URL.to_string(),
            months: MONTHS,
            display: DISPLAY,
            min_duration: MIN_DURATION,
        }
    }
}

/// Get the base data directory (~/.top-uploads/), if one can be determined
pub fn data_dir() -> Option<&'static PathBuf> {
    DATA_DIR
        .get_or_init(|| {
            std::env::var("TOP_UPLOADS_DATA_DIR")
                .map(PathBuf::from)
                .ok()
                .or_else(|| dirs::home_dir().map(|home| home.join(".top-uploads")))
        })
        .as_ref()
}

/// Get the .env file path
pub fn env_file_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(".env"))
}

/// Load environment variables from the data directory's .env file
pub fn load_env() {
    match env_file_path() {
        Some(env_path) if env_path.exists() => {
            let _ = dotenvy::from_path(&env_path);
        }
        _ => {
            // Try current directory as fallback
            let _ = dotenvy::dotenv();
        }
    }
}

/// Get the YouTube Data API key
pub fn developer_key() -> Option<String> {
    std::env::var("DEVELOPER_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Validate that required configuration is present and return the API key
pub fn validate_config() -> Result<String> {
    developer_key().ok_or(Error::ApiKeyMissing)
}
