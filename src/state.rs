//! Shared application state

use std::time::Duration;

use crate::client::{Credentials, YouTubeClient};

/// Shared state for the MCP server
pub struct AppState {
    /// YouTube Data API client
    pub client: YouTubeClient,
}

impl AppState {
    /// Create new application state
    ///
    /// # Arguments
    /// * `credentials` - API key or OAuth access token
    /// * `api_timeout` - Per-request timeout for YouTube API calls
    pub fn new(
        credentials: Credentials,
        api_timeout: Duration,
    ) -> Result<Self, tower_mcp::BoxError> {
        let client = YouTubeClient::new(credentials)
            .map_err(|e| format!("Failed to create YouTube client: {e}"))?
            .with_timeout(api_timeout);
        Ok(Self { client })
    }

    /// State backed by a client pointed at `base_url` with a dummy API key.
    pub fn with_base_url(base_url: &str) -> Result<Self, tower_mcp::BoxError> {
        let client = YouTubeClient::with_base_url(Credentials::ApiKey("test".into()), base_url)
            .map_err(|e| format!("Failed to create YouTube client: {e}"))?;
        Ok(Self { client })
    }
}

/// Helper to format large numbers in a human-readable way
pub fn format_number(n: u64) -> String {
    // Mantissa rounded to one decimal, so 999_999 shows as 1.0M
    let rounded = |unit: f64| (n as f64 / unit * 10.0).round() / 10.0;
    if rounded(1_000_000.0) >= 1_000.0 {
        format!("{:.1}B", rounded(1_000_000_000.0))
    } else if rounded(1_000.0) >= 1_000.0 {
        format!("{:.1}M", rounded(1_000_000.0))
    } else if n >= 1_000 {
        format!("{:.1}K", rounded(1_000.0))
    } else {
        n.to_string()
    }
}

/// Format seconds as `h:mm:ss`, or `m:ss` under an hour.
pub fn format_duration(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
