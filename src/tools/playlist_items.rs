//! Get playlist items tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::PlaylistItemsQuery;
use crate::state::AppState;

/// Input for listing the videos of a playlist
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PlaylistItemsInput {
    /// Playlist id (e.g. "PLOU2XLYxmsIIM9h1Ybw2DuRw6o2fkNMeR" or a channel's uploads playlist)
    playlist_id: String,
    /// Number of items to return (default: 25, max: 500)
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    25
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_playlist_items")
        .description(
            "List the videos in a YouTube playlist in playlist order. Use a channel's \
             uploads playlist (from get_channel) to list its latest uploads.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<PlaylistItemsInput>| async move {
                let query = PlaylistItemsQuery::by_playlist(&input.playlist_id)
                    .parts(["id", "snippet", "contentDetails"])
                    .count(input.limit.clamp(1, 500));

                let response = state
                    .client
                    .playlist_items(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = format!("# Playlist {}\n\n", input.playlist_id);
                if response.items.is_empty() {
                    output.push_str("The playlist is empty.\n");
                }

                for item in &response.items {
                    let snippet = item.snippet.as_ref();
                    let title = snippet
                        .and_then(|s| s.title.as_deref())
                        .unwrap_or("(untitled)");
                    let video_id = item
                        .content_details
                        .as_ref()
                        .and_then(|d| d.video_id.as_deref())
                        .or_else(|| {
                            snippet
                                .and_then(|s| s.resource_id.as_ref())
                                .and_then(|r| r.video_id.as_deref())
                        })
                        .unwrap_or("?");
                    let position = snippet
                        .and_then(|s| s.position)
                        .map(|p| (p + 1).to_string())
                        .unwrap_or_else(|| "-".to_string());

                    output.push_str(&format!("{position}. **{title}** (`{video_id}`)"));
                    if let Some(owner) = snippet.and_then(|s| s.video_owner_channel_title.as_deref())
                    {
                        output.push_str(&format!(" by {owner}"));
                    }
                    output.push('\n');
                }

                if response.next_page_token.is_some() {
                    output.push_str("\nMore items are available; raise `limit` to see them.\n");
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
