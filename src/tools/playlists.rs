//! Get playlists tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::PlaylistsQuery;
use crate::state::AppState;

/// Input for listing playlists
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PlaylistsInput {
    /// Channel whose public playlists to list (e.g. "UC_x5XG1OV2P6uZZ5FSM9Ttw")
    channel_id: Option<String>,
    /// Playlist ids to look up; used when channel_id is not given
    #[serde(default)]
    ids: Vec<String>,
    /// Number of playlists to return (default: 25, max: 200)
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    25
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_playlists")
        .description(
            "List the public playlists of a YouTube channel, or look playlists up by id. \
             Returns titles, item counts, and playlist ids for get_playlist_items.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<PlaylistsInput>| async move {
                let query = match &input.channel_id {
                    Some(channel) => PlaylistsQuery::by_channel(channel)
                        .count(input.limit.clamp(1, 200)),
                    None if !input.ids.is_empty() => PlaylistsQuery::by_ids(input.ids),
                    None => {
                        return Ok(CallToolResult::text(
                            "Please provide a channel_id or at least one playlist id.",
                        ));
                    }
                };
                let query = query.parts(["id", "snippet", "contentDetails"]);

                let response = state
                    .client
                    .playlists(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let total = response
                    .page_info
                    .as_ref()
                    .and_then(|p| p.total_results)
                    .unwrap_or(response.items.len() as u64);
                let mut output = format!(
                    "# Playlists ({} shown, {} total)\n\n",
                    response.items.len(),
                    total
                );

                for playlist in &response.items {
                    let snippet = playlist.snippet.as_ref();
                    let title = snippet
                        .and_then(|s| s.title.as_deref())
                        .unwrap_or("(untitled)");
                    output.push_str(&format!("- **{}** (`{}`)", title, playlist.id));
                    if let Some(n) = playlist
                        .content_details
                        .as_ref()
                        .and_then(|d| d.item_count)
                    {
                        output.push_str(&format!(" - {n} videos"));
                    }
                    if let Some(at) = snippet.and_then(|s| s.published_at) {
                        output.push_str(&format!(", created {}", at.date_naive()));
                    }
                    output.push('\n');
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
