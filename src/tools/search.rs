//! Search YouTube tool

use std::sync::Arc;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::{SearchOrder, SearchQuery, SearchType};
use crate::state::AppState;

/// Kind of result to search for
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Video,
    Channel,
    Playlist,
}

/// Sort order for search results
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Relevance,
    Date,
    Rating,
    Title,
    ViewCount,
}

/// Input for searching YouTube
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Search terms (e.g. "rust async tutorial")
    query: String,
    /// Only return this kind of result (default: all kinds)
    kind: Option<ResultKind>,
    /// Sort order (default: relevance)
    order: Option<SortOrder>,
    /// Only results from this channel id
    channel_id: Option<String>,
    /// ISO 3166-1 alpha-2 region code (e.g. "US")
    region_code: Option<String>,
    /// Only results published after this RFC 3339 timestamp (e.g. "2024-01-01T00:00:00Z")
    published_after: Option<String>,
    /// Number of results to return (default: 10, max: 50)
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    10
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("search_youtube")
        .description(
            "Search YouTube for videos, channels, and playlists. Each search costs \
             100 quota units, so prefer the id-based tools for follow-up lookups.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<SearchInput>| async move {
                let mut query = SearchQuery::new()
                    .q(&input.query)
                    .parts("snippet")
                    .max_results(input.limit.clamp(1, 50));

                if let Some(kind) = input.kind {
                    query = query.kind(match kind {
                        ResultKind::Video => SearchType::Video,
                        ResultKind::Channel => SearchType::Channel,
                        ResultKind::Playlist => SearchType::Playlist,
                    });
                }
                if let Some(order) = input.order {
                    query = query.order(match order {
                        SortOrder::Relevance => SearchOrder::Relevance,
                        SortOrder::Date => SearchOrder::Date,
                        SortOrder::Rating => SearchOrder::Rating,
                        SortOrder::Title => SearchOrder::Title,
                        SortOrder::ViewCount => SearchOrder::ViewCount,
                    });
                }
                if let Some(channel) = &input.channel_id {
                    query = query.channel_id(channel);
                }
                if let Some(region) = &input.region_code {
                    query = query.region_code(region);
                }
                if let Some(after) = &input.published_after {
                    match DateTime::parse_from_rfc3339(after) {
                        Ok(at) => query = query.published_after(at.with_timezone(&Utc)),
                        Err(_) => {
                            return Ok(CallToolResult::text(format!(
                                "Invalid published_after '{after}': expected an RFC 3339 \
                                 timestamp such as 2024-01-01T00:00:00Z."
                            )));
                        }
                    }
                }

                let response = state
                    .client
                    .search(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = format!(
                    "# Search results for \"{}\" ({} shown)\n\n",
                    input.query,
                    response.items.len()
                );

                for result in &response.items {
                    let snippet = result.snippet.as_ref();
                    let title = snippet
                        .and_then(|s| s.title.as_deref())
                        .unwrap_or("(untitled)");
                    let (label, id) = if let Some(id) = &result.id.video_id {
                        ("video", id)
                    } else if let Some(id) = &result.id.playlist_id {
                        ("playlist", id)
                    } else if let Some(id) = &result.id.channel_id {
                        ("channel", id)
                    } else {
                        continue;
                    };

                    output.push_str(&format!("- [{label}] **{title}** (`{id}`)"));
                    if let Some(channel) = snippet.and_then(|s| s.channel_title.as_deref())
                        && label != "channel"
                    {
                        output.push_str(&format!(" by {channel}"));
                    }
                    if let Some(at) = snippet.and_then(|s| s.published_at) {
                        output.push_str(&format!(", {}", at.date_naive()));
                    }
                    output.push('\n');
                }

                if let Some(total) = response.page_info.as_ref().and_then(|p| p.total_results) {
                    output.push_str(&format!("\nAbout {total} results in total.\n"));
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
