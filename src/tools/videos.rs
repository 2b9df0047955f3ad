//! Get videos tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::{Ids, VideosQuery};
use crate::format::format_video;
use crate::state::AppState;

/// Input for getting videos by id
#[derive(Debug, Deserialize, JsonSchema)]
pub struct VideosInput {
    /// Video ids (e.g. ["dQw4w9WgXcQ"]), at most 50
    ids: Vec<String>,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_videos")
        .description(
            "Get details of one or more YouTube videos by id: title, channel, \
             duration, view/like/comment counts, tags, and description.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<VideosInput>| async move {
                let ids = Ids::from(input.ids);
                if ids.len() > 50 {
                    return Ok(CallToolResult::text(
                        "Please provide at most 50 video ids.",
                    ));
                }

                let query = VideosQuery::by_ids(ids)
                    .parts(["id", "snippet", "contentDetails", "statistics"]);
                let response = state
                    .client
                    .videos(&query)
                    .await
                    .tool_context("YouTube API error")?;

                if response.items.is_empty() {
                    return Ok(CallToolResult::text("No videos found for the given ids."));
                }

                let pages: Vec<String> = response.items.iter().map(format_video).collect();
                Ok(CallToolResult::text(pages.join("\n---\n\n")))
            },
        )
        .build()
}
