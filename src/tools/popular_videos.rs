//! Get popular videos tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::VideosQuery;
use crate::format::format_video_line;
use crate::state::AppState;

/// Input for the most popular videos chart
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PopularVideosInput {
    /// ISO 3166-1 alpha-2 region code (e.g. "US", "GB")
    region_code: Option<String>,
    /// Restrict the chart to a video category id (see get_video_categories)
    video_category_id: Option<String>,
    /// Number of videos to return (default: 10, max: 200)
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    10
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_popular_videos")
        .description(
            "Get the YouTube most popular videos chart, optionally for a region \
             and a video category.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<PopularVideosInput>| async move {
                let limit = input.limit.clamp(1, 200);
                let mut query = VideosQuery::most_popular()
                    .parts(["id", "snippet", "contentDetails", "statistics"])
                    .count(limit);
                if let Some(region) = &input.region_code {
                    query = query.region_code(region);
                }
                if let Some(category) = &input.video_category_id {
                    query = query.video_category_id(category);
                }

                let response = state
                    .client
                    .videos(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = match &input.region_code {
                    Some(region) => format!("# Popular Videos ({region})\n\n"),
                    None => "# Popular Videos\n\n".to_string(),
                };
                for (i, video) in response.items.iter().enumerate() {
                    output.push_str(&format!("{}. ", i + 1));
                    output.push_str(format_video_line(video).trim_start_matches("- "));
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
