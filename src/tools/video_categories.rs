//! Get video categories tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::CategoriesQuery;
use crate::format::format_category_line;
use crate::state::AppState;

/// Input for listing video categories
#[derive(Debug, Deserialize, JsonSchema)]
pub struct VideoCategoriesInput {
    /// Category ids (e.g. ["17", "18"]); takes precedence over region_code
    #[serde(default)]
    ids: Vec<String>,
    /// ISO 3166-1 alpha-2 region code (e.g. "US", "JP")
    region_code: Option<String>,
    /// Language of the category titles (e.g. "es_ES")
    hl: Option<String>,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_video_categories")
        .description(
            "List YouTube video categories by id or by region. Category ids are used \
             to filter the popular videos chart.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<VideoCategoriesInput>| async move {
                let mut query = CategoriesQuery::video();
                let has_ids = !input.ids.is_empty();
                if has_ids {
                    query = query.ids(input.ids);
                }
                if let Some(region) = &input.region_code {
                    query = query.region_code(region);
                }
                if let Some(hl) = &input.hl {
                    query = query.hl(hl);
                }

                let response = state
                    .client
                    .video_categories(&query)
                    .await
                    .tool_context("YouTube API error")?;

                // The region is ignored when ids are given
                let mut output = match &input.region_code {
                    Some(region) if !has_ids => {
                        format!("# Video Categories ({region})\n\n")
                    }
                    _ => "# Video Categories\n\n".to_string(),
                };
                if response.items.is_empty() {
                    output.push_str("No categories found.\n");
                }
                for cat in &response.items {
                    output.push_str(&format_category_line(cat));
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
