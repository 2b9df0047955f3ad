//! Get guide categories tool

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

/// Input for listing guide categories
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GuideCategoriesInput {
    /// Guide category ids (e.g. ["GCQmVzdCBvZiBZb3VUdWJl"]); takes precedence over region_code
    #[serde(default)]
    ids: Vec<String>,
    /// ISO 3166-1 alpha-2 region code (e.g. "US")
    region_code: Option<String>,
    /// Language of the category titles (e.g. "fr")
    hl: Option<String>,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_guide_categories")
        .description(
            "List YouTube guide categories (channel groupings) by id or by region. \
             YouTube has deprecated this endpoint and may answer with an error.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<GuideCategoriesInput>| async move {
                let mut query = CategoriesQuery::guide();
                if !input.ids.is_empty() {
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
                    .guide_categories(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = format!(
                    "# Guide Categories ({} found)\n\n",
                    response.items.len()
                );
                for cat in &response.items {
                    output.push_str(&format_category_line(cat));
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
