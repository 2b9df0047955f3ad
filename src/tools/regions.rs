//! Get regions tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::{I18nLanguagesQuery, I18nRegionsQuery};
use crate::state::AppState;

/// Input for listing regions
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegionsInput {
    /// Language of the returned names (e.g. "de")
    hl: Option<String>,
    /// Also list the interface languages YouTube supports (default: false)
    #[serde(default)]
    include_languages: bool,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_regions")
        .description(
            "List the content regions YouTube supports, with the region codes other \
             tools accept. Optionally list the supported interface languages too.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<RegionsInput>| async move {
                let mut regions = I18nRegionsQuery::new();
                if let Some(hl) = &input.hl {
                    regions = regions.hl(hl);
                }
                let response = state
                    .client
                    .i18n_regions(&regions)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = format!("# Regions ({})\n\n", response.items.len());
                for region in &response.items {
                    let name = region
                        .snippet
                        .as_ref()
                        .and_then(|s| s.name.as_deref())
                        .unwrap_or("?");
                    output.push_str(&format!("- `{}` {}\n", region.id, name));
                }

                if input.include_languages {
                    let mut languages = I18nLanguagesQuery::new();
                    if let Some(hl) = &input.hl {
                        languages = languages.hl(hl);
                    }
                    let response = state
                        .client
                        .i18n_languages(&languages)
                        .await
                        .tool_context("YouTube API error")?;

                    output.push_str(&format!("\n# Languages ({})\n\n", response.items.len()));
                    for language in &response.items {
                        let name = language
                            .snippet
                            .as_ref()
                            .and_then(|s| s.name.as_deref())
                            .unwrap_or("?");
                        output.push_str(&format!("- `{}` {}\n", language.id, name));
                    }
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
