//! Resource template for video details
//!
//! Exposes a video as markdown via URI template: youtube://video/{id}

use std::collections::HashMap;
use std::sync::Arc;

use tower_mcp::protocol::{ReadResourceResult, ResourceContent};
use tower_mcp::resource::{ResourceTemplate, ResourceTemplateBuilder};

use crate::client::VideosQuery;
use crate::format::format_video;
use crate::state::AppState;

pub fn build(state: Arc<AppState>) -> ResourceTemplate {
    ResourceTemplateBuilder::new("youtube://video/{id}")
        .name("YouTube Video")
        .description("Get details, statistics, and description of a video by id")
        .mime_type("text/markdown")
        .handler(move |uri: String, vars: HashMap<String, String>| {
            let state = state.clone();
            async move {
                let id = vars.get("id").cloned().unwrap_or_default();

                let query = VideosQuery::by_ids(id.as_str())
                    .parts(["id", "snippet", "contentDetails", "statistics"]);
                let response = state.client.videos(&query).await.map_err(|e| {
                    tower_mcp::Error::tool(format!("YouTube API error: {}", e))
                })?;

                let video = response
                    .items
                    .first()
                    .ok_or_else(|| tower_mcp::Error::tool(format!("Video {id} not found")))?;

                Ok(ReadResourceResult {
                    contents: vec![ResourceContent {
                        uri,
                        mime_type: Some("text/markdown".to_string()),
                        text: Some(format_video(video)),
                        blob: None,
                        meta: None,
                    }],
                    meta: None,
                })
            }
        })
}
