//! Get channel tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::ChannelsQuery;
use crate::format::format_channel;
use crate::state::AppState;

/// Input for looking up a channel. Provide exactly one of the fields.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChannelInput {
    /// Channel id (e.g. "UC_x5XG1OV2P6uZZ5FSM9Ttw")
    id: Option<String>,
    /// Channel handle (e.g. "@GoogleDevelopers")
    handle: Option<String>,
    /// Legacy YouTube username (e.g. "GoogleDevelopers")
    username: Option<String>,
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_channel")
        .description(
            "Get a YouTube channel by id, handle, or legacy username: subscriber, \
             video and view counts, creation date, uploads playlist, and description.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<ChannelInput>| async move {
                let query = match (&input.id, &input.handle, &input.username) {
                    (Some(id), None, None) => ChannelsQuery::by_ids(id.as_str()),
                    (None, Some(handle), None) => ChannelsQuery::for_handle(handle),
                    (None, None, Some(name)) => ChannelsQuery::for_username(name),
                    _ => {
                        return Ok(CallToolResult::text(
                            "Please provide exactly one of id, handle, or username.",
                        ));
                    }
                };
                let query = query.parts([
                    "id",
                    "snippet",
                    "statistics",
                    "contentDetails",
                ]);

                let response = state
                    .client
                    .channels(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let Some(channel) = response.items.first() else {
                    return Ok(CallToolResult::text("Channel not found."));
                };

                Ok(CallToolResult::text(format_channel(channel)))
            },
        )
        .build()
}
