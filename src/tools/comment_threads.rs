//! Get comment threads tool

use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tower_mcp::{
    CallToolResult, ResultExt, Tool, ToolBuilder,
    extract::{Json, State},
};

use crate::client::{CommentOrder, CommentThreadsQuery, TextFormat};
use crate::state::{AppState, format_number};

/// Sort order for comment threads
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThreadOrder {
    /// Newest first
    #[default]
    Time,
    /// Most relevant first
    Relevance,
}

/// Input for listing top-level comments of a video
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommentThreadsInput {
    /// Video id (e.g. "dQw4w9WgXcQ")
    video_id: String,
    /// Only threads containing these terms
    search_terms: Option<String>,
    /// Sort order (default: time)
    #[serde(default)]
    order: ThreadOrder,
    /// Number of threads to return (default: 20, max: 500)
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    20
}

pub fn build(state: Arc<AppState>) -> Tool {
    ToolBuilder::new("get_comment_threads")
        .description(
            "Get top-level comments of a YouTube video with author, like count, \
             and reply count. Supports relevance ordering and term search.",
        )
        .read_only()
        .idempotent()
        .icon("https://www.youtube.com/favicon.ico")
        .extractor_handler(
            state,
            |State(state): State<Arc<AppState>>, Json(input): Json<CommentThreadsInput>| async move {
                let order = match input.order {
                    ThreadOrder::Time => CommentOrder::Time,
                    ThreadOrder::Relevance => CommentOrder::Relevance,
                };
                let mut query = CommentThreadsQuery::for_video(&input.video_id)
                    .parts(["id", "snippet"])
                    .order(order)
                    .text_format(TextFormat::PlainText)
                    .count(input.limit.clamp(1, 500));
                if let Some(terms) = &input.search_terms {
                    query = query.search_terms(terms);
                }

                let response = state
                    .client
                    .comment_threads(&query)
                    .await
                    .tool_context("YouTube API error")?;

                let mut output = format!(
                    "# Comments on {} ({} threads)\n\n",
                    input.video_id,
                    response.items.len()
                );

                for thread in &response.items {
                    let Some(snippet) = &thread.snippet else {
                        continue;
                    };
                    let Some(comment) = snippet
                        .top_level_comment
                        .as_ref()
                        .and_then(|c| c.snippet.as_ref())
                    else {
                        continue;
                    };
                    let author = comment.author_display_name.as_deref().unwrap_or("unknown");
                    let text = comment
                        .text_original
                        .as_deref()
                        .or(comment.text_display.as_deref())
                        .unwrap_or("")
                        .trim();

                    output.push_str(&format!("**{author}**"));
                    if let Some(at) = comment.published_at {
                        output.push_str(&format!(" ({})", at.date_naive()));
                    }
                    output.push_str(&format!(
                        " - {} likes, {} replies\n",
                        format_number(comment.like_count.unwrap_or(0)),
                        snippet.total_reply_count.unwrap_or(0)
                    ));
                    output.push_str(&format!("> {}\n\n", text.replace('\n', "\n> ")));
                }

                Ok(CallToolResult::text(output))
            },
        )
        .build()
}
