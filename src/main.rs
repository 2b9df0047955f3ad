use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_mcp::{HttpTransport, McpRouter, McpTracingLayer, StdioTransport};
use tower_resilience::bulkhead::BulkheadLayer;
use youtube_mcp::client::Credentials;
use youtube_mcp::{resources, state::AppState, tools};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "youtube-mcp")]
#[command(about = "MCP server for querying the YouTube Data API", long_about = None)]
struct Args {
    /// Transport to use
    #[arg(short, long, default_value = "stdio")]
    transport: Transport,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OAuth access token; takes precedence over the API key
    #[arg(long, env = "YOUTUBE_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Maximum concurrent requests (concurrency limit)
    #[arg(long, default_value = "10")]
    max_concurrent: usize,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// HTTP host to bind to (use 0.0.0.0 for public access)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Request timeout in seconds (for HTTP transport)
    #[arg(long, default_value = "30")]
    request_timeout_secs: u64,

    /// Timeout for each YouTube API call in seconds
    #[arg(long, default_value = "15")]
    api_timeout_secs: u64,
}

impl Args {
    fn credentials(&self) -> Result<Credentials, tower_mcp::BoxError> {
        match (&self.access_token, &self.api_key) {
            (Some(token), _) => Ok(Credentials::AccessToken(token.clone())),
            (None, Some(key)) => Ok(Credentials::ApiKey(key.clone())),
            (None, None) => {
                Err("Set --api-key (YOUTUBE_API_KEY) or --access-token (YOUTUBE_ACCESS_TOKEN)".into())
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), tower_mcp::BoxError> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("youtube_mcp={}", args.log_level).parse()?)
                .add_directive(format!("tower_mcp={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let credentials = args.credentials()?;
    tracing::info!(
        transport = ?args.transport,
        max_concurrent = args.max_concurrent,
        oauth = matches!(credentials, Credentials::AccessToken(_)),
        "Starting youtube-mcp server"
    );

    let state = Arc::new(
        AppState::new(credentials, Duration::from_secs(args.api_timeout_secs))
            .map_err(|e| format!("Failed to create state: {}", e))?,
    );

    let instructions = "MCP server for querying the YouTube Data API v3.\n\n\
         Available tools:\n\
         - search_youtube: Find videos, channels, and playlists\n\
         - get_videos: Get video details by id\n\
         - get_popular_videos: Most popular videos chart by region/category\n\
         - get_channel: Get a channel by id, handle, or username\n\
         - get_playlists: List a channel's playlists\n\
         - get_playlist_items: List the videos of a playlist\n\
         - get_comment_threads: Get top-level comments of a video\n\
         - get_video_categories: List video categories by id or region\n\
         - get_guide_categories: List guide categories by id or region\n\
         - get_regions: List supported region codes and languages\n\n\
         Resources:\n\
         - youtube://video/{id}: Video details as markdown\n\
         - youtube://channel/{id}: Channel details as markdown";

    let router = McpRouter::new()
        .server_info("youtube-mcp", env!("CARGO_PKG_VERSION"))
        .instructions(instructions)
        .tool(tools::search::build(state.clone()))
        .tool(tools::videos::build(state.clone()))
        .tool(tools::popular_videos::build(state.clone()))
        .tool(tools::channel::build(state.clone()))
        .tool(tools::playlists::build(state.clone()))
        .tool(tools::playlist_items::build(state.clone()))
        .tool(tools::comment_threads::build(state.clone()))
        .tool(tools::video_categories::build(state.clone()))
        .tool(tools::guide_categories::build(state.clone()))
        .tool(tools::regions::build(state.clone()))
        .resource_template(resources::video::build(state.clone()))
        .resource_template(resources::channel::build(state.clone()));

    match args.transport {
        Transport::Stdio => {
            // stdio is served without middleware; its error type does not
            // convert the layer errors.
            tracing::info!("Serving over stdio");
            StdioTransport::new(router).run().await?;
        }
        Transport::Http => {
            let addr = format!("{}:{}", args.host, args.port);
            tracing::info!(%addr, "Serving over HTTP");

            // 1. TimeoutLayer - Request timeout protection
            // 2. BulkheadLayer - Limits concurrent in-flight requests
            //
            // The HTTP transport's CatchError wrapper converts middleware errors
            // to JSON-RPC error responses.
            let bulkhead = BulkheadLayer::builder()
                .max_concurrent_calls(args.max_concurrent)
                .max_wait_duration(Duration::from_millis(500))
                .build();

            let middleware = ServiceBuilder::new()
                .layer(TimeoutLayer::new(Duration::from_secs(
                    args.request_timeout_secs,
                )))
                .layer(bulkhead)
                .layer(McpTracingLayer::new())
                .into_inner();

            HttpTransport::new(router)
                .disable_origin_validation()
                .layer(middleware)
                .serve(&addr)
                .await?;
        }
    }

    Ok(())
}
