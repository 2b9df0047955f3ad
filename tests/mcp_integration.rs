//! MCP integration tests using tower-mcp's TestClient + wiremock.
//!
//! These tests exercise the full JSON-RPC pipeline: client request -> router ->
//! tool/resource handler -> wiremock mock -> formatted response.

use std::sync::Arc;

use serde_json::json;
use tower_mcp::{McpRouter, TestClient};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youtube_mcp::{resources, state::AppState, tools};

// ── Helpers ────────────────────────────────────────────────────────────────

fn test_state(server: &MockServer) -> Arc<AppState> {
    Arc::new(AppState::with_base_url(&server.uri()).expect("failed to create test state"))
}

fn test_router(state: Arc<AppState>) -> McpRouter {
    McpRouter::new()
        .server_info("youtube-mcp", "0.1.0")
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
        .resource_template(resources::channel::build(state.clone()))
}

async fn initialized_client(server: &MockServer) -> TestClient {
    let state = test_state(server);
    let router = test_router(state);
    let mut client = TestClient::from_router(router);
    client.initialize().await;
    client
}

// ── Mock JSON constants ────────────────────────────────────────────────────

const VIDEO_JSON: &str = r#"{
    "kind": "youtube#videoListResponse",
    "pageInfo": { "totalResults": 1, "resultsPerPage": 1 },
    "items": [
        {
            "kind": "youtube#video",
            "id": "D-lhorsDlUQ",
            "snippet": {
                "publishedAt": "2019-03-21T20:37:49Z",
                "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "title": "What are Actions on Google (Assistant on Air)",
                "description": "In the first episode of Assistant on Air...",
                "channelTitle": "Google Developers",
                "tags": ["Google", "developers"],
                "categoryId": "28"
            },
            "contentDetails": { "duration": "PT7M52S", "definition": "hd" },
            "statistics": { "viewCount": "7920", "likeCount": "295", "commentCount": "35" }
        }
    ]
}"#;

const POPULAR_JSON: &str = r#"{
    "kind": "youtube#videoListResponse",
    "items": [
        {
            "id": "v1",
            "snippet": { "title": "First Hit", "channelTitle": "Music Channel" },
            "contentDetails": { "duration": "PT3M30S" },
            "statistics": { "viewCount": "12500000" }
        },
        {
            "id": "v2",
            "snippet": { "title": "Second Hit", "channelTitle": "Music Channel" },
            "contentDetails": { "duration": "PT1H2M3S" },
            "statistics": { "viewCount": "830" }
        }
    ]
}"#;

const CHANNEL_JSON: &str = r#"{
    "kind": "youtube#channelListResponse",
    "items": [
        {
            "kind": "youtube#channel",
            "id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
            "snippet": {
                "title": "Google for Developers",
                "customUrl": "@googledevelopers",
                "publishedAt": "2007-08-23T00:34:43Z"
            },
            "contentDetails": {
                "relatedPlaylists": { "uploads": "UU_x5XG1OV2P6uZZ5FSM9Ttw" }
            },
            "statistics": { "viewCount": "252318477", "subscriberCount": "2460000", "videoCount": "6427" }
        }
    ]
}"#;

const PLAYLISTS_JSON: &str = r#"{
    "kind": "youtube#playlistListResponse",
    "pageInfo": { "totalResults": 412, "resultsPerPage": 2 },
    "items": [
        {
            "id": "PLOU2XLYxmsIIM9h1Ybw2DuRw6o2fkNMeR",
            "snippet": { "title": "Assistant on Air", "publishedAt": "2019-03-21T20:00:00Z" },
            "contentDetails": { "itemCount": 12 }
        },
        {
            "id": "PLOU2XLYxmsIJ7dsVN4iRuA7BT8XHzGtCr",
            "snippet": { "title": "Google I/O 2024" },
            "contentDetails": { "itemCount": 180 }
        }
    ]
}"#;

const PLAYLIST_ITEMS_JSON: &str = r#"{
    "kind": "youtube#playlistItemListResponse",
    "nextPageToken": "CAUQAA",
    "items": [
        {
            "id": "item1",
            "snippet": {
                "title": "Episode 1",
                "position": 0,
                "resourceId": { "kind": "youtube#video", "videoId": "D-lhorsDlUQ" },
                "videoOwnerChannelTitle": "Google for Developers"
            },
            "contentDetails": { "videoId": "D-lhorsDlUQ" }
        },
        {
            "id": "item2",
            "snippet": {
                "title": "Episode 2",
                "position": 1,
                "resourceId": { "kind": "youtube#video", "videoId": "jHw7u9oXO2k" }
            }
        }
    ]
}"#;

const COMMENT_THREADS_JSON: &str = r#"{
    "kind": "youtube#commentThreadListResponse",
    "items": [
        {
            "id": "UgydxWWoeA7F1OdqypJ4AaABAg",
            "snippet": {
                "videoId": "D-lhorsDlUQ",
                "totalReplyCount": 2,
                "topLevelComment": {
                    "id": "UgydxWWoeA7F1OdqypJ4AaABAg",
                    "snippet": {
                        "authorDisplayName": "Hieu Nguyen",
                        "textOriginal": "super helpful\nthanks",
                        "likeCount": 1200,
                        "publishedAt": "2019-03-28T11:33:46Z"
                    }
                }
            }
        }
    ]
}"#;

const SEARCH_JSON: &str = r#"{
    "kind": "youtube#searchListResponse",
    "regionCode": "US",
    "pageInfo": { "totalResults": 1000000, "resultsPerPage": 3 },
    "items": [
        {
            "id": { "kind": "youtube#video", "videoId": "lJ3NC-R3gSI" },
            "snippet": { "title": "Async Rust in depth", "channelTitle": "Jon Gjengset", "publishedAt": "2021-03-12T00:00:00Z" }
        },
        {
            "id": { "kind": "youtube#channel", "channelId": "UCaYhcUwRBNscFNUKTjgPFiA" },
            "snippet": { "title": "Rust", "channelTitle": "Rust" }
        },
        {
            "id": { "kind": "youtube#playlist", "playlistId": "PLqbS7AVVErFiWDOAVrPt7aYmnuuOLYvOa" },
            "snippet": { "title": "Rust Programming", "channelTitle": "Let's Get Rusty" }
        }
    ]
}"#;

const CATEGORIES_JSON: &str = r#"{
    "kind": "youtube#videoCategoryListResponse",
    "items": [
        { "id": "17", "snippet": { "title": "Sports", "assignable": true } },
        { "id": "18", "snippet": { "title": "Short Movies", "assignable": false } }
    ]
}"#;

const GUIDE_CATEGORIES_JSON: &str = r#"{
    "kind": "youtube#guideCategoryListResponse",
    "items": [
        { "id": "GCQmVzdCBvZiBZb3VUdWJl", "snippet": { "title": "Best of YouTube" } }
    ]
}"#;

const REGIONS_JSON: &str = r#"{
    "kind": "youtube#i18nRegionListResponse",
    "items": [
        { "id": "DE", "snippet": { "gl": "DE", "name": "Germany" } },
        { "id": "JP", "snippet": { "gl": "JP", "name": "Japan" } }
    ]
}"#;

const LANGUAGES_JSON: &str = r#"{
    "kind": "youtube#i18nLanguageListResponse",
    "items": [
        { "id": "de", "snippet": { "hl": "de", "name": "German" } }
    ]
}"#;

async fn mount_json(server: &MockServer, endpoint: &str, body: &'static str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

// ── Discovery tests ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_tools_returns_all_10() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let tools = client.list_tools().await;

    assert_eq!(tools.len(), 10);
    let names: Vec<&str> = tools
        .iter()
        .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
        .collect();
    assert!(names.contains(&"search_youtube"));
    assert!(names.contains(&"get_videos"));
    assert!(names.contains(&"get_popular_videos"));
    assert!(names.contains(&"get_channel"));
    assert!(names.contains(&"get_playlists"));
    assert!(names.contains(&"get_playlist_items"));
    assert!(names.contains(&"get_comment_threads"));
    assert!(names.contains(&"get_video_categories"));
    assert!(names.contains(&"get_guide_categories"));
    assert!(names.contains(&"get_regions"));
}

#[tokio::test]
async fn list_resource_templates_returns_video_and_channel() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let result = client.send_request("resources/templates/list", None).await;
    let templates = result
        .get("resourceTemplates")
        .and_then(|v| v.as_array())
        .expect("expected resourceTemplates array");

    assert_eq!(templates.len(), 2);
    let uris: Vec<&str> = templates
        .iter()
        .filter_map(|t| t.get("uriTemplate").and_then(|u| u.as_str()))
        .collect();
    assert!(uris.contains(&"youtube://video/{id}"));
    assert!(uris.contains(&"youtube://channel/{id}"));
}

// ── Tool tests ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn tool_get_videos() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "D-lhorsDlUQ"))
        .and(query_param("key", "test"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(VIDEO_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_videos", json!({"ids": ["D-lhorsDlUQ"]}))
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("# What are Actions on Google (Assistant on Air)"));
    assert!(text.contains("**Duration:** 7:52"));
    assert!(text.contains("**Likes:** 295"));
}

#[tokio::test]
async fn tool_get_videos_empty_ids_is_error() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let result = client.call_tool("get_videos", json!({"ids": []})).await;

    assert!(result.is_error);
}

#[tokio::test]
async fn tool_get_videos_too_many_ids_is_hint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ids: Vec<String> = (0..51).map(|i| format!("vid{i}")).collect();
    let mut client = initialized_client(&server).await;
    let result = client.call_tool("get_videos", json!({"ids": ids})).await;

    assert!(!result.is_error);
    assert!(result.all_text().contains("at most 50 video ids"));
}

#[tokio::test]
async fn tool_get_videos_blank_ids_not_counted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(VIDEO_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut ids: Vec<String> = (0..50).map(|i| format!("vid{i}")).collect();
    ids.extend(["".to_string(), "  ".to_string()]);
    let mut client = initialized_client(&server).await;
    let result = client.call_tool("get_videos", json!({"ids": ids})).await;

    assert!(!result.is_error);
    assert!(!result.all_text().contains("at most 50 video ids"));
}

#[tokio::test]
async fn tool_get_popular_videos() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("chart", "mostPopular"))
        .and(query_param("regionCode", "JP"))
        .and(query_param("maxResults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(POPULAR_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "get_popular_videos",
            json!({"region_code": "JP", "limit": 2}),
        )
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("# Popular Videos (JP)"));
    assert!(text.contains("1. **First Hit**"));
    assert!(text.contains("12.5M views"));
    assert!(text.contains("[1:02:03]"));
}

#[tokio::test]
async fn tool_get_channel_by_handle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forHandle", "@googledevelopers"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CHANNEL_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_channel", json!({"handle": "@googledevelopers"}))
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("# Google for Developers"));
    assert!(text.contains("**Subscribers:** 2.5M"));
    assert!(text.contains("UU_x5XG1OV2P6uZZ5FSM9Ttw"));
}

#[tokio::test]
async fn tool_get_channel_requires_one_filter() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let result = client
        .call_tool("get_channel", json!({"id": "UC1", "handle": "@x"}))
        .await;

    assert!(result.all_text().contains("exactly one of"));
}

#[tokio::test]
async fn tool_get_playlists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("channelId", "UC_x5XG1OV2P6uZZ5FSM9Ttw"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PLAYLISTS_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "get_playlists",
            json!({"channel_id": "UC_x5XG1OV2P6uZZ5FSM9Ttw", "limit": 2}),
        )
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("2 shown, 412 total"));
    assert!(text.contains("**Assistant on Air**"));
    assert!(text.contains("12 videos"));
}

#[tokio::test]
async fn tool_get_playlist_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PLOU2XLYxmsIIM9h1Ybw2DuRw6o2fkNMeR"))
        .and(query_param("maxResults", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PLAYLIST_ITEMS_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "get_playlist_items",
            json!({"playlist_id": "PLOU2XLYxmsIIM9h1Ybw2DuRw6o2fkNMeR", "limit": 2}),
        )
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("1. **Episode 1** (`D-lhorsDlUQ`) by Google for Developers"));
    assert!(text.contains("2. **Episode 2** (`jHw7u9oXO2k`)"));
    assert!(text.contains("More items are available"));
}

#[tokio::test]
async fn tool_get_comment_threads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "D-lhorsDlUQ"))
        .and(query_param("order", "relevance"))
        .and(query_param("textFormat", "plainText"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(COMMENT_THREADS_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "get_comment_threads",
            json!({"video_id": "D-lhorsDlUQ", "order": "relevance"}),
        )
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("**Hieu Nguyen** (2019-03-28) - 1.2K likes, 2 replies"));
    assert!(text.contains("> super helpful\n> thanks"));
}

#[tokio::test]
async fn tool_search_youtube() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust"))
        .and(query_param("part", "snippet"))
        .and(query_param("maxResults", "3"))
        .and(query_param_is_missing("type"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("search_youtube", json!({"query": "rust", "limit": 3}))
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("[video] **Async Rust in depth** (`lJ3NC-R3gSI`) by Jon Gjengset"));
    assert!(text.contains("[channel] **Rust** (`UCaYhcUwRBNscFNUKTjgPFiA`)"));
    assert!(text.contains("[playlist] **Rust Programming**"));
    assert!(text.contains("About 1000000 results"));
}

#[tokio::test]
async fn tool_search_youtube_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "video"))
        .and(query_param("order", "viewCount"))
        .and(query_param("publishedAfter", "2024-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SEARCH_JSON, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "search_youtube",
            json!({
                "query": "rust",
                "kind": "video",
                "order": "view_count",
                "published_after": "2024-01-01T00:00:00Z"
            }),
        )
        .await;

    assert!(!result.is_error);
}

#[tokio::test]
async fn tool_search_youtube_bad_timestamp() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let result = client
        .call_tool(
            "search_youtube",
            json!({"query": "rust", "published_after": "yesterday"}),
        )
        .await;

    assert!(result.all_text().contains("Invalid published_after"));
}

#[tokio::test]
async fn tool_get_video_categories() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videoCategories"))
        .and(query_param("regionCode", "US"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(CATEGORIES_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_video_categories", json!({"region_code": "US"}))
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("# Video Categories (US)"));
    assert!(text.contains("- **Sports** (id `17`)"));
    assert!(text.contains("- **Short Movies** (id `18`) - not assignable"));
}

#[tokio::test]
async fn tool_get_video_categories_by_ids_omits_region_heading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videoCategories"))
        .and(query_param("id", "17,18"))
        .and(query_param_is_missing("regionCode"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(CATEGORIES_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool(
            "get_video_categories",
            json!({"ids": ["17", "18"], "region_code": "US"}),
        )
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.starts_with("# Video Categories\n"));
    assert!(!text.contains("(US)"));
}

#[tokio::test]
async fn tool_get_video_categories_without_filter_is_error() {
    let server = MockServer::start().await;
    let mut client = initialized_client(&server).await;

    let result = client.call_tool("get_video_categories", json!({})).await;

    assert!(result.is_error);
}

#[tokio::test]
async fn tool_get_guide_categories() {
    let server = MockServer::start().await;
    mount_json(&server, "/guideCategories", GUIDE_CATEGORIES_JSON).await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_guide_categories", json!({"ids": ["GCQmVzdCBvZiBZb3VUdWJl"]}))
        .await;

    assert!(!result.is_error);
    assert!(result.all_text().contains("Best of YouTube"));
}

#[tokio::test]
async fn tool_get_regions_with_languages() {
    let server = MockServer::start().await;
    mount_json(&server, "/i18nRegions", REGIONS_JSON).await;
    mount_json(&server, "/i18nLanguages", LANGUAGES_JSON).await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("get_regions", json!({"include_languages": true}))
        .await;

    assert!(!result.is_error);
    let text = result.all_text();
    assert!(text.contains("# Regions (2)"));
    assert!(text.contains("- `JP` Japan"));
    assert!(text.contains("- `de` German"));
}

#[tokio::test]
async fn tool_api_error_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{ "reason": "quotaExceeded", "domain": "youtube.quota" }]
            }
        })))
        .mount(&server)
        .await;

    let mut client = initialized_client(&server).await;
    let result = client
        .call_tool("search_youtube", json!({"query": "rust"}))
        .await;

    assert!(result.is_error);
}

// ── Resource tests ─────────────────────────────────────────────────────────

#[tokio::test]
async fn resource_template_video() {
    let server = MockServer::start().await;
    mount_json(&server, "/videos", VIDEO_JSON).await;

    let mut client = initialized_client(&server).await;
    let result = client.read_resource("youtube://video/D-lhorsDlUQ").await;

    let text = result.first_text().expect("expected text content");
    assert!(text.contains("# What are Actions on Google"));
    assert!(text.contains("watch?v=D-lhorsDlUQ"));
}

#[tokio::test]
async fn resource_template_channel() {
    let server = MockServer::start().await;
    mount_json(&server, "/channels", CHANNEL_JSON).await;

    let mut client = initialized_client(&server).await;
    let result = client
        .read_resource("youtube://channel/UC_x5XG1OV2P6uZZ5FSM9Ttw")
        .await;

    let text = result.first_text().expect("expected text content");
    assert!(text.contains("# Google for Developers"));
    assert!(text.contains("**Videos:** 6.4K"));
}
