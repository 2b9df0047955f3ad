//! Resource template for channel details
//!
//! Exposes a channel as markdown via URI template: youtube://channel/{id}

use std::collections::HashMap;
use std::sync::Arc;

use tower_mcp::protocol::{ReadResourceResult, ResourceContent};
use tower_mcp::resource::{ResourceTemplate, ResourceTemplateBuilder};

use crate::client::ChannelsQuery;
use crate::format::format_channel;
use crate::state::AppState;

pub fn build(state: Arc<AppState>) -> ResourceTemplate {
    ResourceTemplateBuilder::new("youtube://channel/{id}")
        .name("YouTube Channel")
        .description("Get statistics and description of a channel by id")
        .mime_type("text/markdown")
        .handler(move |uri: String, vars: HashMap<String, String>| {
            let state = state.clone();
            async move {
                let id = vars.get("id").cloned().unwrap_or_default();

                let query = ChannelsQuery::by_ids(id.as_str())
                    .parts(["id", "snippet", "statistics", "contentDetails"]);
                let response = state.client.channels(&query).await.map_err(|e| {
                    tower_mcp::Error::tool(format!("YouTube API error: {}", e))
                })?;

                let channel = response
                    .items
                    .first()
                    .ok_or_else(|| tower_mcp::Error::tool(format!("Channel {id} not found")))?;

                Ok(ReadResourceResult {
                    contents: vec![ResourceContent {
                        uri,
                        mime_type: Some("text/markdown".to_string()),
                        text: Some(format_channel(channel)),
                        blob: None,
                        meta: None,
                    }],
                    meta: None,
                })
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_state(base_url: &str) -> Arc<AppState> {
        Arc::new(AppState::with_base_url(base_url).unwrap())
    }

    const CHANNEL_JSON: &str = r#"{
        "kind": "youtube#channelListResponse",
        "pageInfo": { "totalResults": 1, "resultsPerPage": 5 },
        "items": [
            {
                "kind": "youtube#channel",
                "id": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "snippet": {
                    "title": "Google for Developers",
                    "description": "Subscribe to join a community of creative developers.",
                    "customUrl": "@googledevelopers",
                    "publishedAt": "2007-08-23T00:34:43Z",
                    "country": "US"
                },
                "contentDetails": {
                    "relatedPlaylists": { "likes": "", "uploads": "UU_x5XG1OV2P6uZZ5FSM9Ttw" }
                },
                "statistics": {
                    "viewCount": "252318477",
                    "subscriberCount": "2460000",
                    "hiddenSubscriberCount": false,
                    "videoCount": "6427"
                }
            }
        ]
    }"#;

    #[tokio::test]
    async fn channel_resource_returns_content() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .and(query_param("id", "UC_x5XG1OV2P6uZZ5FSM9Ttw"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(CHANNEL_JSON, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let template = build(test_state(&server.uri()));

        let vars = HashMap::from([("id".to_string(), "UC_x5XG1OV2P6uZZ5FSM9Ttw".to_string())]);
        let result = template
            .read("youtube://channel/UC_x5XG1OV2P6uZZ5FSM9Ttw", vars)
            .await
            .unwrap();

        let text = result.contents[0].text.as_deref().unwrap();
        assert!(text.contains("# Google for Developers"));
        assert!(text.contains("**Handle:** @googledevelopers"));
        assert!(text.contains("**Subscribers:** 2.5M"));
        assert!(text.contains("**Videos:** 6.4K"));
        assert!(text.contains("**Uploads playlist:** `UU_x5XG1OV2P6uZZ5FSM9Ttw`"));
    }

    #[tokio::test]
    async fn channel_resource_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels"))
            .respond_with(ResponseTemplate::new(403).set_body_raw(
                r#"{"error": {"code": 403, "message": "quota", "errors": [{"reason": "quotaExceeded"}]}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let template = build(test_state(&server.uri()));

        let vars = HashMap::from([("id".to_string(), "UC1".to_string())]);
        let result = template.read("youtube://channel/UC1", vars).await;

        assert!(result.is_err());
    }

    #[test]
    fn channel_template_definition() {
        let template = build(test_state("http://unused"));
        let def = template.definition();

        assert_eq!(def.uri_template, "youtube://channel/{id}");
        assert_eq!(def.name, "YouTube Channel");
        assert_eq!(
            def.description.as_deref(),
            Some("Get statistics and description of a channel by id")
        );
    }
}
