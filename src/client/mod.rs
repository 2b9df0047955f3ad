//! YouTube Data API v3 client
//!
//! Async client for the YouTube Data API, built on reqwest. Every list
//! endpoint can be read either as typed models ([`YouTubeClient::list`]) or
//! as the raw JSON document ([`YouTubeClient::list_json`]).

pub mod duration;
pub mod error;
pub mod params;
pub mod query;
pub mod types;
pub(crate) mod wire;

mod activities;
mod captions;
mod categories;
mod channels;
mod comments;
mod i18n;
mod playlists;
mod search;
mod subscriptions;
mod videos;


use std::time::Duration;

use serde_json::Value;

pub use activities::ActivitiesQuery;
pub use captions::CaptionsQuery;
pub use categories::CategoriesQuery;
pub use channels::{ChannelSectionsQuery, ChannelsQuery};
pub use comments::{CommentOrder, CommentThreadsQuery, CommentsQuery, TextFormat};
pub use error::Error;
pub use i18n::{I18nLanguagesQuery, I18nRegionsQuery};
pub use params::{Ids, Parts, Resource};
pub use playlists::{PlaylistItemsQuery, PlaylistsQuery};
pub use query::ListQuery;
pub use search::{EventType, SafeSearch, SearchOrder, SearchQuery, SearchType};
pub use subscriptions::{SubscriptionOrder, SubscriptionsQuery};
pub use types::*;
pub use videos::{Rating, VideosQuery};

use params::QueryParams;
use wire::ErrorResponse;

/// Production endpoint of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

// ── Credentials ─────────────────────────────────────────────────────────────

/// How requests are authenticated.
///
/// An API key covers public data. Requests about the signed-in user
/// (`mine`, `myRating`, `forMine`) need an OAuth access token obtained
/// elsewhere.
#[derive(Clone)]
pub enum Credentials {
    ApiKey(String),
    AccessToken(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.debug_tuple("ApiKey").field(&"[REDACTED]").finish(),
            Credentials::AccessToken(_) => f
                .debug_tuple("AccessToken")
                .field(&"[REDACTED]")
                .finish(),
        }
    }
}

impl Credentials {
    fn secret(&self) -> &str {
        match self {
            Credentials::ApiKey(s) | Credentials::AccessToken(s) => s,
        }
    }
}

// ── Client ──────────────────────────────────────────────────────────────────

/// Async client for the YouTube Data API.
#[derive(Debug)]
pub struct YouTubeClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    timeout: Option<Duration>,
}

impl YouTubeClient {
    /// Create a client against the production API.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing).
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
        if credentials.secret().trim().is_empty() {
            return Err(Error::MissingParams(
                "Specify an API key or an access token".into(),
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("youtube-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            timeout: None,
        })
    }

    /// Abort requests that take longer than `timeout`.
    ///
    /// Returns `self` for builder-style chaining.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn has_access_token(&self) -> bool {
        matches!(self.credentials, Credentials::AccessToken(_))
    }

    // ── HTTP helpers ────────────────────────────────────────────────────

    /// Send a GET request for `resource` and check the response status.
    pub(crate) async fn send_query(
        &self,
        resource: Resource,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, Error> {
        let url = format!("{}/{}", self.base_url, resource.as_str());
        let mut req = self.http.get(&url).query(query);
        req = match &self.credentials {
            Credentials::ApiKey(key) => req.query(&[("key", key.as_str())]),
            Credentials::AccessToken(token) => req.bearer_auth(token),
        };
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        tracing::debug!(%resource, "YouTube API request");
        let resp = req.send().await?;
        Self::check_status(resp, resource).await
    }

    /// Map non-success HTTP status codes to typed errors.
    ///
    /// Google wraps failures as `{"error": {"code", "message", "errors": [{"reason"}]}}`.
    pub(crate) async fn check_status(
        resp: reqwest::Response,
        resource: Resource,
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        let (reason, message) = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => (
                body.error
                    .errors
                    .first()
                    .and_then(|e| e.reason.clone())
                    .unwrap_or_else(|| "unknown".into()),
                body.error.message.unwrap_or(text),
            ),
            Err(_) => ("unknown".into(), text),
        };
        tracing::warn!(%resource, status = status.as_u16(), %reason, "YouTube API error");

        Err(match status {
            reqwest::StatusCode::UNAUTHORIZED => Error::Unauthorized,
            reqwest::StatusCode::FORBIDDEN => Error::Forbidden { reason, message },
            reqwest::StatusCode::NOT_FOUND => Error::NotFound(format!("{resource}: {message}")),
            _ => Error::Api {
                status: status.as_u16(),
                reason,
                message,
            },
        })
    }

    /// GET one page of `resource` as raw JSON.
    pub(crate) async fn get_page(
        &self,
        resource: Resource,
        query: &[(String, String)],
    ) -> Result<Value, Error> {
        let resp = self.send_query(resource, query).await?;
        Ok(resp.json().await?)
    }

    // ── Return modes ────────────────────────────────────────────────────

    /// Run a list query and return the decoded response.
    pub async fn list<Q: ListQuery>(&self, query: &Q) -> Result<ListResponse<Q::Item>, Error> {
        let raw = self.list_json(query).await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Run a list query and return the response document untouched.
    ///
    /// When the query asks for a total count, the items of every fetched page
    /// are concatenated into the first page's `items`.
    pub async fn list_json<Q: ListQuery>(&self, query: &Q) -> Result<Value, Error> {
        if query.requires_auth() && !self.has_access_token() {
            return Err(Error::NeedAuthorization);
        }
        let resource = query.resource();
        let mut params = query.to_params()?;

        let Some(count) = query.total_count() else {
            return self.get_page(resource, &params).await;
        };
        if count == 0 {
            return Err(Error::InvalidParams("count must be at least 1".into()));
        }
        let wanted = count as usize;

        if !params.iter().any(|(k, _)| k == "maxResults") {
            let per_page = count.min(resource.max_results_limit());
            params.push(("maxResults".into(), per_page.to_string()));
        }

        let mut first = self.get_page(resource, &params).await?;
        let mut items = take_items(&mut first);
        let mut next = next_page_token(&first);
        let mut pages = 1;

        while items.len() < wanted {
            let Some(token) = next.take() else { break };
            let page_params = with_page_token(&params, token);
            let mut page = self.get_page(resource, &page_params).await?;
            let page_items = take_items(&mut page);
            pages += 1;
            next = next_page_token(&page);
            if page_items.is_empty() {
                break;
            }
            items.extend(page_items);
        }
        items.truncate(wanted);
        tracing::debug!(%resource, pages, items = items.len(), "Gathered paged results");

        if let Some(obj) = first.as_object_mut() {
            obj.insert("items".into(), Value::Array(items));
            match next {
                Some(token) => obj.insert("nextPageToken".into(), Value::String(token)),
                None => obj.remove("nextPageToken"),
            };
        }
        Ok(first)
    }
}

fn take_items(page: &mut Value) -> Vec<Value> {
    match page.get_mut("items").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn next_page_token(page: &Value) -> Option<String> {
    page.get("nextPageToken")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn with_page_token(params: &QueryParams, token: String) -> QueryParams {
    let mut params: QueryParams = params
        .iter()
        .filter(|(k, _)| k != "pageToken")
        .cloned()
        .collect();
    params.push(("pageToken".into(), token));
    params
}
