//! Search endpoint.

use chrono::{DateTime, SecondsFormat, Utc};

use super::YouTubeClient;
use super::error::Error;
use super::params::{Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{SearchListResponse, SearchResult};

/// Kind of resource a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Video,
    Channel,
    Playlist,
}

impl SearchType {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SearchType::Video => "video",
            SearchType::Channel => "channel",
            SearchType::Playlist => "playlist",
        }
    }
}

/// Sort order for search results.
#[derive(Debug, Clone, Copy)]
pub enum SearchOrder {
    Date,
    Rating,
    Relevance,
    Title,
    VideoCount,
    ViewCount,
}

impl SearchOrder {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::Relevance => "relevance",
            SearchOrder::Title => "title",
            SearchOrder::VideoCount => "videoCount",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SafeSearch {
    Moderate,
    None,
    Strict,
}

impl SafeSearch {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SafeSearch::Moderate => "moderate",
            SafeSearch::None => "none",
            SafeSearch::Strict => "strict",
        }
    }
}

/// Broadcast state filter; restricts results to videos.
#[derive(Debug, Clone, Copy)]
pub enum EventType {
    Completed,
    Live,
    Upcoming,
}

impl EventType {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            EventType::Completed => "completed",
            EventType::Live => "live",
            EventType::Upcoming => "upcoming",
        }
    }
}

/// Query for the `search` endpoint.
///
/// No filter is mandatory; an empty query returns whatever YouTube ranks
/// highest.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    q: Option<String>,
    channel_id: Option<String>,
    types: Vec<SearchType>,
    order: Option<SearchOrder>,
    region_code: Option<String>,
    relevance_language: Option<String>,
    published_after: Option<DateTime<Utc>>,
    published_before: Option<DateTime<Utc>>,
    safe_search: Option<SafeSearch>,
    event_type: Option<EventType>,
    for_mine: bool,
    parts: Option<Parts>,
    paging: Paging,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query; supports `|` (OR) and `-` (NOT).
    pub fn q(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn channel_id(mut self, id: &str) -> Self {
        self.channel_id = Some(id.to_string());
        self
    }

    /// Restrict results to one kind; may be called repeatedly.
    pub fn kind(mut self, kind: SearchType) -> Self {
        if !self.types.contains(&kind) {
            self.types.push(kind);
        }
        self
    }

    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn region_code(mut self, code: &str) -> Self {
        self.region_code = Some(code.to_string());
        self
    }

    pub fn relevance_language(mut self, lang: &str) -> Self {
        self.relevance_language = Some(lang.to_string());
        self
    }

    pub fn published_after(mut self, at: DateTime<Utc>) -> Self {
        self.published_after = Some(at);
        self
    }

    pub fn published_before(mut self, at: DateTime<Utc>) -> Self {
        self.published_before = Some(at);
        self
    }

    pub fn safe_search(mut self, level: SafeSearch) -> Self {
        self.safe_search = Some(level);
        self
    }

    pub fn event_type(mut self, event: EventType) -> Self {
        self.event_type = Some(event);
        self
    }

    /// Only the authorized user's own videos.
    pub fn for_mine(mut self) -> Self {
        self.for_mine = true;
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for SearchQuery {
    type Item = SearchResult;

    fn resource(&self) -> Resource {
        Resource::Search
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Search, self.parts.as_ref())?,
        )];

        let video_only = self.for_mine || self.event_type.is_some();
        if video_only && self.types.iter().any(|t| *t != SearchType::Video) {
            return Err(Error::InvalidParams(
                "forMine and eventType require type=video".into(),
            ));
        }
        if let (Some(after), Some(before)) = (self.published_after, self.published_before)
            && after > before
        {
            return Err(Error::InvalidParams(
                "publishedAfter must not be later than publishedBefore".into(),
            ));
        }

        if let Some(q) = &self.q {
            params.push(("q".into(), q.clone()));
        }
        if let Some(id) = &self.channel_id {
            params.push(("channelId".into(), id.clone()));
        }
        if self.for_mine {
            params.push(("forMine".into(), "true".into()));
        }
        if !self.types.is_empty() {
            let types: Vec<&str> = self.types.iter().map(SearchType::as_str).collect();
            params.push(("type".into(), types.join(",")));
        } else if video_only {
            params.push(("type".into(), "video".into()));
        }
        if let Some(event) = self.event_type {
            params.push(("eventType".into(), event.as_str().into()));
        }
        if let Some(order) = self.order {
            params.push(("order".into(), order.as_str().into()));
        }
        if let Some(code) = &self.region_code {
            params.push(("regionCode".into(), code.clone()));
        }
        if let Some(lang) = &self.relevance_language {
            params.push(("relevanceLanguage".into(), lang.clone()));
        }
        if let Some(at) = self.published_after {
            params.push((
                "publishedAfter".into(),
                at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(at) = self.published_before {
            params.push((
                "publishedBefore".into(),
                at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }
        if let Some(level) = self.safe_search {
            params.push(("safeSearch".into(), level.as_str().into()));
        }
        self.paging.apply(Resource::Search, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }

    fn requires_auth(&self) -> bool {
        self.for_mine
    }
}

impl YouTubeClient {
    /// Search videos, channels, and playlists.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchListResponse, Error> {
        self.list(query).await
    }
}
