//! Comment thread and comment endpoints.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{Comment, CommentListResponse, CommentThread, CommentThreadListResponse};

/// Sort order for comment threads.
#[derive(Debug, Clone, Copy)]
pub enum CommentOrder {
    Time,
    Relevance,
}

impl CommentOrder {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            CommentOrder::Time => "time",
            CommentOrder::Relevance => "relevance",
        }
    }
}

/// Format of `textDisplay` in returned comments.
#[derive(Debug, Clone, Copy)]
pub enum TextFormat {
    Html,
    PlainText,
}

impl TextFormat {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            TextFormat::Html => "html",
            TextFormat::PlainText => "plainText",
        }
    }
}

#[derive(Debug, Clone)]
enum ThreadFilter {
    Ids(Ids),
    Video(String),
    Channel(String),
    AllRelatedToChannel(String),
}

/// Query for the `commentThreads` endpoint.
#[derive(Debug, Clone)]
pub struct CommentThreadsQuery {
    filter: ThreadFilter,
    search_terms: Option<String>,
    order: Option<CommentOrder>,
    text_format: Option<TextFormat>,
    parts: Option<Parts>,
    paging: Paging,
}

impl CommentThreadsQuery {
    fn new(filter: ThreadFilter) -> Self {
        Self {
            filter,
            search_terms: None,
            order: None,
            text_format: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(ThreadFilter::Ids(ids.into()))
    }

    /// Threads on one video.
    pub fn for_video(video_id: &str) -> Self {
        Self::new(ThreadFilter::Video(video_id.to_string()))
    }

    /// Threads about the channel itself, not its videos.
    pub fn for_channel(channel_id: &str) -> Self {
        Self::new(ThreadFilter::Channel(channel_id.to_string()))
    }

    /// Threads on the channel and on any of its videos.
    pub fn all_related_to_channel(channel_id: &str) -> Self {
        Self::new(ThreadFilter::AllRelatedToChannel(channel_id.to_string()))
    }

    pub fn search_terms(mut self, terms: &str) -> Self {
        self.search_terms = Some(terms.to_string());
        self
    }

    pub fn order(mut self, order: CommentOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn text_format(mut self, format: TextFormat) -> Self {
        self.text_format = Some(format);
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for CommentThreadsQuery {
    type Item = CommentThread;

    fn resource(&self) -> Resource {
        Resource::CommentThreads
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::CommentThreads, self.parts.as_ref())?,
        )];
        let (name, value) = match &self.filter {
            ThreadFilter::Ids(ids) => ("id", ids.joined()),
            ThreadFilter::Video(id) => ("videoId", id.trim().to_string()),
            ThreadFilter::Channel(id) => ("channelId", id.trim().to_string()),
            ThreadFilter::AllRelatedToChannel(id) => {
                ("allThreadsRelatedToChannelId", id.trim().to_string())
            }
        };
        if value.is_empty() {
            return Err(Error::MissingParams(format!(
                "Specify at least one of id, videoId, channelId or \
                 allThreadsRelatedToChannelId (got empty {name})"
            )));
        }
        params.push((name.into(), value));

        if let Some(terms) = &self.search_terms {
            params.push(("searchTerms".into(), terms.clone()));
        }
        if let Some(order) = self.order {
            params.push(("order".into(), order.as_str().into()));
        }
        if let Some(format) = self.text_format {
            params.push(("textFormat".into(), format.as_str().into()));
        }
        // maxResults is not accepted together with id
        if !matches!(self.filter, ThreadFilter::Ids(_)) {
            self.paging.apply(Resource::CommentThreads, &mut params)?;
        }
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        match self.filter {
            ThreadFilter::Ids(_) => None,
            _ => self.paging.count,
        }
    }
}

#[derive(Debug, Clone)]
enum CommentFilter {
    Ids(Ids),
    Parent(String),
}

/// Query for the `comments` endpoint.
#[derive(Debug, Clone)]
pub struct CommentsQuery {
    filter: CommentFilter,
    text_format: Option<TextFormat>,
    parts: Option<Parts>,
    paging: Paging,
}

impl CommentsQuery {
    fn new(filter: CommentFilter) -> Self {
        Self {
            filter,
            text_format: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(CommentFilter::Ids(ids.into()))
    }

    /// Replies to a top-level comment.
    pub fn replies_to(parent_id: &str) -> Self {
        Self::new(CommentFilter::Parent(parent_id.to_string()))
    }

    pub fn text_format(mut self, format: TextFormat) -> Self {
        self.text_format = Some(format);
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for CommentsQuery {
    type Item = Comment;

    fn resource(&self) -> Resource {
        Resource::Comments
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Comments, self.parts.as_ref())?,
        )];
        let (name, value) = match &self.filter {
            CommentFilter::Ids(ids) => ("id", ids.joined()),
            CommentFilter::Parent(id) => ("parentId", id.trim().to_string()),
        };
        if value.is_empty() {
            return Err(Error::MissingParams(
                "Specify at least one of id or parentId".into(),
            ));
        }
        params.push((name.into(), value));

        if let Some(format) = self.text_format {
            params.push(("textFormat".into(), format.as_str().into()));
        }
        // maxResults is not accepted together with id
        if matches!(self.filter, CommentFilter::Parent(_)) {
            self.paging.apply(Resource::Comments, &mut params)?;
        }
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        match self.filter {
            CommentFilter::Parent(_) => self.paging.count,
            CommentFilter::Ids(_) => None,
        }
    }
}

impl YouTubeClient {
    /// Get comment threads by id, video, or channel.
    pub async fn comment_threads(
        &self,
        query: &CommentThreadsQuery,
    ) -> Result<CommentThreadListResponse, Error> {
        self.list(query).await
    }

    /// Get comments by id, or the replies to a comment.
    pub async fn comments(&self, query: &CommentsQuery) -> Result<CommentListResponse, Error> {
        self.list(query).await
    }
}
