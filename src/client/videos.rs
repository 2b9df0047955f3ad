//! Video endpoints.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{Video, VideoListResponse};

/// A rating the authorized user gave to videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Like,
    Dislike,
}

impl Rating {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Rating::Like => "like",
            Rating::Dislike => "dislike",
        }
    }
}

#[derive(Debug, Clone)]
enum VideoFilter {
    Ids(Ids),
    MostPopular,
    MyRating(Rating),
}

/// Query for the `videos` endpoint.
#[derive(Debug, Clone)]
pub struct VideosQuery {
    filter: VideoFilter,
    region_code: Option<String>,
    video_category_id: Option<String>,
    hl: Option<String>,
    max_height: Option<u32>,
    max_width: Option<u32>,
    parts: Option<Parts>,
    paging: Paging,
}

impl VideosQuery {
    fn new(filter: VideoFilter) -> Self {
        Self {
            filter,
            region_code: None,
            video_category_id: None,
            hl: None,
            max_height: None,
            max_width: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    /// Videos with the given id(s).
    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(VideoFilter::Ids(ids.into()))
    }

    /// The most popular videos chart.
    pub fn most_popular() -> Self {
        Self::new(VideoFilter::MostPopular)
    }

    /// Videos the authorized user liked or disliked.
    pub fn my_rating(rating: Rating) -> Self {
        Self::new(VideoFilter::MyRating(rating))
    }

    /// Chart region; only valid with [`VideosQuery::most_popular`].
    pub fn region_code(mut self, code: &str) -> Self {
        self.region_code = Some(code.to_string());
        self
    }

    /// Chart category; only valid with [`VideosQuery::most_popular`].
    pub fn video_category_id(mut self, id: &str) -> Self {
        self.video_category_id = Some(id.to_string());
        self
    }

    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }

    /// Maximum height of the embedded player.
    pub fn max_height(mut self, px: u32) -> Self {
        self.max_height = Some(px);
        self
    }

    /// Maximum width of the embedded player.
    pub fn max_width(mut self, px: u32) -> Self {
        self.max_width = Some(px);
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for VideosQuery {
    type Item = Video;

    fn resource(&self) -> Resource {
        Resource::Videos
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Videos, self.parts.as_ref())?,
        )];

        let is_chart = matches!(self.filter, VideoFilter::MostPopular);
        if !is_chart && (self.region_code.is_some() || self.video_category_id.is_some()) {
            return Err(Error::InvalidParams(
                "regionCode and videoCategoryId only apply to the mostPopular chart".into(),
            ));
        }

        match &self.filter {
            VideoFilter::Ids(ids) => {
                if ids.is_empty() {
                    return Err(Error::MissingParams("Specify at least one video id".into()));
                }
                params.push(("id".into(), ids.joined()));
            }
            VideoFilter::MostPopular => {
                params.push(("chart".into(), "mostPopular".into()));
                if let Some(code) = &self.region_code {
                    params.push(("regionCode".into(), code.clone()));
                }
                if let Some(id) = &self.video_category_id {
                    params.push(("videoCategoryId".into(), id.clone()));
                }
            }
            VideoFilter::MyRating(rating) => {
                params.push(("myRating".into(), rating.as_str().into()));
            }
        }

        if let Some(hl) = &self.hl {
            params.push(("hl".into(), hl.clone()));
        }
        if let Some(h) = self.max_height {
            params.push(("maxHeight".into(), h.to_string()));
        }
        if let Some(w) = self.max_width {
            params.push(("maxWidth".into(), w.to_string()));
        }
        // maxResults is not accepted together with id
        if !matches!(self.filter, VideoFilter::Ids(_)) {
            self.paging.apply(Resource::Videos, &mut params)?;
        }
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        match self.filter {
            VideoFilter::Ids(_) => None,
            _ => self.paging.count,
        }
    }

    fn requires_auth(&self) -> bool {
        matches!(self.filter, VideoFilter::MyRating(_))
    }
}

impl YouTubeClient {
    /// Get videos by id, from the popular chart, or by the user's rating.
    pub async fn videos(&self, query: &VideosQuery) -> Result<VideoListResponse, Error> {
        self.list(query).await
    }
}
