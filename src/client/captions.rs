//! Caption track listing.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Parts, QueryParams, Resource, resolve_parts};
use super::query::ListQuery;
use super::types::{Caption, CaptionListResponse};

/// Query for the caption tracks of one video.
///
/// The endpoint only answers OAuth-authorized requests.
#[derive(Debug, Clone)]
pub struct CaptionsQuery {
    video_id: String,
    ids: Option<Ids>,
    parts: Option<Parts>,
}

impl CaptionsQuery {
    pub fn by_video(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            ids: None,
            parts: None,
        }
    }

    /// Only these caption tracks.
    pub fn ids(mut self, ids: impl Into<Ids>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }
}

impl ListQuery for CaptionsQuery {
    type Item = Caption;

    fn resource(&self) -> Resource {
        Resource::Captions
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        if self.video_id.trim().is_empty() {
            return Err(Error::MissingParams("Specify a videoId".into()));
        }
        let mut params: QueryParams = vec![
            (
                "part".into(),
                resolve_parts(Resource::Captions, self.parts.as_ref())?,
            ),
            ("videoId".into(), self.video_id.clone()),
        ];
        if let Some(ids) = self.ids.as_ref().filter(|ids| !ids.is_empty()) {
            params.push(("id".into(), ids.joined()));
        }
        Ok(params)
    }

    fn requires_auth(&self) -> bool {
        true
    }
}

impl YouTubeClient {
    pub async fn captions(&self, query: &CaptionsQuery) -> Result<CaptionListResponse, Error> {
        self.list(query).await
    }
}
