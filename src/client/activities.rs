//! Channel activity endpoint.

use chrono::{DateTime, SecondsFormat, Utc};

use super::YouTubeClient;
use super::error::Error;
use super::params::{Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{Activity, ActivityListResponse};

#[derive(Debug, Clone)]
enum ActivityFilter {
    Channel(String),
    Mine,
}

/// Query for the `activities` endpoint.
#[derive(Debug, Clone)]
pub struct ActivitiesQuery {
    filter: ActivityFilter,
    published_after: Option<DateTime<Utc>>,
    published_before: Option<DateTime<Utc>>,
    region_code: Option<String>,
    parts: Option<Parts>,
    paging: Paging,
}

impl ActivitiesQuery {
    fn new(filter: ActivityFilter) -> Self {
        Self {
            filter,
            published_after: None,
            published_before: None,
            region_code: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_channel(channel_id: &str) -> Self {
        Self::new(ActivityFilter::Channel(channel_id.to_string()))
    }

    pub fn mine() -> Self {
        Self::new(ActivityFilter::Mine)
    }

    pub fn published_after(mut self, at: DateTime<Utc>) -> Self {
        self.published_after = Some(at);
        self
    }

    pub fn published_before(mut self, at: DateTime<Utc>) -> Self {
        self.published_before = Some(at);
        self
    }

    pub fn region_code(mut self, code: &str) -> Self {
        self.region_code = Some(code.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for ActivitiesQuery {
    type Item = Activity;

    fn resource(&self) -> Resource {
        Resource::Activities
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Activities, self.parts.as_ref())?,
        )];
        match &self.filter {
            ActivityFilter::Channel(id) if id.trim().is_empty() => {
                return Err(Error::MissingParams(
                    "Specify at least one of channelId or mine".into(),
                ));
            }
            ActivityFilter::Channel(id) => params.push(("channelId".into(), id.clone())),
            ActivityFilter::Mine => params.push(("mine".into(), "true".into())),
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
        if let Some(code) = &self.region_code {
            params.push(("regionCode".into(), code.clone()));
        }
        self.paging.apply(Resource::Activities, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }

    fn requires_auth(&self) -> bool {
        matches!(self.filter, ActivityFilter::Mine)
    }
}

impl YouTubeClient {
    /// Get uploads, likes, and other events of a channel.
    pub async fn activities(&self, query: &ActivitiesQuery) -> Result<ActivityListResponse, Error> {
        self.list(query).await
    }
}
