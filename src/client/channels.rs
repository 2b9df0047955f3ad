//! Channel and channel section endpoints.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{Channel, ChannelListResponse, ChannelSection, ChannelSectionListResponse};

#[derive(Debug, Clone)]
enum ChannelFilter {
    Ids(Ids),
    Username(String),
    Handle(String),
    Mine,
}

/// Query for the `channels` endpoint.
#[derive(Debug, Clone)]
pub struct ChannelsQuery {
    filter: ChannelFilter,
    hl: Option<String>,
    parts: Option<Parts>,
    paging: Paging,
}

impl ChannelsQuery {
    fn new(filter: ChannelFilter) -> Self {
        Self {
            filter,
            hl: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(ChannelFilter::Ids(ids.into()))
    }

    /// Channel of a legacy YouTube username.
    pub fn for_username(username: &str) -> Self {
        Self::new(ChannelFilter::Username(username.to_string()))
    }

    /// Channel of a handle; the leading `@` is optional.
    pub fn for_handle(handle: &str) -> Self {
        Self::new(ChannelFilter::Handle(handle.to_string()))
    }

    /// The authorized user's channel.
    pub fn mine() -> Self {
        Self::new(ChannelFilter::Mine)
    }

    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for ChannelsQuery {
    type Item = Channel;

    fn resource(&self) -> Resource {
        Resource::Channels
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Channels, self.parts.as_ref())?,
        )];
        let missing = || {
            Error::MissingParams(
                "Specify at least one of id, forUsername, forHandle or mine".into(),
            )
        };
        match &self.filter {
            ChannelFilter::Ids(ids) if ids.is_empty() => return Err(missing()),
            ChannelFilter::Ids(ids) => params.push(("id".into(), ids.joined())),
            ChannelFilter::Username(name) if name.trim().is_empty() => return Err(missing()),
            ChannelFilter::Username(name) => params.push(("forUsername".into(), name.clone())),
            ChannelFilter::Handle(handle) if handle.trim_start_matches('@').trim().is_empty() => {
                return Err(missing());
            }
            ChannelFilter::Handle(handle) => params.push(("forHandle".into(), handle.clone())),
            ChannelFilter::Mine => params.push(("mine".into(), "true".into())),
        }
        if let Some(hl) = &self.hl {
            params.push(("hl".into(), hl.clone()));
        }
        self.paging.apply(Resource::Channels, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }

    fn requires_auth(&self) -> bool {
        matches!(self.filter, ChannelFilter::Mine)
    }
}

#[derive(Debug, Clone)]
enum SectionFilter {
    Ids(Ids),
    Channel(String),
    Mine,
}

/// Query for the `channelSections` endpoint.
#[derive(Debug, Clone)]
pub struct ChannelSectionsQuery {
    filter: SectionFilter,
    hl: Option<String>,
    parts: Option<Parts>,
}

impl ChannelSectionsQuery {
    fn new(filter: SectionFilter) -> Self {
        Self {
            filter,
            hl: None,
            parts: None,
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(SectionFilter::Ids(ids.into()))
    }

    pub fn by_channel(channel_id: &str) -> Self {
        Self::new(SectionFilter::Channel(channel_id.to_string()))
    }

    pub fn mine() -> Self {
        Self::new(SectionFilter::Mine)
    }

    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }
}

impl ListQuery for ChannelSectionsQuery {
    type Item = ChannelSection;

    fn resource(&self) -> Resource {
        Resource::ChannelSections
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::ChannelSections, self.parts.as_ref())?,
        )];
        match &self.filter {
            SectionFilter::Ids(ids) if ids.is_empty() => {
                return Err(Error::MissingParams(
                    "Specify at least one channel section id".into(),
                ));
            }
            SectionFilter::Ids(ids) => params.push(("id".into(), ids.joined())),
            SectionFilter::Channel(id) if id.trim().is_empty() => {
                return Err(Error::MissingParams("Specify a channelId".into()));
            }
            SectionFilter::Channel(id) => params.push(("channelId".into(), id.trim().to_string())),
            SectionFilter::Mine => params.push(("mine".into(), "true".into())),
        }
        if let Some(hl) = &self.hl {
            params.push(("hl".into(), hl.clone()));
        }
        Ok(params)
    }

    fn requires_auth(&self) -> bool {
        matches!(self.filter, SectionFilter::Mine)
    }
}

impl YouTubeClient {
    /// Get channels by id, username, handle, or the authorized user's own.
    pub async fn channels(&self, query: &ChannelsQuery) -> Result<ChannelListResponse, Error> {
        self.list(query).await
    }

    /// Get the sections shown on channel pages.
    pub async fn channel_sections(
        &self,
        query: &ChannelSectionsQuery,
    ) -> Result<ChannelSectionListResponse, Error> {
        self.list(query).await
    }
}
