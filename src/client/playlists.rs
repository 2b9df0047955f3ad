//! Playlist and playlist item endpoints.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{PlaylistItem, PlaylistItemListResponse, Playlist, PlaylistListResponse};

#[derive(Debug, Clone)]
enum PlaylistFilter {
    Ids(Ids),
    Channel(String),
    Mine,
}

/// Query for the `playlists` endpoint.
#[derive(Debug, Clone)]
pub struct PlaylistsQuery {
    filter: PlaylistFilter,
    hl: Option<String>,
    parts: Option<Parts>,
    paging: Paging,
}

impl PlaylistsQuery {
    fn new(filter: PlaylistFilter) -> Self {
        Self {
            filter,
            hl: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(PlaylistFilter::Ids(ids.into()))
    }

    /// Public playlists of a channel.
    pub fn by_channel(channel_id: &str) -> Self {
        Self::new(PlaylistFilter::Channel(channel_id.to_string()))
    }

    /// Playlists of the authorized user.
    pub fn mine() -> Self {
        Self::new(PlaylistFilter::Mine)
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

impl ListQuery for PlaylistsQuery {
    type Item = Playlist;

    fn resource(&self) -> Resource {
        Resource::Playlists
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Playlists, self.parts.as_ref())?,
        )];
        match &self.filter {
            PlaylistFilter::Ids(ids) if ids.is_empty() => {
                return Err(Error::MissingParams(
                    "Specify at least one of id, channelId or mine".into(),
                ));
            }
            PlaylistFilter::Ids(ids) => params.push(("id".into(), ids.joined())),
            PlaylistFilter::Channel(id) if id.trim().is_empty() => {
                return Err(Error::MissingParams(
                    "Specify at least one of id, channelId or mine".into(),
                ));
            }
            PlaylistFilter::Channel(id) => params.push(("channelId".into(), id.clone())),
            PlaylistFilter::Mine => params.push(("mine".into(), "true".into())),
        }
        if let Some(hl) = &self.hl {
            params.push(("hl".into(), hl.clone()));
        }
        self.paging.apply(Resource::Playlists, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }

    fn requires_auth(&self) -> bool {
        matches!(self.filter, PlaylistFilter::Mine)
    }
}

#[derive(Debug, Clone)]
enum ItemFilter {
    Ids(Ids),
    Playlist(String),
}

/// Query for the `playlistItems` endpoint.
#[derive(Debug, Clone)]
pub struct PlaylistItemsQuery {
    filter: ItemFilter,
    video_id: Option<String>,
    parts: Option<Parts>,
    paging: Paging,
}

impl PlaylistItemsQuery {
    fn new(filter: ItemFilter) -> Self {
        Self {
            filter,
            video_id: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    /// Items of a playlist, in playlist order.
    pub fn by_playlist(playlist_id: &str) -> Self {
        Self::new(ItemFilter::Playlist(playlist_id.to_string()))
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(ItemFilter::Ids(ids.into()))
    }

    /// Only items that hold this video.
    pub fn video_id(mut self, video_id: &str) -> Self {
        self.video_id = Some(video_id.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for PlaylistItemsQuery {
    type Item = PlaylistItem;

    fn resource(&self) -> Resource {
        Resource::PlaylistItems
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::PlaylistItems, self.parts.as_ref())?,
        )];
        let missing = || Error::MissingParams("Specify at least one of id or playlistId".into());
        match &self.filter {
            ItemFilter::Ids(ids) if ids.is_empty() => return Err(missing()),
            ItemFilter::Ids(ids) => params.push(("id".into(), ids.joined())),
            ItemFilter::Playlist(id) if id.trim().is_empty() => return Err(missing()),
            ItemFilter::Playlist(id) => params.push(("playlistId".into(), id.clone())),
        }
        if let Some(video_id) = &self.video_id {
            params.push(("videoId".into(), video_id.clone()));
        }
        self.paging.apply(Resource::PlaylistItems, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }
}

impl YouTubeClient {
    /// Get playlists by id, by channel, or the authorized user's own.
    pub async fn playlists(&self, query: &PlaylistsQuery) -> Result<PlaylistListResponse, Error> {
        self.list(query).await
    }

    /// Get the items of a playlist.
    pub async fn playlist_items(
        &self,
        query: &PlaylistItemsQuery,
    ) -> Result<PlaylistItemListResponse, Error> {
        self.list(query).await
    }
}
