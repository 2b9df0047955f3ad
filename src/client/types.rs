//! Public data types for the YouTube Data API.
//!
//! Every list endpoint answers with the same envelope, [`ListResponse`],
//! wrapping resource-specific items. Parts that were not requested are
//! simply absent, so nearly every section is an `Option`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::duration;
use super::error::Error;

/// The API encodes most counters as decimal strings (`"viewCount": "1234"`).
fn string_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Str(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ── Envelope ────────────────────────────────────────────────────────────────

/// Response envelope shared by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    /// Only present on search responses.
    pub region_code: Option<String>,
    pub page_info: Option<PageInfo>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Paging summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: Option<u64>,
    pub results_per_page: Option<u64>,
}

// ── Shared pieces ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Thumbnail images keyed by size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// The largest thumbnail available.
    pub fn best(&self) -> Option<&Thumbnail> {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .or(self.high.as_ref())
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }
}

/// Title and description in the requested `hl` language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localized {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Points at the video, channel, or playlist a snippet refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub playlist_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDetails {
    #[serde(default)]
    pub topic_ids: Vec<String>,
    #[serde(default)]
    pub topic_categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub embed_html: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyStatus {
    pub privacy_status: Option<String>,
}

// ── Categories ──────────────────────────────────────────────────────────────

/// A video category or a (deprecated) guide category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<CategorySnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySnippet {
    pub title: Option<String>,
    pub channel_id: Option<String>,
    /// Video categories only: whether uploads can be assigned to it.
    pub assignable: Option<bool>,
}

// ── Videos ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<VideoSnippet>,
    pub content_details: Option<VideoContentDetails>,
    pub statistics: Option<VideoStatistics>,
    pub status: Option<VideoStatus>,
    pub player: Option<Player>,
    pub topic_details: Option<TopicDetails>,
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: Option<String>,
    pub live_broadcast_content: Option<String>,
    pub default_language: Option<String>,
    pub default_audio_language: Option<String>,
    pub localized: Option<Localized>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// ISO 8601 duration, e.g. `PT4M13S`.
    pub duration: Option<String>,
    pub dimension: Option<String>,
    pub definition: Option<String>,
    pub caption: Option<String>,
    pub licensed_content: Option<bool>,
    pub projection: Option<String>,
}

impl VideoContentDetails {
    /// Video length in seconds, if the duration part was returned.
    pub fn duration_seconds(&self) -> Result<Option<u64>, Error> {
        self.duration
            .as_deref()
            .map(duration::parse_seconds)
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "string_u64")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub dislike_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub favorite_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub comment_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub upload_status: Option<String>,
    pub privacy_status: Option<String>,
    pub license: Option<String>,
    pub embeddable: Option<bool>,
    pub public_stats_viewable: Option<bool>,
    pub made_for_kids: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamingDetails {
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub scheduled_end_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "string_u64")]
    pub concurrent_viewers: Option<u64>,
}

// ── Captions ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caption {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<CaptionSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSnippet {
    pub video_id: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub track_kind: Option<String>,
    pub language: Option<String>,
    pub name: Option<String>,
    pub audio_track_type: Option<String>,
    pub is_cc: Option<bool>,
    pub is_large: Option<bool>,
    pub is_easy_reader: Option<bool>,
    pub is_draft: Option<bool>,
    pub is_auto_synced: Option<bool>,
    pub status: Option<String>,
}

// ── Channels ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<ChannelSnippet>,
    pub content_details: Option<ChannelContentDetails>,
    pub statistics: Option<ChannelStatistics>,
    pub status: Option<ChannelStatus>,
    pub topic_details: Option<TopicDetails>,
    pub branding_settings: Option<BrandingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnails: Option<Thumbnails>,
    pub default_language: Option<String>,
    pub localized: Option<Localized>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: Option<RelatedPlaylists>,
}

/// Playlists every channel owns implicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    pub likes: Option<String>,
    pub uploads: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "string_u64")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub subscriber_count: Option<u64>,
    pub hidden_subscriber_count: Option<bool>,
    #[serde(default, deserialize_with = "string_u64")]
    pub video_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    pub privacy_status: Option<String>,
    pub is_linked: Option<bool>,
    pub long_uploads_status: Option<String>,
    pub made_for_kids: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingSettings {
    pub channel: Option<ChannelBranding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBranding {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub unsubscribed_trailer: Option<String>,
    pub country: Option<String>,
}

/// A shelf on a channel page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSection {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<ChannelSectionSnippet>,
    pub content_details: Option<ChannelSectionContentDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSectionSnippet {
    #[serde(rename = "type")]
    pub section_type: Option<String>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSectionContentDetails {
    #[serde(default)]
    pub playlists: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

// ── Playlists ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<PlaylistSnippet>,
    pub content_details: Option<PlaylistContentDetails>,
    pub status: Option<PrivacyStatus>,
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    pub default_language: Option<String>,
    pub localized: Option<Localized>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    #[serde(default, deserialize_with = "string_u64")]
    pub item_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<PlaylistItemSnippet>,
    pub content_details: Option<PlaylistItemContentDetails>,
    pub status: Option<PrivacyStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    pub playlist_id: Option<String>,
    pub position: Option<u64>,
    pub resource_id: Option<ResourceId>,
    pub video_owner_channel_title: Option<String>,
    pub video_owner_channel_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: Option<String>,
    pub video_published_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

// ── Comments ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<CommentThreadSnippet>,
    pub replies: Option<CommentThreadReplies>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub top_level_comment: Option<Comment>,
    pub can_reply: Option<bool>,
    #[serde(default, deserialize_with = "string_u64")]
    pub total_reply_count: Option<u64>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThreadReplies {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<CommentSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: Option<String>,
    pub author_profile_image_url: Option<String>,
    pub author_channel_url: Option<String>,
    pub author_channel_id: Option<AuthorChannelId>,
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub text_display: Option<String>,
    pub text_original: Option<String>,
    pub parent_id: Option<String>,
    pub can_rate: Option<bool>,
    pub viewer_rating: Option<String>,
    #[serde(default, deserialize_with = "string_u64")]
    pub like_count: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorChannelId {
    pub value: Option<String>,
}

// ── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: ResourceId,
    pub snippet: Option<SearchResultSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    pub live_broadcast_content: Option<String>,
}

// ── Subscriptions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<SubscriptionSnippet>,
    pub content_details: Option<SubscriptionContentDetails>,
    pub subscriber_snippet: Option<SubscriberSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_title: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub resource_id: Option<ResourceId>,
    pub channel_id: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionContentDetails {
    #[serde(default, deserialize_with = "string_u64")]
    pub total_item_count: Option<u64>,
    #[serde(default, deserialize_with = "string_u64")]
    pub new_item_count: Option<u64>,
    pub activity_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberSnippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

// ── Activities ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<ActivitySnippet>,
    /// Shape depends on the activity type, so it is kept as raw JSON.
    pub content_details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnippet {
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub group_id: Option<String>,
}

// ── i18n ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nRegion {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<I18nRegionSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nRegionSnippet {
    pub gl: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nLanguage {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: String,
    pub snippet: Option<I18nLanguageSnippet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nLanguageSnippet {
    pub hl: Option<String>,
    pub name: Option<String>,
}

// ── Response aliases ────────────────────────────────────────────────────────

pub type CategoryListResponse = ListResponse<Category>;
pub type VideoListResponse = ListResponse<Video>;
pub type CaptionListResponse = ListResponse<Caption>;
pub type ChannelListResponse = ListResponse<Channel>;
pub type ChannelSectionListResponse = ListResponse<ChannelSection>;
pub type PlaylistListResponse = ListResponse<Playlist>;
pub type PlaylistItemListResponse = ListResponse<PlaylistItem>;
pub type CommentThreadListResponse = ListResponse<CommentThread>;
pub type CommentListResponse = ListResponse<Comment>;
pub type SearchListResponse = ListResponse<SearchResult>;
pub type SubscriptionListResponse = ListResponse<Subscription>;
pub type ActivityListResponse = ListResponse<Activity>;
pub type I18nRegionListResponse = ListResponse<I18nRegion>;
pub type I18nLanguageListResponse = ListResponse<I18nLanguage>;
