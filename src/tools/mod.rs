//! Tool definitions for YouTube Data API queries
//!
//! Each tool wraps one list endpoint and renders its response as markdown.

pub mod channel;
pub mod comment_threads;
pub mod guide_categories;
pub mod playlist_items;
pub mod playlists;
pub mod popular_videos;
pub mod regions;
pub mod search;
pub mod video_categories;
pub mod videos;
