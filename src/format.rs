//! Format YouTube resources into LLM-readable markdown text.

use crate::client::{Category, Channel, Video};
use crate::state::{format_duration, format_number};

const DESCRIPTION_LIMIT: usize = 500;

/// Full markdown page for one video.
pub fn format_video(video: &Video) -> String {
    let snippet = video.snippet.as_ref();
    let title = snippet
        .and_then(|s| s.title.as_deref())
        .unwrap_or("(untitled)");

    let mut output = format!("# {title}\n\n");

    if let Some(s) = snippet {
        if let Some(channel) = &s.channel_title {
            output.push_str(&format!("**Channel:** {channel}"));
            if let Some(id) = &s.channel_id {
                output.push_str(&format!(" (`{id}`)"));
            }
            output.push('\n');
        }
        if let Some(at) = s.published_at {
            output.push_str(&format!("**Published:** {}\n", at.date_naive()));
        }
        if let Some(cat) = &s.category_id {
            output.push_str(&format!("**Category:** {cat}\n"));
        }
    }

    if let Some(details) = &video.content_details {
        if let Ok(Some(secs)) = details.duration_seconds() {
            output.push_str(&format!("**Duration:** {}\n", format_duration(secs)));
        }
        if let Some(def) = &details.definition {
            output.push_str(&format!("**Definition:** {}\n", def.to_uppercase()));
        }
    }

    if let Some(stats) = &video.statistics {
        output.push_str("\n## Stats\n\n");
        if let Some(n) = stats.view_count {
            output.push_str(&format!("- **Views:** {}\n", format_number(n)));
        }
        if let Some(n) = stats.like_count {
            output.push_str(&format!("- **Likes:** {}\n", format_number(n)));
        }
        if let Some(n) = stats.comment_count {
            output.push_str(&format!("- **Comments:** {}\n", format_number(n)));
        }
    }

    if let Some(s) = snippet {
        if !s.tags.is_empty() {
            output.push_str(&format!("\n**Tags:** {}\n", s.tags.join(", ")));
        }
        if let Some(desc) = s.description.as_deref().map(str::trim)
            && !desc.is_empty()
        {
            output.push_str(&format!("\n## Description\n\n{}\n", truncate(desc)));
        }
    }

    output.push_str(&format!(
        "\n**Watch:** https://www.youtube.com/watch?v={}\n",
        video.id
    ));
    output
}

/// One bullet line for a video in a listing.
pub fn format_video_line(video: &Video) -> String {
    let snippet = video.snippet.as_ref();
    let title = snippet
        .and_then(|s| s.title.as_deref())
        .unwrap_or("(untitled)");
    let mut line = format!("- **{title}** (`{}`)", video.id);
    if let Some(channel) = snippet.and_then(|s| s.channel_title.as_deref()) {
        line.push_str(&format!(" by {channel}"));
    }
    if let Some(views) = video.statistics.as_ref().and_then(|s| s.view_count) {
        line.push_str(&format!(" - {} views", format_number(views)));
    }
    if let Some(Ok(Some(secs))) = video
        .content_details
        .as_ref()
        .map(|d| d.duration_seconds())
    {
        line.push_str(&format!(" [{}]", format_duration(secs)));
    }
    line.push('\n');
    line
}

/// Full markdown page for one channel.
pub fn format_channel(channel: &Channel) -> String {
    let snippet = channel.snippet.as_ref();
    let title = snippet
        .and_then(|s| s.title.as_deref())
        .unwrap_or("(untitled)");

    let mut output = format!("# {title}\n\n");
    output.push_str(&format!("**ID:** `{}`\n", channel.id));

    if let Some(s) = snippet {
        if let Some(url) = &s.custom_url {
            output.push_str(&format!("**Handle:** {url}\n"));
        }
        if let Some(at) = s.published_at {
            output.push_str(&format!("**Created:** {}\n", at.date_naive()));
        }
        if let Some(country) = &s.country {
            output.push_str(&format!("**Country:** {country}\n"));
        }
    }

    if let Some(stats) = &channel.statistics {
        output.push_str("\n## Stats\n\n");
        if stats.hidden_subscriber_count == Some(true) {
            output.push_str("- **Subscribers:** hidden\n");
        } else if let Some(n) = stats.subscriber_count {
            output.push_str(&format!("- **Subscribers:** {}\n", format_number(n)));
        }
        if let Some(n) = stats.video_count {
            output.push_str(&format!("- **Videos:** {}\n", format_number(n)));
        }
        if let Some(n) = stats.view_count {
            output.push_str(&format!("- **Views:** {}\n", format_number(n)));
        }
    }

    if let Some(uploads) = channel
        .content_details
        .as_ref()
        .and_then(|d| d.related_playlists.as_ref())
        .and_then(|p| p.uploads.as_deref())
    {
        output.push_str(&format!("\n**Uploads playlist:** `{uploads}`\n"));
    }

    if let Some(desc) = snippet
        .and_then(|s| s.description.as_deref())
        .map(str::trim)
        && !desc.is_empty()
    {
        output.push_str(&format!("\n## Description\n\n{}\n", truncate(desc)));
    }

    output.push_str(&format!(
        "\n**Browse:** https://www.youtube.com/channel/{}\n",
        channel.id
    ));
    output
}

/// One bullet line for a video or guide category.
pub fn format_category_line(category: &Category) -> String {
    let snippet = category.snippet.as_ref();
    let title = snippet
        .and_then(|s| s.title.as_deref())
        .unwrap_or("(untitled)");
    let mut line = format!("- **{title}** (id `{}`)", category.id);
    if snippet.and_then(|s| s.assignable) == Some(false) {
        line.push_str(" - not assignable");
    }
    line.push('\n');
    line
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_LIMIT {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(json: serde_json::Value) -> Video {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn video_page_includes_stats_and_link() {
        let v = video(serde_json::json!({
            "id": "D-lhorsDlUQ",
            "snippet": {
                "title": "What are Actions on Google",
                "channelTitle": "Google Developers",
                "channelId": "UC_x5XG1OV2P6uZZ5FSM9Ttw",
                "publishedAt": "2019-03-21T20:37:49Z",
                "tags": ["Google", "aog"]
            },
            "contentDetails": { "duration": "PT7M52S", "definition": "hd" },
            "statistics": { "viewCount": "7920", "likeCount": "295" }
        }));

        let text = format_video(&v);
        assert!(text.starts_with("# What are Actions on Google\n"));
        assert!(text.contains("**Channel:** Google Developers (`UC_x5XG1OV2P6uZZ5FSM9Ttw`)"));
        assert!(text.contains("**Published:** 2019-03-21"));
        assert!(text.contains("**Duration:** 7:52"));
        assert!(text.contains("**Definition:** HD"));
        assert!(text.contains("**Views:** 7.9K"));
        assert!(text.contains("**Tags:** Google, aog"));
        assert!(text.contains("watch?v=D-lhorsDlUQ"));
        assert!(!text.contains("## Description"));
    }

    #[test]
    fn video_line_without_parts() {
        let v = video(serde_json::json!({ "id": "abc" }));
        assert_eq!(format_video_line(&v), "- **(untitled)** (`abc`)\n");
    }

    #[test]
    fn channel_hidden_subscribers() {
        let c: Channel = serde_json::from_value(serde_json::json!({
            "id": "UC1",
            "snippet": { "title": "Quiet", "customUrl": "@quiet" },
            "statistics": {
                "subscriberCount": "0",
                "hiddenSubscriberCount": true,
                "videoCount": "12"
            }
        }))
        .unwrap();

        let text = format_channel(&c);
        assert!(text.contains("**Handle:** @quiet"));
        assert!(text.contains("**Subscribers:** hidden"));
        assert!(text.contains("**Videos:** 12"));
    }

    #[test]
    fn long_descriptions_truncated() {
        let long = "a".repeat(DESCRIPTION_LIMIT + 10);
        let out = truncate(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), DESCRIPTION_LIMIT + 3);
    }
}
