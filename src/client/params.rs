//! API resources and caller-supplied parameter normalization.
//!
//! Callers may pass identifiers and parts either as a single string or as a
//! list. Both are normalized here before they reach the query string.

use std::fmt;
use std::str::FromStr;

use super::error::Error;

/// Ordered query string pairs sent with a request.
pub type QueryParams = Vec<(String, String)>;

// ── Resource ────────────────────────────────────────────────────────────────

/// A YouTube Data API list resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Activities,
    Captions,
    Channels,
    ChannelSections,
    Comments,
    CommentThreads,
    GuideCategories,
    I18nLanguages,
    I18nRegions,
    Playlists,
    PlaylistItems,
    Search,
    Subscriptions,
    VideoCategories,
    Videos,
}

impl Resource {
    pub const ALL: [Resource; 15] = [
        Resource::Activities,
        Resource::Captions,
        Resource::Channels,
        Resource::ChannelSections,
        Resource::Comments,
        Resource::CommentThreads,
        Resource::GuideCategories,
        Resource::I18nLanguages,
        Resource::I18nRegions,
        Resource::Playlists,
        Resource::PlaylistItems,
        Resource::Search,
        Resource::Subscriptions,
        Resource::VideoCategories,
        Resource::Videos,
    ];

    /// URL path segment of the resource.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Activities => "activities",
            Resource::Captions => "captions",
            Resource::Channels => "channels",
            Resource::ChannelSections => "channelSections",
            Resource::Comments => "comments",
            Resource::CommentThreads => "commentThreads",
            Resource::GuideCategories => "guideCategories",
            Resource::I18nLanguages => "i18nLanguages",
            Resource::I18nRegions => "i18nRegions",
            Resource::Playlists => "playlists",
            Resource::PlaylistItems => "playlistItems",
            Resource::Search => "search",
            Resource::Subscriptions => "subscriptions",
            Resource::VideoCategories => "videoCategories",
            Resource::Videos => "videos",
        }
    }

    /// Valid `part` values, in the order used when none are requested.
    pub fn parts(&self) -> &'static [&'static str] {
        match self {
            Resource::Activities => &["id", "snippet", "contentDetails"],
            Resource::Captions => &["id", "snippet"],
            Resource::Channels => &[
                "id",
                "brandingSettings",
                "contentDetails",
                "localizations",
                "snippet",
                "statistics",
                "status",
                "topicDetails",
            ],
            Resource::ChannelSections => &["id", "contentDetails", "snippet"],
            Resource::Comments => &["id", "snippet"],
            Resource::CommentThreads => &["id", "replies", "snippet"],
            Resource::GuideCategories => &["id", "snippet"],
            Resource::I18nLanguages => &["id", "snippet"],
            Resource::I18nRegions => &["id", "snippet"],
            Resource::Playlists => &[
                "id",
                "contentDetails",
                "localizations",
                "player",
                "snippet",
                "status",
            ],
            Resource::PlaylistItems => &["id", "contentDetails", "snippet", "status"],
            Resource::Search => &["id", "snippet"],
            Resource::Subscriptions => &["id", "contentDetails", "snippet", "subscriberSnippet"],
            Resource::VideoCategories => &["id", "snippet"],
            Resource::Videos => &[
                "id",
                "contentDetails",
                "liveStreamingDetails",
                "localizations",
                "player",
                "recordingDetails",
                "snippet",
                "statistics",
                "status",
                "topicDetails",
            ],
        }
    }

    /// Largest `maxResults` the endpoint accepts.
    pub fn max_results_limit(&self) -> u32 {
        match self {
            Resource::Comments | Resource::CommentThreads => 100,
            _ => 50,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::InvalidParams(format!("Resource {s} not supported")))
    }
}

// ── Parts ───────────────────────────────────────────────────────────────────

/// Requested resource parts, from `"id,snippet"` or `["id", "snippet"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts(Vec<String>);

impl Parts {
    fn from_pieces<'a>(pieces: impl IntoIterator<Item = &'a str>) -> Self {
        let mut parts: Vec<String> = Vec::new();
        for piece in pieces {
            for part in piece.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                if !parts.iter().any(|p| p == part) {
                    parts.push(part.to_string());
                }
            }
        }
        Parts(parts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate against `resource` and render the `part` query value.
    ///
    /// An empty selection means every part of the resource.
    pub fn resolve(&self, resource: Resource) -> Result<String, Error> {
        if self.0.is_empty() {
            return Ok(resource.parts().join(","));
        }
        let allowed = resource.parts();
        if let Some(bad) = self.0.iter().find(|p| !allowed.contains(&p.as_str())) {
            return Err(Error::InvalidParams(format!(
                "Parts {bad} for resource {resource} not valid"
            )));
        }
        Ok(self.0.join(","))
    }
}

/// Resolve an optional part selection; `None` selects every part.
pub fn resolve_parts(resource: Resource, parts: Option<&Parts>) -> Result<String, Error> {
    match parts {
        Some(parts) => parts.resolve(resource),
        None => Ok(resource.parts().join(",")),
    }
}

impl From<&str> for Parts {
    fn from(s: &str) -> Self {
        Parts::from_pieces([s])
    }
}

impl From<String> for Parts {
    fn from(s: String) -> Self {
        Parts::from_pieces([s.as_str()])
    }
}

impl From<Vec<&str>> for Parts {
    fn from(v: Vec<&str>) -> Self {
        Parts::from_pieces(v)
    }
}

impl From<Vec<String>> for Parts {
    fn from(v: Vec<String>) -> Self {
        Parts::from_pieces(v.iter().map(String::as_str))
    }
}

impl From<&[&str]> for Parts {
    fn from(v: &[&str]) -> Self {
        Parts::from_pieces(v.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Parts {
    fn from(v: [&str; N]) -> Self {
        Parts::from_pieces(v)
    }
}

// ── Ids ─────────────────────────────────────────────────────────────────────

/// One or more resource identifiers, sent comma-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ids(Vec<String>);

impl Ids {
    fn collect<S: AsRef<str>>(ids: impl IntoIterator<Item = S>) -> Self {
        Ids(ids
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty())
            .collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Comma-joined form used in the query string.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl From<&str> for Ids {
    fn from(s: &str) -> Self {
        Ids::collect([s])
    }
}

impl From<String> for Ids {
    fn from(s: String) -> Self {
        Ids::collect([s])
    }
}

impl From<&String> for Ids {
    fn from(s: &String) -> Self {
        Ids::collect([s])
    }
}

impl From<Vec<&str>> for Ids {
    fn from(v: Vec<&str>) -> Self {
        Ids::collect(v)
    }
}

impl From<Vec<String>> for Ids {
    fn from(v: Vec<String>) -> Self {
        Ids::collect(v)
    }
}

impl From<&[&str]> for Ids {
    fn from(v: &[&str]) -> Self {
        Ids::collect(v)
    }
}

impl From<&[String]> for Ids {
    fn from(v: &[String]) -> Self {
        Ids::collect(v)
    }
}

impl<const N: usize> From<[&str; N]> for Ids {
    fn from(v: [&str; N]) -> Self {
        Ids::collect(v)
    }
}

// ── Paging ──────────────────────────────────────────────────────────────────

/// Page size, starting page, and total item count for list requests.
#[derive(Debug, Clone, Default)]
pub struct Paging {
    pub(crate) max_results: Option<u32>,
    pub(crate) page_token: Option<String>,
    pub(crate) count: Option<u32>,
}

impl Paging {
    /// Append `maxResults` and `pageToken`, validating the page size.
    pub(crate) fn apply(&self, resource: Resource, params: &mut QueryParams) -> Result<(), Error> {
        if let Some(n) = self.max_results {
            check_max_results(resource, n)?;
            params.push(("maxResults".into(), n.to_string()));
        }
        if let Some(token) = &self.page_token {
            params.push(("pageToken".into(), token.clone()));
        }
        Ok(())
    }
}

/// `maxResults` must lie in `1..=resource.max_results_limit()`.
pub fn check_max_results(resource: Resource, n: u32) -> Result<(), Error> {
    let limit = resource.max_results_limit();
    if n == 0 || n > limit {
        return Err(Error::InvalidParams(format!(
            "maxResults for resource {resource} must be between 1 and {limit}, got {n}"
        )));
    }
    Ok(())
}

/// Push the one filter that is set, or fail naming the accepted filters.
pub(crate) fn require_filter(
    params: &mut QueryParams,
    filters: &[(&str, Option<String>)],
) -> Result<(), Error> {
    match filters.iter().find(|(_, v)| v.is_some()) {
        Some((name, Some(value))) => {
            params.push(((*name).into(), value.clone()));
            Ok(())
        }
        _ => {
            let names: Vec<&str> = filters.iter().map(|(n, _)| *n).collect();
            Err(Error::MissingParams(format!(
                "Specify at least one of {}",
                names.join(" or ")
            )))
        }
    }
}

/// Non-empty ids as a filter value.
pub(crate) fn ids_value(ids: Option<&Ids>) -> Option<String> {
    ids.filter(|ids| !ids.is_empty()).map(Ids::joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_from_comma_string() {
        let parts = Parts::from("id, snippet,,id");
        assert_eq!(parts.resolve(Resource::VideoCategories).unwrap(), "id,snippet");
    }

    #[test]
    fn parts_from_list() {
        let parts = Parts::from(vec!["snippet", "statistics"]);
        assert_eq!(parts.resolve(Resource::Videos).unwrap(), "snippet,statistics");
    }

    #[test]
    fn empty_parts_select_all() {
        assert_eq!(
            Parts::from("").resolve(Resource::Comments).unwrap(),
            "id,snippet"
        );
        assert_eq!(
            resolve_parts(Resource::CommentThreads, None).unwrap(),
            "id,replies,snippet"
        );
    }

    #[test]
    fn invalid_part_rejected() {
        let err = Parts::from("id,not_part")
            .resolve(Resource::GuideCategories)
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidParams(ref m) if m.contains("not_part") && m.contains("guideCategories")),
            "expected InvalidParams, got: {err:?}"
        );
    }

    #[test]
    fn part_valid_for_one_resource_only() {
        assert!(Parts::from("statistics").resolve(Resource::Videos).is_ok());
        assert!(Parts::from("statistics").resolve(Resource::Playlists).is_err());
    }

    #[test]
    fn ids_single_and_multi() {
        assert_eq!(Ids::from("17").joined(), "17");
        assert_eq!(Ids::from(["17", "18"]).joined(), "17,18");
        assert_eq!(Ids::from(vec!["a".to_string(), " b ".to_string()]).joined(), "a,b");
    }

    #[test]
    fn blank_ids_are_empty() {
        assert!(Ids::from("").is_empty());
        assert!(Ids::from(vec!["", "  "]).is_empty());
        assert_eq!(ids_value(Some(&Ids::from(" "))), None);
    }

    #[test]
    fn resource_round_trips_path_segment() {
        for resource in Resource::ALL {
            assert_eq!(resource.as_str().parse::<Resource>().unwrap(), resource);
        }
    }

    #[test]
    fn unknown_resource_rejected() {
        let err = "wrong".parse::<Resource>().unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[test]
    fn max_results_bounds() {
        assert!(check_max_results(Resource::Videos, 50).is_ok());
        assert!(check_max_results(Resource::Videos, 51).is_err());
        assert!(check_max_results(Resource::Comments, 100).is_ok());
        assert!(check_max_results(Resource::Search, 0).is_err());
    }

    #[test]
    fn require_filter_takes_first_set() {
        let mut params = QueryParams::new();
        require_filter(
            &mut params,
            &[("id", None), ("regionCode", Some("US".into()))],
        )
        .unwrap();
        assert_eq!(params, vec![("regionCode".to_string(), "US".to_string())]);
    }

    #[test]
    fn require_filter_reports_names() {
        let mut params = QueryParams::new();
        let err = require_filter(&mut params, &[("id", None), ("regionCode", None)]).unwrap_err();
        assert!(
            matches!(err, Error::MissingParams(ref m) if m == "Specify at least one of id or regionCode")
        );
    }
}
