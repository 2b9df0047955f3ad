//! Region and language lookups.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Parts, QueryParams, Resource, resolve_parts};
use super::query::ListQuery;
use super::types::{I18nLanguage, I18nLanguageListResponse, I18nRegion, I18nRegionListResponse};

/// Query for the content regions YouTube supports.
#[derive(Debug, Clone, Default)]
pub struct I18nRegionsQuery {
    hl: Option<String>,
    parts: Option<Parts>,
}

impl I18nRegionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language of the returned region names.
    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }
}

impl ListQuery for I18nRegionsQuery {
    type Item = I18nRegion;

    fn resource(&self) -> Resource {
        Resource::I18nRegions
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        i18n_params(Resource::I18nRegions, self.parts.as_ref(), self.hl.as_deref())
    }
}

/// Query for the interface languages YouTube supports.
#[derive(Debug, Clone, Default)]
pub struct I18nLanguagesQuery {
    hl: Option<String>,
    parts: Option<Parts>,
}

impl I18nLanguagesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language of the returned language names.
    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }
}

impl ListQuery for I18nLanguagesQuery {
    type Item = I18nLanguage;

    fn resource(&self) -> Resource {
        Resource::I18nLanguages
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        i18n_params(Resource::I18nLanguages, self.parts.as_ref(), self.hl.as_deref())
    }
}

fn i18n_params(
    resource: Resource,
    parts: Option<&Parts>,
    hl: Option<&str>,
) -> Result<QueryParams, Error> {
    let mut params: QueryParams = vec![("part".into(), resolve_parts(resource, parts)?)];
    if let Some(hl) = hl {
        params.push(("hl".into(), hl.to_string()));
    }
    Ok(params)
}

impl YouTubeClient {
    pub async fn i18n_regions(
        &self,
        query: &I18nRegionsQuery,
    ) -> Result<I18nRegionListResponse, Error> {
        self.list(query).await
    }

    pub async fn i18n_languages(
        &self,
        query: &I18nLanguagesQuery,
    ) -> Result<I18nLanguageListResponse, Error> {
        self.list(query).await
    }
}
