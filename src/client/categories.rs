//! Video and guide category endpoints.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Parts, QueryParams, Resource, ids_value, require_filter, resolve_parts};
use super::query::ListQuery;
use super::types::{Category, CategoryListResponse};

/// Query for `videoCategories` or `guideCategories`.
///
/// Either identifiers or a region code must be given; identifiers win when
/// both are set.
#[derive(Debug, Clone)]
pub struct CategoriesQuery {
    resource: Resource,
    ids: Option<Ids>,
    region_code: Option<String>,
    parts: Option<Parts>,
    hl: Option<String>,
}

impl CategoriesQuery {
    /// Query video categories.
    pub fn video() -> Self {
        Self::new(Resource::VideoCategories)
    }

    /// Query guide categories (deprecated by YouTube, still served).
    pub fn guide() -> Self {
        Self::new(Resource::GuideCategories)
    }

    /// Query categories of the given kind; only category resources are accepted.
    pub fn for_resource(resource: Resource) -> Result<Self, Error> {
        match resource {
            Resource::VideoCategories | Resource::GuideCategories => Ok(Self::new(resource)),
            other => Err(Error::InvalidParams(format!(
                "Resource {other} is not a category resource"
            ))),
        }
    }

    fn new(resource: Resource) -> Self {
        Self {
            resource,
            ids: None,
            region_code: None,
            parts: None,
            hl: None,
        }
    }

    /// Category id(s): `"17"` or `["17", "18"]`.
    pub fn ids(mut self, ids: impl Into<Ids>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn region_code(mut self, code: &str) -> Self {
        self.region_code = Some(code.to_string());
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    /// Language for localized titles.
    pub fn hl(mut self, hl: &str) -> Self {
        self.hl = Some(hl.to_string());
        self
    }
}

impl ListQuery for CategoriesQuery {
    type Item = Category;

    fn resource(&self) -> Resource {
        self.resource
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(self.resource, self.parts.as_ref())?,
        )];
        require_filter(
            &mut params,
            &[
                ("id", ids_value(self.ids.as_ref())),
                ("regionCode", self.region_code.clone()),
            ],
        )?;
        if let Some(hl) = &self.hl {
            params.push(("hl".into(), hl.clone()));
        }
        Ok(params)
    }
}

impl YouTubeClient {
    /// Get video or guide categories, depending on the query.
    pub async fn categories(&self, query: &CategoriesQuery) -> Result<CategoryListResponse, Error> {
        self.list(query).await
    }

    /// Get video categories by id or region.
    pub async fn video_categories(
        &self,
        query: &CategoriesQuery,
    ) -> Result<CategoryListResponse, Error> {
        expect_resource(query, Resource::VideoCategories)?;
        self.list(query).await
    }

    /// Get guide categories by id or region.
    pub async fn guide_categories(
        &self,
        query: &CategoriesQuery,
    ) -> Result<CategoryListResponse, Error> {
        expect_resource(query, Resource::GuideCategories)?;
        self.list(query).await
    }
}

fn expect_resource(query: &CategoriesQuery, expected: Resource) -> Result<(), Error> {
    if query.resource != expected {
        return Err(Error::InvalidParams(format!(
            "expected a {expected} query, got {}",
            query.resource
        )));
    }
    Ok(())
}
