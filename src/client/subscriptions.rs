//! Subscription endpoint.

use super::YouTubeClient;
use super::error::Error;
use super::params::{Ids, Paging, Parts, QueryParams, Resource, resolve_parts};
use super::query::{ListQuery, paging_methods};
use super::types::{Subscription, SubscriptionListResponse};

#[derive(Debug, Clone, Copy)]
pub enum SubscriptionOrder {
    Alphabetical,
    Relevance,
    Unread,
}

impl SubscriptionOrder {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            SubscriptionOrder::Alphabetical => "alphabetical",
            SubscriptionOrder::Relevance => "relevance",
            SubscriptionOrder::Unread => "unread",
        }
    }
}

#[derive(Debug, Clone)]
enum SubscriptionFilter {
    Ids(Ids),
    Channel(String),
    Mine,
    MySubscribers,
}

/// Query for the `subscriptions` endpoint.
#[derive(Debug, Clone)]
pub struct SubscriptionsQuery {
    filter: SubscriptionFilter,
    for_channel_id: Option<Ids>,
    order: Option<SubscriptionOrder>,
    parts: Option<Parts>,
    paging: Paging,
}

impl SubscriptionsQuery {
    fn new(filter: SubscriptionFilter) -> Self {
        Self {
            filter,
            for_channel_id: None,
            order: None,
            parts: None,
            paging: Paging::default(),
        }
    }

    pub fn by_ids(ids: impl Into<Ids>) -> Self {
        Self::new(SubscriptionFilter::Ids(ids.into()))
    }

    /// Public subscriptions of a channel.
    pub fn by_channel(channel_id: &str) -> Self {
        Self::new(SubscriptionFilter::Channel(channel_id.to_string()))
    }

    /// Subscriptions of the authorized user.
    pub fn mine() -> Self {
        Self::new(SubscriptionFilter::Mine)
    }

    /// Subscribers of the authorized user's channel.
    pub fn my_subscribers() -> Self {
        Self::new(SubscriptionFilter::MySubscribers)
    }

    /// Only subscriptions to these channel(s).
    pub fn for_channel_id(mut self, ids: impl Into<Ids>) -> Self {
        self.for_channel_id = Some(ids.into());
        self
    }

    pub fn order(mut self, order: SubscriptionOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn parts(mut self, parts: impl Into<Parts>) -> Self {
        self.parts = Some(parts.into());
        self
    }

    paging_methods!();
}

impl ListQuery for SubscriptionsQuery {
    type Item = Subscription;

    fn resource(&self) -> Resource {
        Resource::Subscriptions
    }

    fn to_params(&self) -> Result<QueryParams, Error> {
        let mut params: QueryParams = vec![(
            "part".into(),
            resolve_parts(Resource::Subscriptions, self.parts.as_ref())?,
        )];
        let missing = || {
            Error::MissingParams(
                "Specify at least one of id, channelId, mine or mySubscribers".into(),
            )
        };
        match &self.filter {
            SubscriptionFilter::Ids(ids) if ids.is_empty() => return Err(missing()),
            SubscriptionFilter::Ids(ids) => params.push(("id".into(), ids.joined())),
            SubscriptionFilter::Channel(id) if id.trim().is_empty() => return Err(missing()),
            SubscriptionFilter::Channel(id) => params.push(("channelId".into(), id.clone())),
            SubscriptionFilter::Mine => params.push(("mine".into(), "true".into())),
            SubscriptionFilter::MySubscribers => {
                params.push(("mySubscribers".into(), "true".into()))
            }
        }
        if let Some(ids) = self.for_channel_id.as_ref().filter(|ids| !ids.is_empty()) {
            params.push(("forChannelId".into(), ids.joined()));
        }
        if let Some(order) = self.order {
            params.push(("order".into(), order.as_str().into()));
        }
        self.paging.apply(Resource::Subscriptions, &mut params)?;
        Ok(params)
    }

    fn total_count(&self) -> Option<u32> {
        self.paging.count
    }

    fn requires_auth(&self) -> bool {
        matches!(
            self.filter,
            SubscriptionFilter::Mine | SubscriptionFilter::MySubscribers
        )
    }
}

impl YouTubeClient {
    /// Get subscriptions by id, by channel, or of the authorized user.
    pub async fn subscriptions(
        &self,
        query: &SubscriptionsQuery,
    ) -> Result<SubscriptionListResponse, Error> {
        self.list(query).await
    }
}
