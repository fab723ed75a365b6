//! `EventStore` over a JSON REST collection.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Event, EventData, EventId, EventPatch};
use crate::store::EventStore;

/// HTTP client for a collection endpoint such as `http://127.0.0.1:3000/events`.
#[derive(Clone)]
pub struct HttpEventStore {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl HttpEventStore {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        HttpEventStore {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn item_url(&self, id: EventId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Turn a non-success response into an error. A 404 on an item URL becomes
/// `NotFound`; everything else is a transport failure carrying the status.
async fn check(resp: Response, id: Option<EventId>) -> EventDeskResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
        return Err(EventDeskError::NotFound(id));
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => err.error,
        Err(_) if body.is_empty() => status.canonical_reason().unwrap_or("").to_string(),
        Err(_) => body,
    };

    Err(EventDeskError::Transport(format!("{status}: {detail}")))
}

#[async_trait]
impl EventStore for HttpEventStore {
    /// GET /events/
    async fn list_all(&self) -> EventDeskResult<Vec<Event>> {
        let url = self.collection_url();
        debug!(%url, "listing events");

        let resp = self.http.get(&url).send().await?;
        Ok(check(resp, None).await?.json().await?)
    }

    /// GET /events/:id
    async fn get_by_id(&self, id: EventId) -> EventDeskResult<Event> {
        let url = self.item_url(id);
        debug!(%url, "fetching event");

        let resp = self.http.get(&url).send().await?;
        Ok(check(resp, Some(id)).await?.json().await?)
    }

    /// POST /events/
    async fn create(&self, data: &EventData) -> EventDeskResult<Event> {
        let url = self.collection_url();
        debug!(%url, name = %data.name, "creating event");

        let resp = self.http.post(&url).json(data).send().await?;
        Ok(check(resp, None).await?.json().await?)
    }

    /// PUT /events/:id
    async fn replace(&self, id: EventId, patch: &EventPatch) -> EventDeskResult<Event> {
        let url = self.item_url(id);
        debug!(%url, "replacing event");

        let resp = self.http.put(&url).json(patch).send().await?;
        Ok(check(resp, Some(id)).await?.json().await?)
    }

    /// DELETE /events/:id
    async fn delete(&self, id: EventId) -> EventDeskResult<()> {
        let url = self.item_url(id);
        debug!(%url, "deleting event");

        let resp = self.http.delete(&url).send().await?;
        check(resp, Some(id)).await?;
        Ok(())
    }
}
