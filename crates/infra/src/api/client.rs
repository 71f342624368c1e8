//! HTTP client for the remote scheduled-posts collection
//!
//! Implements the `ScheduledPostsApi` port over HTTP/JSON. Failures are
//! never retried here; a non-success response becomes a `Fetch` error
//! carrying the status and response body as diagnostic text, and the
//! caller decides what to surface.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use postpilot_core::ScheduledPostsApi;
use postpilot_domain::constants::SCHEDULED_POSTS_PATH;
use postpilot_domain::{
    ApiConfig, NewScheduledPost, PostPilotError, Result, ScheduledPost, ScheduledPostPatch,
};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use super::auth::AccessTokenProvider;
use super::dto::{CreatePostRequest, ListResponse, ScheduledPostDto, UpdatePostRequest};

/// HTTP adapter for the remote scheduled-posts collection.
pub struct ScheduledPostsClient {
    client: ReqwestClient,
    base_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl ScheduledPostsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns `PostPilotError::Config` when the base URL does not parse
    /// or the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|err| PostPilotError::Config(format!("invalid base URL: {err}")))?;

        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("postpilot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| PostPilotError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url, tokens })
    }

    fn collection_url(&self) -> Result<Url> {
        self.base_url
            .join(SCHEDULED_POSTS_PATH)
            .map_err(|err| PostPilotError::Config(format!("invalid collection path: {err}")))
    }

    fn post_url(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(&format!("{SCHEDULED_POSTS_PATH}/{id}"))
            .map_err(|err| PostPilotError::Config(format!("invalid post path: {err}")))
    }

    /// Attach the bearer token when one is available.
    async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        match self.tokens.access_token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    async fn send(&self, method: Method, builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|err| PostPilotError::Fetch(format!("{method} request failed: {err}")))?;

        let status = response.status();
        debug!(%method, %status, "received response from scheduled-posts collection");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(fetch_error(status, &body))
    }
}

fn fetch_error(status: StatusCode, body: &str) -> PostPilotError {
    if body.is_empty() {
        PostPilotError::Fetch(format!("status {status}"))
    } else {
        PostPilotError::Fetch(format!("status {status}: {body}"))
    }
}

#[async_trait]
impl ScheduledPostsApi for ScheduledPostsClient {
    #[instrument(skip(self))]
    async fn list(&self, user_id: &str) -> Result<Vec<ScheduledPost>> {
        let url = self.collection_url()?;
        let request =
            self.authorize(self.client.get(url).query(&[("user_id", user_id)])).await?;

        let response = self.send(Method::GET, request).await?;
        let listed: ListResponse = response
            .json()
            .await
            .map_err(|err| PostPilotError::Fetch(format!("malformed list response: {err}")))?;

        Ok(listed.items.into_iter().map(ScheduledPost::from).collect())
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: &NewScheduledPost) -> Result<ScheduledPost> {
        let url = self.collection_url()?;
        let body = CreatePostRequest::from(post);
        let request = self.authorize(self.client.post(url).json(&body)).await?;

        let response = self.send(Method::POST, request).await?;
        let inserted: ScheduledPostDto = response
            .json()
            .await
            .map_err(|err| PostPilotError::Fetch(format!("malformed create response: {err}")))?;

        Ok(inserted.into())
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: &str, patch: &ScheduledPostPatch) -> Result<()> {
        let url = self.post_url(id)?;
        let body = UpdatePostRequest::from(patch);
        let request = self.authorize(self.client.patch(url).json(&body)).await?;

        self.send(Method::PATCH, request).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &str) -> Result<()> {
        let url = self.post_url(id)?;
        let request = self.authorize(self.client.delete(url)).await?;

        self.send(Method::DELETE, request).await?;
        Ok(())
    }
}
