//! Authenticated HTTP client for the REST API
//!
//! [`ApiClient`] wraps every persistence operation in one [`sync`]
//! entry point: read-only kinds are rejected before any I/O, the
//! configured nonce is injected into the outgoing request, a caller's
//! pre-send hook runs after the injection, and transport failures pass
//! through uninterpreted. Higher-level verbs (`fetch`, `save`,
//! `destroy`, `list`) all funnel through it.
//!
//! Operations on one instance are not serialized against each other;
//! callers issuing overlapping saves or fetches sequence them
//! themselves.
//!
//! [`sync`]: ApiClient::sync

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::{PostRevision, Schema, User};
use crate::resource::{NumericId, Resource, SlugId};

/// The four persistence operations a resource can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMethod {
    Create,
    Read,
    Update,
    Delete,
}

impl SyncMethod {
    fn http(self) -> reqwest::Method {
        match self {
            SyncMethod::Create => reqwest::Method::POST,
            SyncMethod::Read => reqwest::Method::GET,
            SyncMethod::Update => reqwest::Method::PUT,
            SyncMethod::Delete => reqwest::Method::DELETE,
        }
    }

    fn is_write(self) -> bool {
        !matches!(self, SyncMethod::Read)
    }

    fn sends_body(self) -> bool {
        matches!(self, SyncMethod::Create | SyncMethod::Update)
    }
}

/// Caller-supplied hook run on the outgoing request just before sending.
pub type BeforeSend = Box<dyn FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder + Send>;

/// Transport options for a single sync call.
#[derive(Default)]
pub struct SyncOptions {
    before_send: Option<BeforeSend>,
}

impl SyncOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` on the outgoing request. The hook runs after credential
    /// injection, so it sees (and may extend) the authenticated request.
    pub fn before_send(
        hook: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder + Send + 'static,
    ) -> Self {
        Self {
            before_send: Some(Box::new(hook)),
        }
    }
}

/// HTTP client for the REST API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// immutable configuration.
///
/// # Example
///
/// ```rust,no_run
/// use wp_api_client::{ApiClient, ApiConfig, Post};
///
/// # async fn example() -> wp_api_client::Result<()> {
/// let client = ApiClient::new(ApiConfig {
///     api_root: "https://example.com/wp-json".into(),
///     nonce: Some("a1b2c3d4e5".into()),
///     ..Default::default()
/// });
///
/// let mut post = client.fetch::<Post>(42).await?;
/// post.title = serde_json::json!({ "raw": "Updated title" });
/// client.save(&mut post).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client for the configured API root.
    pub fn new(config: ApiConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self { config, http }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one persistence operation for `resource`.
    ///
    /// Create and Update transmit the resource's wire form as the JSON
    /// body; the response body is returned for the caller to apply. The
    /// resource argument itself is never mutated here.
    ///
    /// Read-only kinds fail with [`Error::ReadOnly`] before any request
    /// is built.
    pub async fn sync<R: Resource>(
        &self,
        method: SyncMethod,
        resource: &R,
        options: SyncOptions,
    ) -> Result<Value> {
        if R::READ_ONLY && method.is_write() {
            return Err(Error::ReadOnly(R::KIND));
        }

        let url = resource.url(&self.config);
        tracing::debug!("{} {} ({})", method.http(), url, R::KIND);

        let mut request = self.http.request(method.http(), url.as_str());
        if method.sends_body() {
            request = request.json(&resource.to_wire()?);
        }
        if let Some(nonce) = &self.config.nonce {
            request = request.header("X-WP-Nonce", nonce);
        }
        if let Some(hook) = options.before_send {
            request = hook(request);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Fetch an instance of a numeric-id kind.
    pub async fn fetch<R: Resource + NumericId>(&self, id: u64) -> Result<R> {
        let stub = R::with_id(id);
        let value = self.sync(SyncMethod::Read, &stub, SyncOptions::new()).await?;
        R::from_wire(value)
    }

    /// Fetch an instance of a slug-addressed kind.
    pub async fn fetch_by_slug<R: Resource + SlugId>(&self, slug: &str) -> Result<R> {
        let stub = R::with_slug(slug);
        let value = self.sync(SyncMethod::Read, &stub, SyncOptions::new()).await?;
        R::from_wire(value)
    }

    /// Fetch a specific revision of a post.
    pub async fn fetch_revision(&self, parent: u64, id: u64) -> Result<PostRevision> {
        let stub = PostRevision::for_post(parent, id);
        let value = self.sync(SyncMethod::Read, &stub, SyncOptions::new()).await?;
        PostRevision::from_wire(value)
    }

    /// Fetch the currently authenticated user (`users/me`).
    pub async fn current_user(&self) -> Result<User> {
        let stub = User::default();
        let value = self.sync(SyncMethod::Read, &stub, SyncOptions::new()).await?;
        User::from_wire(value)
    }

    /// Fetch the API's self-description from the namespace root.
    pub async fn describe(&self) -> Result<Schema> {
        let stub = Schema::default();
        let value = self.sync(SyncMethod::Read, &stub, SyncOptions::new()).await?;
        Schema::from_wire(value)
    }

    /// Re-read an instance in place through its own URL.
    pub async fn refresh<R: Resource>(&self, resource: &mut R) -> Result<()> {
        if resource.is_new() {
            return Err(Error::MissingId(R::KIND));
        }
        let value = self.sync(SyncMethod::Read, resource, SyncOptions::new()).await?;
        *resource = R::from_wire(value)?;
        Ok(())
    }

    /// Persist an instance: Create while the server has not assigned it
    /// an identity, Update afterwards. The server's echo is applied back
    /// onto the instance, so a created draft picks up its id.
    pub async fn save<R: Resource>(&self, resource: &mut R) -> Result<()> {
        let method = if resource.is_new() {
            SyncMethod::Create
        } else {
            SyncMethod::Update
        };
        let value = self.sync(method, resource, SyncOptions::new()).await?;
        *resource = R::from_wire(value)?;
        Ok(())
    }

    /// Delete an instance remotely.
    pub async fn destroy<R: Resource>(&self, resource: &R) -> Result<()> {
        if R::READ_ONLY {
            return Err(Error::ReadOnly(R::KIND));
        }
        if resource.is_new() {
            return Err(Error::MissingId(R::KIND));
        }
        self.sync(SyncMethod::Delete, resource, SyncOptions::new())
            .await?;
        Ok(())
    }

    /// Read a kind's collection endpoint.
    ///
    /// Applies to kinds with a fixed collection route; revisions hang off
    /// their parent post and are listed with [`list_revisions`].
    ///
    /// [`list_revisions`]: ApiClient::list_revisions
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let value = self.get_value(&R::endpoint(&self.config)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Read the revision collection of a post.
    pub async fn list_revisions(&self, parent: u64) -> Result<Vec<PostRevision>> {
        let url = format!(
            "{}/{}/revisions",
            PostRevision::endpoint(&self.config),
            parent
        );
        let value = self.get_value(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get_value(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let mut request = self.http.get(url);
        if let Some(nonce) = &self.config.nonce {
            request = request.header("X-WP-Nonce", nonce);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("request to {} failed with {}: {}", url, status, message);
            return Err(Error::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
