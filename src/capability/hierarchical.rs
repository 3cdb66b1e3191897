//! Parent resolution for tree-shaped resources
//!
//! Hierarchical kinds carry a numeric `parent` field (`0` = no parent)
//! referencing an instance of a declared parent kind. Resolution prefers
//! an already-loaded local [`Collection`], a synchronous lookup with
//! stable identity and no network traffic. Otherwise it hands back a
//! stub addressed by the parent id while a spawned fetch populates it in
//! place.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::resource::{NumericId, Resource};

/// Capability for kinds whose instances may reference a parent.
pub trait Hierarchical: Resource {
    /// The declared parent kind. Always explicit per kind, never inferred
    /// from the child's shape.
    type Parent: Resource + NumericId + 'static;

    /// The raw parent reference; `0` means no parent.
    fn parent_id(&self) -> u64;

    /// Resolve the parent instance.
    ///
    /// With a populated `cache` the lookup is synchronous and returns the
    /// cached instance itself, so repeated calls observe one object. Off
    /// the cache path every call spawns a fresh fetch; callers needing
    /// identity stability must supply the collection.
    ///
    /// Must be called from within a Tokio runtime: the fallback path
    /// spawns the fetch task.
    fn parent(
        &self,
        client: &ApiClient,
        cache: Option<&Collection<Self::Parent>>,
    ) -> Option<ParentLookup<Self::Parent>> {
        resolve(self.parent_id(), client, cache)
    }
}

/// Outcome of a parent lookup.
pub enum ParentLookup<P> {
    /// Resolved synchronously from a local collection. Identity is stable
    /// across repeated lookups.
    Cached(Arc<P>),
    /// A remote fetch is in flight. The instance starts with kind
    /// defaults and is populated in place when the fetch lands.
    Pending(PendingParent<P>),
}

impl<P> ParentLookup<P> {
    pub fn is_cached(&self) -> bool {
        matches!(self, ParentLookup::Cached(_))
    }
}

/// Handle to a parent instance still being fetched.
///
/// Dropping the handle does not cancel the fetch: the task keeps its own
/// reference and writes into the shared instance when it completes.
pub struct PendingParent<P> {
    instance: Arc<RwLock<P>>,
    task: JoinHandle<Result<()>>,
}

impl<P> PendingParent<P> {
    /// Shared handle to the instance under population. Available
    /// immediately; fields hold kind defaults until the fetch lands.
    pub fn instance(&self) -> Arc<RwLock<P>> {
        Arc::clone(&self.instance)
    }

    /// Wait for the in-flight fetch and surface its result.
    pub async fn resolved(self) -> Result<Arc<RwLock<P>>> {
        let PendingParent { instance, task } = self;
        match task.await {
            Ok(Ok(())) => Ok(instance),
            Ok(Err(err)) => Err(err),
            Err(join) => Err(Error::ParentFetch(join.to_string())),
        }
    }
}

pub(crate) fn resolve<P>(
    parent: u64,
    client: &ApiClient,
    cache: Option<&Collection<P>>,
) -> Option<ParentLookup<P>>
where
    P: Resource + NumericId + 'static,
{
    if parent == 0 {
        return None;
    }

    if let Some(cached) = cache.and_then(|collection| collection.get(parent)) {
        return Some(ParentLookup::Cached(cached));
    }

    let instance = Arc::new(RwLock::new(P::with_id(parent)));
    let slot = Arc::clone(&instance);
    let client = client.clone();
    let task = tokio::spawn(async move {
        let fetched = client.fetch::<P>(parent).await?;
        *slot.write().await = fetched;
        Ok::<(), Error>(())
    });

    Some(ParentLookup::Pending(PendingParent { instance, task }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::ApiConfig;
    use crate::models::{Page, Post};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig {
            api_root: format!("{}/wp-json", server.uri()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn no_parent_resolves_to_none() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let post = Post::default();
        assert_eq!(post.parent_id(), 0);
        assert!(post.parent(&client, None).is_none());

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cache_hit_returns_the_cached_instance() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let mut posts = Collection::new();
        let cached = posts.insert(Post::with_id(5)).unwrap();

        let mut child = Post::default();
        child.parent = 5;

        match child.parent(&client, Some(&posts)).unwrap() {
            ParentLookup::Cached(parent) => assert!(Arc::ptr_eq(&parent, &cached)),
            ParentLookup::Pending(_) => panic!("cache hit must resolve synchronously"),
        }

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cache_miss_fetches_and_populates_in_place() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/pages/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 7,
                "link": "https://example.com/about",
                "title": { "rendered": "About" }
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut child = Page::default();
        child.parent = 7;

        let pending = match child.parent(&client, None).unwrap() {
            ParentLookup::Pending(pending) => pending,
            ParentLookup::Cached(_) => panic!("no collection was supplied"),
        };

        // Addressed but not yet populated.
        {
            let stub = pending.instance();
            let stub = stub.try_read().unwrap();
            assert_eq!(stub.id, Some(7));
            assert!(stub.link.is_empty());
        }

        let resolved = pending.resolved().await.unwrap();
        let parent = resolved.read().await;
        assert_eq!(parent.id, Some(7));
        assert_eq!(parent.link, "https://example.com/about");
    }

    #[tokio::test]
    async fn cache_miss_without_memoization_fetches_each_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
            .expect(2)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut child = Post::default();
        child.parent = 3;

        for _ in 0..2 {
            match child.parent(&client, None).unwrap() {
                ParentLookup::Pending(pending) => {
                    pending.resolved().await.unwrap();
                }
                ParentLookup::Cached(_) => panic!("no collection was supplied"),
            }
        }
    }

    #[tokio::test]
    async fn failed_fetch_surfaces_on_resolution() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut child = Post::default();
        child.parent = 9;

        let pending = match child.parent(&client, None).unwrap() {
            ParentLookup::Pending(pending) => pending,
            ParentLookup::Cached(_) => panic!("no collection was supplied"),
        };

        assert!(matches!(
            pending.resolved().await,
            Err(Error::NotFound(_))
        ));
    }
}
