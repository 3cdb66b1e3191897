//! Local collections of loaded resources
//!
//! A [`Collection`] is the id-keyed cache consulted by hierarchical
//! parent resolution: lookups hand out `Arc` clones of the stored
//! instances, so every caller observes the same object.

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resource::{NumericId, Resource};

/// An id-keyed set of loaded instances of one kind.
pub struct Collection<R> {
    items: HashMap<u64, Arc<R>>,
}

impl<R> Collection<R> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Shared handle to the instance with this id, if loaded.
    pub fn get(&self, id: u64) -> Option<Arc<R>> {
        self.items.get(&id).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<R>> {
        self.items.values()
    }
}

impl<R: NumericId> Collection<R> {
    /// Store an instance under its id. Instances the server has not
    /// assigned an id yet cannot be collected; those return `None`.
    pub fn insert(&mut self, item: R) -> Option<Arc<R>> {
        let id = item.id()?;
        let item = Arc::new(item);
        self.items.insert(id, Arc::clone(&item));
        Some(item)
    }
}

impl<R: Resource + NumericId> Collection<R> {
    /// Populate a collection from the kind's list endpoint.
    pub async fn fetch(client: &ApiClient) -> Result<Self> {
        let mut collection = Self::new();
        for item in client.list::<R>().await? {
            collection.insert(item);
        }
        Ok(collection)
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: NumericId> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.insert(item);
        }
        collection
    }
}
