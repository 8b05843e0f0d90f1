//! # Storage Layer
//!
//! Posts come from a [`PostSource`] and are held by a [`PostStore`].
//!
//! ## Design Rationale
//!
//! The source is abstracted behind a trait to:
//! - Enable **testing** with [`memory::MemorySource`] (no filesystem needed)
//! - Allow **other origins** (an HTTP fetch, an embedded payload) without changing the pipeline
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a JSON file (`posts.json` by default) with `tokio::fs`
//! - [`memory::MemorySource`]: serves a fixed payload from memory
//!
//! ## Payload Format
//!
//! A JSON array of post objects, in display order:
//!
//! ```text
//! [
//!   { "id": 1, "title": "...", "snippet": "...", "content": "...", "author": "...",
//!     "category": "...", "date": "2024-01-15", "tags": ["..."], "image": "cover.jpg" }
//! ]
//! ```
//!
//! `content` is optional, every other field is required. Loading is all or nothing: one bad
//! record fails the whole batch.
//!
//! ## Immutability
//!
//! Once loaded, a `PostStore` is never mutated. Clones share the same allocation, so the
//! pipeline can hand out derived views without copying posts.

use crate::error::LoadError;
use crate::model::Post;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

pub mod fs;
pub mod memory;

/// Where the raw post payload comes from.
pub trait PostSource {
    /// Human-readable name for errors and logs (a path, a URL, "memory").
    fn name(&self) -> String;

    /// Fetch the raw payload bytes.
    fn fetch(&self) -> impl Future<Output = std::io::Result<Vec<u8>>> + Send;
}

/// The full, immutable list of posts in source order.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Arc<[Arc<Post>]>,
}

impl PostStore {
    /// Fetches and parses posts from `source`.
    pub async fn load<S: PostSource>(source: &S) -> Result<Self, LoadError> {
        let name = source.name();
        debug!(source = %name, "fetching posts");

        let bytes = source
            .fetch()
            .await
            .map_err(|reason| LoadError::Unreachable {
                source_name: name.clone(),
                reason,
            })?;

        let store = Self::parse(&bytes)?;
        info!(source = %name, count = store.len(), "loaded posts");
        Ok(store)
    }

    /// Parses a JSON array of posts.
    pub fn parse(bytes: &[u8]) -> Result<Self, LoadError> {
        let posts: Vec<Post> = serde_json::from_slice(bytes)?;
        Self::from_posts(posts)
    }

    /// Builds a store from already-parsed posts, rejecting duplicate ids.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(&post.id) {
                return Err(LoadError::DuplicateId(post.id.clone()));
            }
        }

        Ok(Self {
            posts: posts.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Post>> {
        self.posts.iter()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.posts
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
