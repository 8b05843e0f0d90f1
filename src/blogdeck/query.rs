//! Category and text search filtering.
//!
//! [`filter`] is a pure function of the posts and a [`QueryState`]. It never reorders: the
//! result is always a subsequence of the input.

use crate::model::Post;
use std::fmt;
use std::sync::Arc;

/// The category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Case-sensitive exact match on `Post::category`.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Current category and search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub category: CategoryFilter,
    pub search: String,
}

impl QueryState {
    pub fn new(category: impl Into<CategoryFilter>, search: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
        }
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// The effective search term: trimmed, `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// True when neither a category nor a search term is active.
    pub fn is_cleared(&self) -> bool {
        self.category == CategoryFilter::All && self.search_term().is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if !self.category.matches(post) {
            return false;
        }
        match self.search_term() {
            Some(term) => matches_search(post, &term.to_lowercase()),
            None => true,
        }
    }
}

/// `term_lower` must already be lower-cased.
fn matches_search(post: &Post, term_lower: &str) -> bool {
    post.title.to_lowercase().contains(term_lower)
        || post.snippet.to_lowercase().contains(term_lower)
        || post
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term_lower))
        || post.author.to_lowercase().contains(term_lower)
}

/// Returns the posts matching `query`, in their original order.
pub fn filter(posts: &[Arc<Post>], query: &QueryState) -> Vec<Arc<Post>> {
    let category = &query.category;
    let term_lower = query.search_term().map(str::to_lowercase);

    posts
        .iter()
        .filter(|post| category.matches(post))
        .filter(|post| match &term_lower {
            Some(term) => matches_search(post, term),
            None => true,
        })
        .cloned()
        .collect()
}
