//! # Feed State
//!
//! The feed is the pipeline's state machine. It owns three things:
//!
//! - the loaded [`PostStore`],
//! - a [`ViewState`] (query + pager),
//! - the filtered list derived from the two.
//!
//! ## Transitions
//!
//! | Action           | Query engine | Pager        | Frame            |
//! |------------------|--------------|--------------|------------------|
//! | set search       | re-run       | reset to 1   | `Reset`/`Empty`  |
//! | set category     | re-run       | reset to 1   | `Reset`/`Empty`  |
//! | clear filters    | re-run       | reset to 1   | `Reset`/`Empty`  |
//! | load more        | not run      | advance by 1 | `Append`         |
//!
//! A query change and its page reset happen inside a single [`ViewState::with_query`] call,
//! so no caller can observe one without the other.

use crate::model::Post;
use crate::pager::PagerState;
use crate::query::{self, CategoryFilter, QueryState};
use crate::store::PostStore;
use std::sync::Arc;
use tracing::debug;

/// Query and pager, transitioned together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: QueryState,
    pub pager: PagerState,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: QueryState::default(),
            pager: PagerState::new(page_size),
        }
    }

    /// New query, first page.
    pub fn with_query(self, query: QueryState) -> Self {
        Self {
            query,
            pager: self.pager.reset(),
        }
    }

    /// Category "all", empty search, first page.
    pub fn cleared(self) -> Self {
        self.with_query(QueryState::default())
    }

    pub fn advanced(self) -> Self {
        Self {
            pager: self.pager.advance(),
            ..self
        }
    }
}

/// What the render driver should do with the display this time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Replace every displayed card with `posts`.
    Reset {
        posts: Vec<Arc<Post>>,
        has_more: bool,
        total: usize,
    },
    /// Keep what is displayed and add `posts` after it.
    Append {
        posts: Vec<Arc<Post>>,
        has_more: bool,
        total: usize,
    },
    /// Zero matches on the first page.
    Empty,
}

impl Frame {
    pub fn posts(&self) -> &[Arc<Post>] {
        match self {
            Frame::Reset { posts, .. } | Frame::Append { posts, .. } => posts,
            Frame::Empty => &[],
        }
    }

    pub fn has_more(&self) -> bool {
        match self {
            Frame::Reset { has_more, .. } | Frame::Append { has_more, .. } => *has_more,
            Frame::Empty => false,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Frame::Empty)
    }
}

/// A loaded store plus the current view over it.
#[derive(Debug, Clone)]
pub struct Feed {
    store: PostStore,
    view: ViewState,
    filtered: Vec<Arc<Post>>,
}

impl Feed {
    /// Starts on the unfiltered first page. Returns the initial frame.
    pub fn new(store: PostStore, page_size: usize) -> (Self, Frame) {
        Self::with_query(store, page_size, QueryState::default())
    }

    /// Starts on the first page of `query`. Returns the initial frame.
    pub fn with_query(store: PostStore, page_size: usize, query: QueryState) -> (Self, Frame) {
        let view = ViewState::new(page_size).with_query(query);
        let filtered = query::filter(store.posts(), &view.query);
        let feed = Self {
            store,
            view,
            filtered,
        };
        let frame = feed.first_page_frame();
        (feed, frame)
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn query(&self) -> &QueryState {
        &self.view.query
    }

    pub fn filtered(&self) -> &[Arc<Post>] {
        &self.filtered
    }

    /// Everything currently on screen.
    pub fn visible(&self) -> &[Arc<Post>] {
        self.view.pager.visible(&self.filtered)
    }

    pub fn has_more(&self) -> bool {
        self.view.pager.has_more(self.filtered.len())
    }

    /// Replaces the query, re-filters and goes back to the first page.
    pub fn apply_query(&mut self, query: QueryState) -> Frame {
        let view = self.view.clone().with_query(query);
        self.filtered = query::filter(self.store.posts(), &view.query);
        self.view = view;
        debug!(
            category = %self.view.query.category,
            search = %self.view.query.search,
            matches = self.filtered.len(),
            "query applied"
        );
        self.first_page_frame()
    }

    pub fn set_search(&mut self, term: &str) -> Frame {
        let query = self.view.query.clone().with_search(term.trim());
        self.apply_query(query)
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) -> Frame {
        let query = self.view.query.clone().with_category(category);
        self.apply_query(query)
    }

    pub fn clear_filters(&mut self) -> Frame {
        self.apply_query(QueryState::default())
    }

    /// Shows the next page. `None` when everything is already visible.
    pub fn load_more(&mut self) -> Option<Frame> {
        if !self.has_more() {
            return None;
        }
        self.view = self.view.clone().advanced();
        Some(Frame::Append {
            posts: self.view.pager.current_page(&self.filtered).to_vec(),
            has_more: self.has_more(),
            total: self.filtered.len(),
        })
    }

    fn first_page_frame(&self) -> Frame {
        let posts = self.visible();
        if posts.is_empty() {
            return Frame::Empty;
        }
        Frame::Reset {
            posts: posts.to_vec(),
            has_more: self.has_more(),
            total: self.filtered.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{numbered_posts, sample_store, PostBuilder};

    fn store_of(count: usize) -> PostStore {
        PostStore::from_posts(numbered_posts(count)).unwrap()
    }

    fn ids(posts: &[Arc<Post>]) -> Vec<String> {
        posts.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_initial_frame_is_first_page() {
        let (feed, frame) = Feed::new(store_of(8), 6);
        match frame {
            Frame::Reset {
                posts,
                has_more,
                total,
            } => {
                assert_eq!(ids(&posts), vec!["1", "2", "3", "4", "5", "6"]);
                assert!(has_more);
                assert_eq!(total, 8);
            }
            other => panic!("Expected Reset, got {:?}", other),
        }
        assert_eq!(feed.view().pager.page_count(), 1);
    }

    #[test]
    fn test_feed_can_start_filtered() {
        let (feed, frame) = Feed::with_query(sample_store(), 6, QueryState::new("Go", ""));
        assert_eq!(ids(frame.posts()), vec!["3", "7"]);
        assert!(!frame.has_more());
        assert_eq!(feed.query().category, CategoryFilter::from("Go"));
    }

    #[test]
    fn test_load_more_appends_next_page_only() {
        let (mut feed, _) = Feed::new(store_of(8), 6);

        let frame = feed.load_more().unwrap();
        match &frame {
            Frame::Append {
                posts, has_more, ..
            } => {
                assert_eq!(ids(posts), vec!["7", "8"]);
                assert!(!has_more);
            }
            other => panic!("Expected Append, got {:?}", other),
        }
        assert_eq!(feed.visible().len(), 8);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_load_more_when_exhausted_is_noop() {
        let (mut feed, _) = Feed::new(store_of(4), 6);
        assert!(feed.load_more().is_none());
        assert_eq!(feed.view().pager.page_count(), 1);
    }

    #[test]
    fn test_query_change_resets_page_count() {
        let (mut feed, _) = Feed::new(store_of(20), 6);
        feed.load_more();
        feed.load_more();
        assert_eq!(feed.view().pager.page_count(), 3);

        let before = feed.view().clone();
        feed.set_search("Post");
        let after = feed.view().clone();

        assert_ne!(before.query, after.query);
        assert_eq!(after.pager.page_count(), 1);
        assert_eq!(after.pager.page_size(), 6);
    }

    #[test]
    fn test_view_state_with_query_is_one_transition() {
        let view = ViewState::new(6).advanced().advanced();
        let next = view.with_query(QueryState::new("Web", "css"));
        assert_eq!(next.query, QueryState::new("Web", "css"));
        assert_eq!(next.pager.page_count(), 1);
    }

    #[test]
    fn test_cleared_resets_everything() {
        let view = ViewState::new(4)
            .with_query(QueryState::new("Go", "x"))
            .advanced();
        let cleared = view.cleared();
        assert!(cleared.query.is_cleared());
        assert_eq!(cleared.pager.page_count(), 1);
        assert_eq!(cleared.pager.page_size(), 4);
    }

    #[test]
    fn test_zero_matches_gives_empty_state() {
        let (mut feed, _) = Feed::new(sample_store(), 6);
        let frame = feed.set_search("no-such-thing-anywhere");
        assert!(frame.is_empty_state());
        assert!(feed.filtered().is_empty());
        assert!(!feed.has_more());
    }

    #[test]
    fn test_empty_store_gives_empty_state() {
        let (_, frame) = Feed::new(PostStore::from_posts(vec![]).unwrap(), 6);
        assert_eq!(frame, Frame::Empty);
    }

    #[test]
    fn test_clear_filters_restores_everything() {
        let store = sample_store();
        let total = store.len();
        let (mut feed, _) = Feed::new(store, 100);

        feed.set_category("Go");
        assert!(feed.filtered().len() < total);

        let frame = feed.clear_filters();
        assert_eq!(frame.posts().len(), total);
        assert!(feed.query().is_cleared());
    }

    #[test]
    fn test_search_and_category_compose() {
        let posts = vec![
            PostBuilder::new(1)
                .title("Fearless concurrency")
                .category("Systems")
                .tags(&["rust"])
                .build(),
            PostBuilder::new(2)
                .title("Goroutines")
                .category("Go")
                .build(),
        ];
        let (mut feed, _) = Feed::new(PostStore::from_posts(posts).unwrap(), 6);

        let frame = feed.set_search("Rust");
        assert_eq!(ids(frame.posts()), vec!["1"]);

        let frame = feed.set_category("Go");
        assert!(frame.is_empty_state());
        assert_eq!(feed.query().search, "Rust");
    }

    #[test]
    fn test_set_search_stores_trimmed_term() {
        let (mut feed, _) = Feed::new(sample_store(), 6);
        feed.set_search("  rust ");
        assert_eq!(feed.query().search, "rust");
    }

    #[test]
    fn test_load_more_does_not_refilter() {
        let (mut feed, _) = Feed::new(store_of(13), 6);
        let filtered_before = feed.filtered().to_vec();
        feed.load_more();
        assert_eq!(feed.filtered(), filtered_before.as_slice());
    }

    #[test]
    fn test_frame_accessors() {
        assert!(Frame::Empty.posts().is_empty());
        assert!(!Frame::Empty.has_more());
        let frame = Frame::Append {
            posts: vec![],
            has_more: true,
            total: 3,
        };
        assert!(frame.has_more());
        assert!(!frame.is_empty_state());
    }
}
