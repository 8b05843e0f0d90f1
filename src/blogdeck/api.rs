//! # API Facade
//!
//! The API layer is the single entry point for UI clients. It owns:
//!
//! - the **load phase** (loading, failed, ready),
//! - the [`Feed`] once posts are loaded,
//! - which post preview is open,
//! - the [`RenderDriver`] every result is painted through.
//!
//! ## Load Phase
//!
//! ```text
//!            begin_load            finish_load(Ok)
//!  (new) ──► Loading ───────────────────────────────► Ready(Feed)
//!               │  finish_load(Err)
//!               ▼
//!            Failed ──── begin_load (retry) ──► Loading
//! ```
//!
//! While not `Ready`, paging, preview and share actions are ignored: there are no posts to run
//! them on. This is what lets a client distinguish "zero matches" (`Frame::Empty`) from "not
//! loaded yet".
//!
//! Query changes (search, category, clear) are not lost while loading: they update a pending
//! [`QueryState`] that the first frame is filtered with once the posts arrive. A reload starts
//! from the query the feed had.
//!
//! ## What the API Does NOT Do
//!
//! - **Filtering or paging logic**: that belongs to `feed.rs`, `query.rs`, `pager.rs`
//! - **Presentation**: drivers decide what a frame looks like
//! - **Timers**: debouncing search input is the client's job (see [`crate::debounce`])

use crate::detail::{find_by_id, PostDetail};
use crate::driver::RenderDriver;
use crate::error::{LoadError, Result};
use crate::feed::Feed;
use crate::model::PostId;
use crate::query::{CategoryFilter, QueryState};
use crate::share::ShareInfo;
use crate::store::{PostSource, PostStore};
use tracing::{debug, warn};

enum Phase {
    Loading,
    Failed(LoadError),
    Ready(Feed),
}

/// Outcome of a load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { count: usize },
    Failed,
}

/// The main API facade for blogdeck operations.
pub struct BlogApi<D: RenderDriver> {
    driver: D,
    page_size: usize,
    site_url: String,
    phase: Phase,
    pending_query: QueryState,
    open_detail: Option<PostId>,
}

impl<D: RenderDriver> BlogApi<D> {
    pub fn new(driver: D, page_size: usize) -> Self {
        Self {
            driver,
            page_size,
            site_url: String::new(),
            phase: Phase::Loading,
            pending_query: QueryState::default(),
            open_detail: None,
        }
    }

    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Loads posts from `source` and paints the first page (or the error).
    pub async fn load<S: PostSource>(&mut self, source: &S) -> Result<LoadStatus> {
        self.begin_load()?;
        let result = PostStore::load(source).await;
        self.finish_load(result)
    }

    /// Enters the loading phase. Any previous feed and open preview are dropped; the feed's
    /// query is kept for the next one.
    pub fn begin_load(&mut self) -> Result<()> {
        if let Phase::Ready(feed) = &self.phase {
            self.pending_query = feed.query().clone();
        }
        self.phase = Phase::Loading;
        self.open_detail = None;
        self.driver.show_loading()
    }

    /// Completes a load started with [`Self::begin_load`].
    pub fn finish_load(
        &mut self,
        result: std::result::Result<PostStore, LoadError>,
    ) -> Result<LoadStatus> {
        match result {
            Ok(store) => {
                let count = store.len();
                let query = std::mem::take(&mut self.pending_query);
                let (feed, frame) = Feed::with_query(store, self.page_size, query);
                self.phase = Phase::Ready(feed);
                self.driver.render(&frame)?;
                Ok(LoadStatus::Loaded { count })
            }
            Err(error) => {
                warn!(%error, "loading posts failed");
                self.driver.show_load_error(&error)?;
                self.phase = Phase::Failed(error);
                Ok(LoadStatus::Failed)
            }
        }
    }

    /// Enters the ready phase without painting the first page.
    ///
    /// For clients that only look posts up (a preview, a share) and never show the feed.
    pub fn set_store(&mut self, store: PostStore) {
        let query = std::mem::take(&mut self.pending_query);
        let (feed, _) = Feed::with_query(store, self.page_size, query);
        self.phase = Phase::Ready(feed);
        self.open_detail = None;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn feed(&self) -> Option<&Feed> {
        match &self.phase {
            Phase::Ready(feed) => Some(feed),
            _ => None,
        }
    }

    /// The feed's query, or the one waiting for the posts to load.
    pub fn query(&self) -> &QueryState {
        match &self.phase {
            Phase::Ready(feed) => feed.query(),
            _ => &self.pending_query,
        }
    }

    /// Replaces category and search at once, back to the first page.
    pub fn apply_query(&mut self, query: QueryState) -> Result<()> {
        let Phase::Ready(feed) = &mut self.phase else {
            self.record_query("query", |_| query);
            return Ok(());
        };
        let frame = feed.apply_query(query);
        self.driver.render(&frame)
    }

    pub fn search(&mut self, term: &str) -> Result<()> {
        let Phase::Ready(feed) = &mut self.phase else {
            self.record_query("search", |query| query.with_search(term.trim()));
            return Ok(());
        };
        let frame = feed.set_search(term);
        self.driver.render(&frame)
    }

    pub fn filter_category(&mut self, category: impl Into<CategoryFilter>) -> Result<()> {
        let Phase::Ready(feed) = &mut self.phase else {
            self.record_query("category", |query| query.with_category(category));
            return Ok(());
        };
        let frame = feed.set_category(category);
        self.driver.render(&frame)
    }

    /// Back to all categories, no search, first page.
    pub fn clear_filters(&mut self) -> Result<()> {
        let Phase::Ready(feed) = &mut self.phase else {
            self.record_query("clear", |_| QueryState::default());
            return Ok(());
        };
        let frame = feed.clear_filters();
        self.driver.render(&frame)
    }

    /// Appends the next page. Returns false when there was nothing more to show.
    pub fn load_more(&mut self) -> Result<bool> {
        let Phase::Ready(feed) = &mut self.phase else {
            ignored("load more");
            return Ok(false);
        };
        match feed.load_more() {
            Some(frame) => {
                self.driver.render(&frame)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Shows the preview of `id`. An unknown id is a silent no-op; returns whether it opened.
    pub fn open_detail(&mut self, id: &PostId) -> Result<bool> {
        let Phase::Ready(feed) = &self.phase else {
            ignored("open");
            return Ok(false);
        };
        let Some(post) = find_by_id(feed.store().posts(), id) else {
            debug!(%id, "preview requested for unknown post");
            return Ok(false);
        };

        let detail = PostDetail::from_post(post);
        self.driver.show_detail(&detail)?;
        self.open_detail = Some(detail.id);
        Ok(true)
    }

    /// Hides the preview. Returns false when none was open.
    pub fn close_detail(&mut self) -> Result<bool> {
        if self.open_detail.take().is_none() {
            return Ok(false);
        }
        self.driver.close_detail()?;
        Ok(true)
    }

    pub fn open_detail_id(&self) -> Option<&PostId> {
        self.open_detail.as_ref()
    }

    /// The share triple for `id`, `None` when not loaded or unknown.
    pub fn share(&self, id: &PostId) -> Option<ShareInfo> {
        let feed = self.feed()?;
        find_by_id(feed.store().posts(), id).map(|post| ShareInfo::for_post(post, &self.site_url))
    }

    /// Distinct categories, empty until loaded.
    pub fn categories(&self) -> Vec<String> {
        self.feed()
            .map(|feed| {
                feed.store()
                    .categories()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    fn record_query(&mut self, action: &str, update: impl FnOnce(QueryState) -> QueryState) {
        let query = update(std::mem::take(&mut self.pending_query));
        debug!(
            action,
            category = %query.category,
            search = %query.search,
            "query recorded until posts load"
        );
        self.pending_query = query;
    }
}

fn ignored(action: &str) {
    debug!(action, "ignored: posts are not loaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemorySource;
    use crate::test_utils::{
        numbered_posts, posts_json, sample_posts, sample_store, DriverEvent, RecordingDriver,
    };

    async fn loaded_api(posts: &[crate::model::Post], page_size: usize) -> BlogApi<RecordingDriver> {
        let mut api = BlogApi::new(RecordingDriver::default(), page_size)
            .with_site_url("https://blog.example.com/");
        let source = MemorySource::new(posts_json(posts));
        api.load(&source).await.unwrap();
        api
    }

    #[tokio::test]
    async fn test_load_renders_first_page() {
        let api = loaded_api(&numbered_posts(8), 6).await;
        let events = &api.driver().events;

        assert_eq!(events[0], DriverEvent::Loading);
        match &events[1] {
            DriverEvent::Reset { ids, has_more } => {
                assert_eq!(ids.len(), 6);
                assert!(*has_more);
            }
            other => panic!("Expected Reset, got {:?}", other),
        }
        assert!(api.is_ready());
    }

    #[tokio::test]
    async fn test_load_failure_reports_error() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        let status = api.load(&MemorySource::new("{oops")).await.unwrap();

        assert_eq!(status, LoadStatus::Failed);
        assert!(matches!(api.load_error(), Some(LoadError::Parse(_))));
        assert!(matches!(
            api.driver().events.last(),
            Some(DriverEvent::LoadError(_))
        ));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.load(&MemorySource::new("[")).await.unwrap();
        assert!(api.load_error().is_some());

        let status = api
            .load(&MemorySource::new(posts_json(&numbered_posts(2))))
            .await
            .unwrap();
        assert_eq!(status, LoadStatus::Loaded { count: 2 });
        assert!(api.load_error().is_none());
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.begin_load().unwrap();

        assert!(!api.load_more().unwrap());
        assert!(!api.open_detail(&PostId::Number(1)).unwrap());
        assert!(api.share(&PostId::Number(1)).is_none());
        assert!(api.categories().is_empty());

        assert!(api.is_loading());
        assert_eq!(api.driver().events, vec![DriverEvent::Loading]);
    }

    #[test]
    fn test_query_changes_while_loading_filter_the_first_frame() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.begin_load().unwrap();

        api.filter_category("Web").unwrap();
        api.search("  css ").unwrap();
        assert_eq!(api.driver().events, vec![DriverEvent::Loading]);
        assert_eq!(api.query(), &QueryState::new("Web", "css"));

        api.finish_load(Ok(sample_store())).unwrap();
        assert_eq!(
            api.driver().events,
            vec![
                DriverEvent::Loading,
                DriverEvent::Reset {
                    ids: vec!["2".to_string(), "6".to_string()],
                    has_more: false,
                },
            ]
        );
        assert_eq!(api.feed().unwrap().query(), &QueryState::new("Web", "css"));
    }

    #[test]
    fn test_clear_while_loading_drops_recorded_query() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.begin_load().unwrap();
        api.filter_category("Go").unwrap();
        api.clear_filters().unwrap();

        api.finish_load(Ok(sample_store())).unwrap();
        assert!(api.feed().unwrap().query().is_cleared());
        assert!(matches!(
            api.driver().events.last(),
            Some(DriverEvent::Reset { ids, .. }) if ids.len() == 6
        ));
    }

    #[test]
    fn test_query_recorded_after_failure_survives_retry() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.begin_load().unwrap();
        api.finish_load(PostStore::parse(b"{oops")).unwrap();

        api.filter_category("Go").unwrap();
        api.begin_load().unwrap();
        api.finish_load(Ok(sample_store())).unwrap();

        assert!(matches!(
            api.driver().events.last(),
            Some(DriverEvent::Reset { ids, .. }) if ids == &vec!["3".to_string(), "7".to_string()]
        ));
    }

    #[tokio::test]
    async fn test_reload_keeps_the_query() {
        let mut api = loaded_api(&sample_posts(), 6).await;
        api.filter_category("Go").unwrap();

        api.begin_load().unwrap();
        assert_eq!(api.query().category, CategoryFilter::from("Go"));
        api.finish_load(Ok(sample_store())).unwrap();

        assert_eq!(api.feed().unwrap().filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_search_then_load_more_then_search_resets() {
        let mut api = loaded_api(&numbered_posts(20), 6).await;

        assert!(api.load_more().unwrap());
        assert_eq!(api.feed().unwrap().view().pager.page_count(), 2);

        api.search("Post 1").unwrap();
        assert_eq!(api.feed().unwrap().view().pager.page_count(), 1);

        match api.driver().events.last() {
            Some(DriverEvent::Reset { ids, .. }) => {
                // Post 1, Post 10..Post 19
                assert_eq!(ids.len(), 6);
                assert_eq!(ids[0], "1");
            }
            other => panic!("Expected Reset, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_more_appends() {
        let mut api = loaded_api(&numbered_posts(8), 6).await;
        assert!(api.load_more().unwrap());
        assert!(!api.load_more().unwrap());

        match api.driver().events.last() {
            Some(DriverEvent::Append { ids, has_more }) => {
                assert_eq!(ids, &vec!["7".to_string(), "8".to_string()]);
                assert!(!has_more);
            }
            other => panic!("Expected Append, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_result_then_clear() {
        let mut api = loaded_api(&sample_posts(), 6).await;
        api.search("nothing matches this").unwrap();
        assert_eq!(api.driver().events.last(), Some(&DriverEvent::Empty));

        api.clear_filters().unwrap();
        assert!(matches!(
            api.driver().events.last(),
            Some(DriverEvent::Reset { .. })
        ));
        assert!(api.feed().unwrap().query().is_cleared());
    }

    #[tokio::test]
    async fn test_open_and_close_detail() {
        let mut api = loaded_api(&sample_posts(), 6).await;

        assert!(api.open_detail(&PostId::Number(2)).unwrap());
        assert_eq!(api.open_detail_id(), Some(&PostId::Number(2)));
        assert!(matches!(
            api.driver().events.last(),
            Some(DriverEvent::Detail(id)) if id == "2"
        ));

        assert!(api.close_detail().unwrap());
        assert_eq!(api.driver().events.last(), Some(&DriverEvent::CloseDetail));
        assert!(!api.close_detail().unwrap());
    }

    #[tokio::test]
    async fn test_open_unknown_detail_is_silent() {
        let mut api = loaded_api(&sample_posts(), 6).await;
        let events_before = api.driver().events.clone();
        let view_before = api.feed().unwrap().view().clone();

        assert!(!api.open_detail(&PostId::Number(404)).unwrap());

        assert_eq!(api.driver().events, events_before);
        assert_eq!(api.feed().unwrap().view(), &view_before);
        assert!(api.open_detail_id().is_none());
    }

    #[tokio::test]
    async fn test_detail_opens_posts_outside_current_filter() {
        let mut api = loaded_api(&sample_posts(), 6).await;
        api.filter_category("Go").unwrap();
        assert!(api.open_detail(&PostId::Number(1)).unwrap());
    }

    #[tokio::test]
    async fn test_share_triple() {
        let api = loaded_api(&sample_posts(), 6).await;
        let info = api.share(&PostId::Number(1)).unwrap();
        assert_eq!(info.url, "https://blog.example.com/");
        assert!(api.share(&PostId::Number(404)).is_none());
    }

    #[test]
    fn test_set_store_is_quiet() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.set_store(sample_store());

        assert!(api.is_ready());
        assert!(api.driver().events.is_empty());
        assert!(api.open_detail(&PostId::Number(3)).unwrap());
    }

    #[test]
    fn test_apply_query_sets_both_filters() {
        let mut api = BlogApi::new(RecordingDriver::default(), 6);
        api.set_store(sample_store());

        api.apply_query(QueryState::new("Web", "css")).unwrap();
        assert_eq!(
            api.driver().events,
            vec![DriverEvent::Reset {
                ids: vec!["2".to_string(), "6".to_string()],
                has_more: false,
            }]
        );
    }

    #[tokio::test]
    async fn test_categories() {
        let api = loaded_api(&sample_posts(), 6).await;
        assert_eq!(api.categories(), vec!["Systems", "Web", "Go"]);
    }
}
