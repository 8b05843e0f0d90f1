//! Fixtures for unit and integration tests.
//!
//! Enabled for this crate's own tests, and for dependents through the `test_utils` feature.

use crate::detail::PostDetail;
use crate::driver::RenderDriver;
use crate::error::{LoadError, Result};
use crate::feed::Frame;
use crate::model::{Post, PostId};
use crate::store::PostStore;
use chrono::NaiveDate;
use std::sync::Arc;

/// Builds a [`Post`] with neutral defaults, overriding only what a test cares about.
pub struct PostBuilder {
    post: Post,
}

impl PostBuilder {
    pub fn new(id: impl Into<PostId>) -> Self {
        let id = id.into();
        Self {
            post: Post {
                title: format!("Post {}", id),
                snippet: format!("Snippet for post {}", id),
                content: None,
                author: "Ada Brook".to_string(),
                category: "General".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                tags: Vec::new(),
                image: "cover.jpg".to_string(),
                id,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.post.title = title.to_string();
        self
    }

    pub fn snippet(mut self, snippet: &str) -> Self {
        self.post.snippet = snippet.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.post.content = Some(content.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.post.author = author.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.post.category = category.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.post.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.post.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.post.image = image.to_string();
        self
    }

    pub fn build(self) -> Post {
        self.post
    }
}

/// Serializes posts the way a payload file holds them.
pub fn posts_json(posts: &[Post]) -> String {
    serde_json::to_string(posts).unwrap()
}

/// A small, varied corpus. Categories appear in the order Systems, Web, Go.
pub fn sample_posts() -> Vec<Post> {
    vec![
        PostBuilder::new(1)
            .title("Ownership in Practice")
            .snippet("Borrowing without tears.")
            .author("Ada Brook")
            .category("Systems")
            .date(2024, 3, 4)
            .tags(&["rust", "memory"])
            .image("ownership.jpg")
            .build(),
        PostBuilder::new(2)
            .title("Grid Layouts That Hold Up")
            .snippet("Modern CSS for card walls.")
            .content("Subgrid, auto-fill and the rest of the toolbox.")
            .author("Lin Park")
            .category("Web")
            .date(2024, 2, 18)
            .tags(&["css", "layout"])
            .image("grid.jpg")
            .build(),
        PostBuilder::new(3)
            .title("Channels and Select")
            .snippet("Coordinating goroutines.")
            .author("Sam Ortiz")
            .category("Go")
            .date(2024, 1, 30)
            .tags(&["concurrency"])
            .image("channels.jpg")
            .build(),
        PostBuilder::new(4)
            .title("Async Rust on the Server")
            .snippet("Runtimes, executors and backpressure.")
            .author("Ada Brook")
            .category("Systems")
            .date(2023, 12, 25)
            .tags(&["rust", "async"])
            .image("async.jpg")
            .build(),
        PostBuilder::new(5)
            .title("WebAssembly in the Browser")
            .snippet("Shipping Rust to the front end.")
            .author("Lin Park")
            .category("Web")
            .date(2023, 11, 2)
            .tags(&["wasm"])
            .image("wasm.jpg")
            .build(),
        PostBuilder::new(6)
            .title("Cascade Layers")
            .snippet("Taming specificity in large CSS codebases.")
            .author("Mia Chen")
            .category("Web")
            .date(2023, 10, 9)
            .tags(&["css"])
            .image("layers.jpg")
            .build(),
        PostBuilder::new(7)
            .title("Profiling Go Services")
            .snippet("pprof from first flame graph to fix.")
            .author("Sam Ortiz")
            .category("Go")
            .date(2023, 9, 14)
            .tags(&["performance"])
            .image("pprof.jpg")
            .build(),
    ]
}

pub fn sample_store() -> PostStore {
    PostStore::from_posts(sample_posts()).unwrap()
}

/// `count` posts with ids `1..=count` titled "Post N".
pub fn numbered_posts(count: usize) -> Vec<Post> {
    (1..=count as i64)
        .map(|n| PostBuilder::new(n).build())
        .collect()
}

/// What a [`RecordingDriver`] saw, with posts reduced to their ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Loading,
    LoadError(String),
    Reset { ids: Vec<String>, has_more: bool },
    Append { ids: Vec<String>, has_more: bool },
    Empty,
    Detail(String),
    CloseDetail,
}

/// A driver that records every call instead of painting anything.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub events: Vec<DriverEvent>,
}

fn ids_of(posts: &[Arc<Post>]) -> Vec<String> {
    posts.iter().map(|p| p.id.to_string()).collect()
}

impl RenderDriver for RecordingDriver {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let event = match frame {
            Frame::Reset {
                posts, has_more, ..
            } => DriverEvent::Reset {
                ids: ids_of(posts),
                has_more: *has_more,
            },
            Frame::Append {
                posts, has_more, ..
            } => DriverEvent::Append {
                ids: ids_of(posts),
                has_more: *has_more,
            },
            Frame::Empty => DriverEvent::Empty,
        };
        self.events.push(event);
        Ok(())
    }

    fn show_loading(&mut self) -> Result<()> {
        self.events.push(DriverEvent::Loading);
        Ok(())
    }

    fn show_load_error(&mut self, error: &LoadError) -> Result<()> {
        self.events.push(DriverEvent::LoadError(error.to_string()));
        Ok(())
    }

    fn show_detail(&mut self, detail: &PostDetail) -> Result<()> {
        self.events.push(DriverEvent::Detail(detail.id.to_string()));
        Ok(())
    }

    fn close_detail(&mut self) -> Result<()> {
        self.events.push(DriverEvent::CloseDetail);
        Ok(())
    }
}
