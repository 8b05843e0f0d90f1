//! # Blogdeck Architecture
//!
//! Blogdeck is a **UI-agnostic blog feed library**. The terminal client is one consumer of it;
//! the same core could sit behind a browser front-end or a TUI.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads session input, paints frames     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the load phase, the feed state and the driver       │
//! │  - Turns user actions into frames for the RenderDriver      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (feed.rs, query.rs, pager.rs, detail.rs)          │
//! │  - Pure functions over an explicit ViewState                │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PostSource trait: FileSource, MemorySource               │
//! │  - PostStore: immutable once loaded                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! ```text
//! PostStore ──► query::filter ──► pager::visible_slice ──► RenderDriver
//!                   ▲                    ▲
//!             QueryState            PagerState
//! ```
//!
//! A change of [`query::QueryState`] re-runs the filter and resets the pager in a single
//! transition (see [`feed::ViewState`]). "Load more" only advances the pager and appends
//! the next page; the filter is not re-run because the store never changes after load.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular Rust types and
//! never writes to stdout/stderr. Everything that paints goes through a
//! [`driver::RenderDriver`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`feed`]: View state transitions and frame production
//! - [`query`]: Category and text search filtering
//! - [`pager`]: Visible window arithmetic
//! - [`detail`]: Single post lookup for the preview
//! - [`driver`]: The rendering seam
//! - [`debounce`]: Cancellable timer for search input
//! - [`store`]: Post sources and the immutable post store
//! - [`model`]: Core data types (`Post`, `PostId`)
//! - [`share`]: Read-only share triple
//! - [`theme`]: Persisted light/dark preference
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod driver;
pub mod error;
pub mod feed;
pub mod model;
pub mod pager;
pub mod query;
pub mod share;
pub mod store;
pub mod theme;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
