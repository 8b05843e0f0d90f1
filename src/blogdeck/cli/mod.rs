//! # CLI Behavior
//!
//! This is **one possible UI client** for blogdeck, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`blogdeck`].
//!
//! ## Naked Execution (`blogdeck`)
//!
//! Running `blogdeck` with no arguments starts `blogdeck browse`, the interactive feed.
//! Browsing is what the tool is for, so it is the path of least resistance.
//!
//! ## One-shot vs. Interactive
//!
//! One-shot commands (`list`, `show`, `share`, `categories`) load the posts, run one action and
//! exit. A load failure is an error (exit code 1).
//!
//! The interactive session starts the load and reads commands at the same time. Commands typed
//! before the posts arrive are ignored; a failed load can be retried with `retry`.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and format output
//! - `session`: The interactive browse loop
//! - `render`: The terminal [`blogdeck::driver::RenderDriver`]
//! - `setup`: Argument parsing via clap
//! - `styles`: Light and dark palettes
//! - `templates`: Output templates

mod commands;
mod render;
mod session;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
