//! # Interactive Session
//!
//! `blogdeck browse` runs three event sources through one `tokio::select!` loop:
//!
//! ```text
//!   stdin lines ──► parse_command ──► API call ─────────────┐
//!        │                                                   ▼
//!        └─ search ──► Debouncer ── quiet period ──► api.search ──► TerminalDriver
//!                                                            ▲
//!   PostStore::load (started up front, restarted by retry) ──┘
//! ```
//!
//! The load is started before the first prompt and runs while commands are read. Commands that
//! act on the feed (`cat`, `clear`, `more`, `open`, `share`) are queued until it completes and
//! then run in the order they were typed. A debounced search that fires first is recorded by
//! the API and filters the first frame.
//!
//! When stdin closes the session does not stop straight away: an outstanding load and a pending
//! search are let through first, so `blogdeck < /dev/null` still prints the feed.

use super::commands::{parse_id, share_post, AppContext};
use super::render::MessageLevel;
use blogdeck::debounce::Debouncer;
use blogdeck::error::{LoadError, Result};
use blogdeck::model::PostId;
use blogdeck::query::ALL_CATEGORIES;
use blogdeck::share::SharePlatform;
use blogdeck::store::PostStore;
use blogdeck::theme::toggle_theme;
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

type LoadFuture = Pin<Box<dyn Future<Output = std::result::Result<PostStore, LoadError>>>>;

const HELP: &[&str] = &[
    "/<term> or search <term>   search titles, snippets, tags and authors",
    "cat <name> | cat all       filter by category",
    "more                       show the next page",
    "clear                      reset category and search",
    "open <id> / close          show or hide a post preview",
    "share <id> [platform]      copy a post's share text, or its twitter/facebook/linkedin link",
    "theme                      switch between light and dark",
    "retry                      load the posts again after a failure",
    "quit                       leave",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Category(String),
    More,
    Clear,
    Open(PostId),
    Close,
    Share(PostId, Option<SharePlatform>),
    Theme,
    Retry,
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    if line.is_empty() {
        return SessionCommand::Nothing;
    }
    if let Some(term) = line.strip_prefix('/') {
        return SessionCommand::Search(term.trim().to_string());
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word, rest) {
        ("search" | "s", term) => SessionCommand::Search(term.to_string()),
        ("cat" | "category", "") => SessionCommand::Category(ALL_CATEGORIES.to_string()),
        ("cat" | "category", name) => SessionCommand::Category(name.to_string()),
        ("more" | "m", "") => SessionCommand::More,
        ("clear", "") => SessionCommand::Clear,
        ("open" | "o", id) if !id.is_empty() => SessionCommand::Open(parse_id(id)),
        ("close" | "esc" | "\u{1b}", "") => SessionCommand::Close,
        ("share", args) if !args.is_empty() => {
            parse_share(args).unwrap_or_else(|| SessionCommand::Unknown(line.to_string()))
        }
        ("theme", "") => SessionCommand::Theme,
        ("retry", "") => SessionCommand::Retry,
        ("help" | "?", "") => SessionCommand::Help,
        ("quit" | "exit" | "q", "") => SessionCommand::Quit,
        _ => SessionCommand::Unknown(line.to_string()),
    }
}

/// `share <id> [platform]`; `None` when the platform is unknown or there are extra words.
fn parse_share(args: &str) -> Option<SessionCommand> {
    let mut words = args.split_whitespace();
    let id = parse_id(words.next()?);
    let platform: Option<SharePlatform> = match words.next() {
        Some(name) => Some(name.parse().ok()?),
        None => None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(SessionCommand::Share(id, platform))
}

impl SessionCommand {
    /// Commands that need loaded posts and wait for an outstanding load.
    fn needs_posts(&self) -> bool {
        matches!(
            self,
            SessionCommand::Category(_)
                | SessionCommand::More
                | SessionCommand::Clear
                | SessionCommand::Open(_)
                | SessionCommand::Share(..)
        )
    }
}

pub async fn browse(ctx: &mut AppContext) -> Result<()> {
    let (mut debouncer, mut searches) = Debouncer::<String>::new(ctx.config.debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut queued: Vec<SessionCommand> = Vec::new();
    let mut load = Some(start_load(ctx)?);

    loop {
        if !stdin_open && load.is_none() && !debouncer.is_pending() && searches.is_empty() {
            break;
        }

        tokio::select! {
            result = wait_for(&mut load) => {
                load = None;
                ctx.api.finish_load(result)?;
                for command in std::mem::take(&mut queued) {
                    execute(ctx, command, &mut debouncer, &mut load)?;
                }
            }
            Some(term) = searches.recv() => {
                ctx.api.search(term.as_str())?;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    stdin_open = false;
                    continue;
                };
                match parse_command(&line) {
                    SessionCommand::Quit => break,
                    command if load.is_some() && command.needs_posts() => {
                        debug!(?command, "queued until posts load");
                        queued.push(command);
                    }
                    command => execute(ctx, command, &mut debouncer, &mut load)?,
                }
            }
        }
    }
    Ok(())
}

fn start_load(ctx: &mut AppContext) -> Result<LoadFuture> {
    ctx.api.begin_load()?;
    let source = ctx.source.clone();
    Ok(Box::pin(async move { PostStore::load(&source).await }))
}

async fn wait_for(load: &mut Option<LoadFuture>) -> std::result::Result<PostStore, LoadError> {
    match load {
        Some(future) => future.await,
        None => std::future::pending().await,
    }
}

fn execute(
    ctx: &mut AppContext,
    command: SessionCommand,
    debouncer: &mut Debouncer<String>,
    load: &mut Option<LoadFuture>,
) -> Result<()> {
    debug!(?command, "session command");
    match command {
        SessionCommand::Search(term) => debouncer.push(term),
        SessionCommand::Category(name) => ctx.api.filter_category(name)?,
        SessionCommand::More => {
            if !ctx.api.is_ready() {
                return not_loaded(ctx);
            }
            if !ctx.api.load_more()? {
                ctx.say(MessageLevel::Info, "No more posts.")?;
            }
        }
        SessionCommand::Clear => {
            debouncer.cancel();
            ctx.api.clear_filters()?;
        }
        SessionCommand::Open(id) => {
            if !ctx.api.is_ready() {
                return not_loaded(ctx);
            }
            ctx.api.open_detail(&id)?;
        }
        SessionCommand::Close => {
            ctx.api.close_detail()?;
        }
        SessionCommand::Share(id, platform) => {
            if !ctx.api.is_ready() {
                return not_loaded(ctx);
            }
            share_post(ctx, &id, platform)?;
        }
        SessionCommand::Theme => match toggle_theme(&ctx.data_dir) {
            Ok(theme) => {
                ctx.api.driver_mut().set_theme(theme);
                ctx.say(MessageLevel::Success, &format!("Theme set to {}.", theme))?;
            }
            Err(e) => ctx.say(MessageLevel::Error, &format!("Could not save theme: {}", e))?,
        },
        SessionCommand::Retry => {
            if load.is_none() && ctx.api.load_error().is_some() {
                *load = Some(start_load(ctx)?);
            } else {
                ctx.say(MessageLevel::Info, "Nothing to retry.")?;
            }
        }
        SessionCommand::Help => {
            for line in HELP {
                ctx.say(MessageLevel::Info, line)?;
            }
        }
        SessionCommand::Unknown(line) => ctx.say(
            MessageLevel::Warning,
            &format!("Unknown command: {} (type `help`)", line),
        )?,
        SessionCommand::Nothing | SessionCommand::Quit => {}
    }
    Ok(())
}

fn not_loaded(ctx: &mut AppContext) -> Result<()> {
    ctx.say(
        MessageLevel::Warning,
        "Posts are not loaded. Type `retry` to try again.",
    )
}
