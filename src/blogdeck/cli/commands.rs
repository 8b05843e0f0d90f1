use super::render::{MessageLevel, TerminalDriver};
use super::session;
use super::setup::{Cli, Commands, ThemeAction};
use blogdeck::api::BlogApi;
use blogdeck::clipboard::{copy_to_clipboard, format_for_clipboard};
use blogdeck::config::{BlogConfig, CONFIG_KEYS};
use blogdeck::error::{BlogError, Result};
use blogdeck::model::PostId;
use blogdeck::query::{QueryState, ALL_CATEGORIES};
use blogdeck::share::SharePlatform;
use blogdeck::store::fs::FileSource;
use blogdeck::store::PostStore;
use blogdeck::theme::{load_theme, save_theme, toggle_theme, ThemeMode};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::Stdout;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Overrides the platform data directory (config, preferences).
pub const DATA_DIR_ENV: &str = "BLOGDECK_HOME";

pub struct AppContext {
    pub api: BlogApi<TerminalDriver<Stdout>>,
    pub source: FileSource,
    pub config: BlogConfig,
    pub data_dir: PathBuf,
}

impl AppContext {
    pub fn say(&mut self, level: MessageLevel, content: &str) -> Result<()> {
        self.api.driver_mut().message(level, content)
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    let mut ctx = init_context(&cli, interactive)?;

    match cli.command {
        None | Some(Commands::Browse) => session::browse(&mut ctx).await,
        Some(Commands::List {
            category,
            search,
            pages,
        }) => handle_list(&mut ctx, category, search, pages).await,
        Some(Commands::Show { id }) => handle_show(&mut ctx, &id).await,
        Some(Commands::Share { id, platform }) => handle_share(&mut ctx, &id, platform).await,
        Some(Commands::Categories) => handle_categories(&mut ctx).await,
        Some(Commands::Theme { action }) => handle_theme(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("blogdeck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blogdeck=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "blogdeck", "blogdeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlogError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli, interactive: bool) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = BlogConfig::load(&data_dir)?;
    let theme = load_theme(&data_dir).unwrap_or_else(|error| {
        warn!(%error, "unreadable preferences, using the default theme");
        ThemeMode::default()
    });

    let source = FileSource::new(
        cli.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.source)),
    );
    debug!(data_dir = %data_dir.display(), source = %source.path().display(), "context ready");

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    let mut driver = TerminalDriver::new(std::io::stdout(), theme, use_color);
    if interactive {
        driver = driver.with_hints();
    }
    let api = BlogApi::new(driver, config.page_size).with_site_url(config.site_url.clone());

    Ok(AppContext {
        api,
        source,
        config,
        data_dir,
    })
}

/// Ids arrive as text; numeric text becomes a numeric id.
pub fn parse_id(raw: &str) -> PostId {
    raw.parse().unwrap_or_else(|never| match never {})
}

/// One-shot commands fail outright when the posts can't be loaded.
async fn load_quietly(ctx: &mut AppContext) -> Result<()> {
    let store = PostStore::load(&ctx.source).await?;
    ctx.api.set_store(store);
    Ok(())
}

async fn handle_list(
    ctx: &mut AppContext,
    category: Option<String>,
    search: Option<String>,
    pages: usize,
) -> Result<()> {
    load_quietly(ctx).await?;

    let query = QueryState::new(
        category.as_deref().unwrap_or(ALL_CATEGORIES),
        search.as_deref().unwrap_or_default(),
    );
    ctx.api.apply_query(query)?;

    for _ in 1..pages {
        if !ctx.api.load_more()? {
            break;
        }
    }

    let has_more = ctx.api.feed().is_some_and(|feed| feed.has_more());
    if has_more {
        let next = ctx
            .api
            .feed()
            .map_or(pages, |feed| feed.view().pager.page_count() + 1);
        ctx.say(
            MessageLevel::Info,
            &format!("More posts available: use --pages {}", next),
        )?;
    }
    Ok(())
}

async fn handle_show(ctx: &mut AppContext, id: &str) -> Result<()> {
    load_quietly(ctx).await?;
    ctx.api.open_detail(&parse_id(id))?;
    Ok(())
}

async fn handle_share(
    ctx: &mut AppContext,
    id: &str,
    platform: Option<SharePlatform>,
) -> Result<()> {
    load_quietly(ctx).await?;
    share_post(ctx, &parse_id(id), platform)
}

/// Prints the share triple and puts the share text (or a platform's share link) on the
/// clipboard.
pub fn share_post(
    ctx: &mut AppContext,
    id: &PostId,
    platform: Option<SharePlatform>,
) -> Result<()> {
    let Some(info) = ctx.api.share(id) else {
        return ctx.say(MessageLevel::Warning, &format!("No post with id {}", id));
    };

    ctx.api.driver_mut().share(&info)?;
    let (clip, copied) = match platform {
        Some(platform) => {
            let link = info.platform_url(platform);
            ctx.say(MessageLevel::Info, &format!("Share on {}: {}", platform, link))?;
            (link, "Share link copied to clipboard.")
        }
        None => (format_for_clipboard(&info), "Share text copied to clipboard."),
    };

    match copy_to_clipboard(&clip) {
        Ok(()) => ctx.say(MessageLevel::Success, copied),
        Err(e) => ctx.say(
            MessageLevel::Warning,
            &format!("Failed to copy to clipboard: {}", e),
        ),
    }
}

async fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    load_quietly(ctx).await?;
    let categories = ctx.api.categories();
    ctx.api
        .driver_mut()
        .text_list(&categories, "No categories.")
}

fn handle_theme(ctx: &mut AppContext, action: Option<ThemeAction>) -> Result<()> {
    let theme = match action {
        None => {
            let current = load_theme(&ctx.data_dir)?;
            return ctx.say(MessageLevel::Info, &format!("Theme: {}", current));
        }
        Some(ThemeAction::Toggle) => toggle_theme(&ctx.data_dir)?,
        Some(ThemeAction::Light) => set_theme(ctx, ThemeMode::Light)?,
        Some(ThemeAction::Dark) => set_theme(ctx, ThemeMode::Dark)?,
    };
    ctx.api.driver_mut().set_theme(theme);
    ctx.say(MessageLevel::Success, &format!("Theme set to {}.", theme))
}

fn set_theme(ctx: &AppContext, theme: ThemeMode) -> Result<ThemeMode> {
    save_theme(&ctx.data_dir, theme)?;
    Ok(theme)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                let line = format!("{} = {}", key, ctx.config.get(key)?);
                ctx.say(MessageLevel::Info, &line)?;
            }
            Ok(())
        }
        (Some(key), None) => {
            let value = ctx.config.get(&key)?;
            ctx.say(MessageLevel::Info, &format!("{} = {}", key, value))
        }
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            ctx.say(MessageLevel::Success, &format!("{} = {}", key, value))
        }
    }
}
