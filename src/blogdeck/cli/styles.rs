//! Styles for the blogdeck terminal client.
//!
//! Templates only ever name **semantic** styles (`title`, `meta`, `tag`, ...). What those look
//! like is decided here, once per palette, as an `outstanding` [`Theme`]. Light and dark define
//! the same names, so switching themes never touches a template.
//!
//! The palette is picked from the persisted [`ThemeMode`], not detected from the terminal, so
//! the two themes are kept as separate statics rather than an `AdaptiveTheme`.
//!
//! A style name missing from a theme is rendered by `outstanding` with a `(!?)` prefix, which
//! makes template typos visible instead of silently unstyled.

use blogdeck::theme::ThemeMode;
use console::Style;
use once_cell::sync::Lazy;
use outstanding::Theme;

/// Semantic style names used by the templates.
pub mod names {
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const META: &str = "meta";
    pub const DATE: &str = "date";
    pub const CATEGORY: &str = "category";
    pub const TAG: &str = "tag";
    pub const BODY: &str = "body";
    pub const HINT: &str = "hint";
    pub const RULE: &str = "rule";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static LIGHT_THEME: Lazy<Theme> = Lazy::new(|| {
    let meta = Style::new().color256(243);

    Theme::new()
        .add(names::TITLE, Style::new().bold().black())
        .add(names::INDEX, Style::new().blue())
        .add(names::META, meta.clone())
        .add(names::DATE, meta.clone().italic())
        .add(names::CATEGORY, Style::new().magenta())
        .add(names::TAG, Style::new().cyan())
        .add(names::BODY, Style::new())
        .add(names::HINT, Style::new().color256(246).italic())
        .add(names::RULE, Style::new().color256(250))
        .add(names::INFO, meta)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

pub static DARK_THEME: Lazy<Theme> = Lazy::new(|| {
    let meta = Style::new().color256(248);

    Theme::new()
        .add(names::TITLE, Style::new().bold().white())
        .add(names::INDEX, Style::new().color256(117))
        .add(names::META, meta.clone())
        .add(names::DATE, meta.clone().italic())
        .add(names::CATEGORY, Style::new().color256(213))
        .add(names::TAG, Style::new().color256(80))
        .add(names::BODY, Style::new().color256(253))
        .add(names::HINT, Style::new().color256(244).italic())
        .add(names::RULE, Style::new().color256(238))
        .add(names::INFO, meta)
        .add(names::SUCCESS, Style::new().color256(114))
        .add(names::WARNING, Style::new().color256(221))
        .add(names::ERROR, Style::new().color256(203))
});

pub fn theme_for(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => &*LIGHT_THEME,
        ThemeMode::Dark => &*DARK_THEME,
    }
}
