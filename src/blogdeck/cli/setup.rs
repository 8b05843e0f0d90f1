use blogdeck::share::SharePlatform;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogdeck", bin_name = "blogdeck", version)]
#[command(about = "A fast, filterable blog feed for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read posts from this file instead of the configured source
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub source: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the feed interactively (default)
    #[command(alias = "b")]
    Browse,

    /// Print the feed, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Only posts in this category ("all" for every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Search titles, snippets, tags and authors
        #[arg(short, long)]
        search: Option<String>,

        /// Number of pages to print
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Show the full preview of a post
    #[command(alias = "v")]
    Show {
        /// Post id
        id: String,
    },

    /// Print a post's share info and copy it to the clipboard
    Share {
        /// Post id
        id: String,

        /// Print and copy the share link for twitter, facebook or linkedin instead
        #[arg(short, long, value_name = "PLATFORM")]
        platform: Option<SharePlatform>,
    },

    /// List the categories present in the feed
    Categories,

    /// Show or change the color theme
    Theme {
        /// light, dark or toggle (prints the current theme if omitted)
        action: Option<ThemeAction>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (source, page-size, debounce-ms, site-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
