//! # Terminal Rendering
//!
//! [`TerminalDriver`] is the CLI's [`RenderDriver`]: it turns frames and previews into styled
//! text through the templates in `templates/` and writes them to any `io::Write`.
//!
//! ## Frames on a Terminal
//!
//! A terminal cannot clear a card it already printed, so:
//! - `Reset` prints a "Showing N of M posts" header and the cards,
//! - `Append` prints only the new cards below the old ones,
//! - `Empty` prints the "No posts found." state.
//!
//! In interactive mode each frame also ends with a hint for the next action (`more`, `clear`,
//! `close`, `retry`). One-shot commands leave hints off and print their own.

use super::styles::{names, theme_for};
use super::templates::{
    CARDS_TEMPLATE, DETAIL_TEMPLATE, EMPTY_TEMPLATE, LOAD_ERROR_TEMPLATE, MESSAGES_TEMPLATE,
    SHARE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use blogdeck::detail::PostDetail;
use blogdeck::driver::RenderDriver;
use blogdeck::error::{BlogError, LoadError, Result};
use blogdeck::feed::Frame;
use blogdeck::model::Post;
use blogdeck::share::ShareInfo;
use blogdeck::theme::ThemeMode;
use outstanding::{render_with_color, truncate_to_width, ThemeChoice};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 80;
pub const DATE_WIDTH: usize = 18;
pub const INDENT: &str = "    ";

const MORE_HINT: &str = "Type `more` to see more posts.";
const CLEAR_HINT: &str = "Type `clear` to reset the filters.";
const CLOSE_HINT: &str = "Type `close` to return to the feed.";
const RETRY_HINT: &str = "Type `retry` to try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    fn style(self) -> &'static str {
        match self {
            MessageLevel::Info => names::INFO,
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Warning => names::WARNING,
            MessageLevel::Error => names::ERROR,
        }
    }
}

/// One card, with layout already computed.
#[derive(Serialize)]
struct CardData {
    index: String,
    title: String,
    padding: String,
    date: String,
    indent: &'static str,
    category: String,
    author: String,
    tags: String,
    snippet: String,
}

#[derive(Serialize)]
struct CardsData {
    header: Option<String>,
    cards: Vec<CardData>,
    more_hint: Option<&'static str>,
}

#[derive(Serialize)]
struct EmptyData {
    clear_hint: Option<&'static str>,
}

#[derive(Serialize)]
struct DetailData<'a> {
    rule: String,
    title: &'a str,
    author: &'a str,
    date: &'a str,
    category: &'a str,
    image: &'a str,
    body: &'a str,
    tags: String,
    close_hint: Option<&'static str>,
}

#[derive(Serialize)]
struct LoadErrorData {
    error: String,
    retry_hint: Option<&'static str>,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    line_style: &'static str,
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

/// Paints frames and previews on a terminal (or any writer).
pub struct TerminalDriver<W: Write> {
    out: W,
    theme: ThemeMode,
    use_color: bool,
    hints: bool,
}

impl<W: Write> TerminalDriver<W> {
    pub fn new(out: W, theme: ThemeMode, use_color: bool) -> Self {
        Self {
            out,
            theme,
            use_color,
            hints: false,
        }
    }

    /// Ends frames and previews with a hint for the next session command.
    pub fn with_hints(mut self) -> Self {
        self.hints = true;
        self
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    pub fn message(&mut self, level: MessageLevel, content: &str) -> Result<()> {
        let data = MessagesData {
            messages: vec![MessageData {
                content,
                style: level.style(),
            }],
        };
        self.render_block(MESSAGES_TEMPLATE, &data)
    }

    pub fn share(&mut self, info: &ShareInfo) -> Result<()> {
        self.render_block(SHARE_TEMPLATE, info)
    }

    pub fn text_list(&mut self, lines: &[String], empty_message: &str) -> Result<()> {
        let data = TextListData {
            lines,
            line_style: names::CATEGORY,
            empty_message,
        };
        self.render_block(TEXT_LIST_TEMPLATE, &data)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn hint(&self, hint: &'static str) -> Option<&'static str> {
        self.hints.then_some(hint)
    }

    fn cards(&mut self, posts: &[Arc<Post>], header: Option<String>, has_more: bool) -> Result<()> {
        let data = CardsData {
            header,
            cards: posts.iter().map(|p| card(p)).collect(),
            more_hint: if has_more { self.hint(MORE_HINT) } else { None },
        };
        self.render_block(CARDS_TEMPLATE, &data)
    }

    /// Renders one template and writes it as a block ending in a single newline.
    fn render_block<T: Serialize>(&mut self, template: &str, data: &T) -> Result<()> {
        let output = render_with_color(
            template,
            data,
            ThemeChoice::from(theme_for(self.theme)),
            self.use_color,
        )
        .map_err(|e| BlogError::Render(e.to_string()))?;

        writeln!(self.out, "{}", output.trim_end_matches('\n'))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderDriver for TerminalDriver<W> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        match frame {
            Frame::Reset {
                posts,
                has_more,
                total,
            } => {
                let header = format!("Showing {} of {} posts", posts.len(), total);
                self.cards(posts, Some(header), *has_more)
            }
            Frame::Append {
                posts, has_more, ..
            } => self.cards(posts, None, *has_more),
            Frame::Empty => {
                let data = EmptyData {
                    clear_hint: self.hint(CLEAR_HINT),
                };
                self.render_block(EMPTY_TEMPLATE, &data)
            }
        }
    }

    fn show_loading(&mut self) -> Result<()> {
        self.message(MessageLevel::Info, "Loading posts…")
    }

    fn show_load_error(&mut self, error: &LoadError) -> Result<()> {
        let data = LoadErrorData {
            error: error.to_string(),
            retry_hint: self.hint(RETRY_HINT),
        };
        self.render_block(LOAD_ERROR_TEMPLATE, &data)
    }

    fn show_detail(&mut self, detail: &PostDetail) -> Result<()> {
        let data = DetailData {
            rule: "─".repeat(LINE_WIDTH),
            title: &detail.title,
            author: &detail.author,
            date: &detail.date,
            category: &detail.category,
            image: &detail.image,
            body: &detail.body,
            tags: hashtags(&detail.tags),
            close_hint: self.hint(CLOSE_HINT),
        };
        self.render_block(DETAIL_TEMPLATE, &data)
    }

    fn close_detail(&mut self) -> Result<()> {
        if self.hints {
            self.message(MessageLevel::Info, "Preview closed.")?;
        }
        Ok(())
    }
}

fn card(post: &Post) -> CardData {
    let index = format!("[{}] ", post.id);
    let available = LINE_WIDTH.saturating_sub(index.width() + DATE_WIDTH + 1);
    let title = truncate_to_width(&post.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()) + 1);

    let snippet: String = post
        .snippet
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    CardData {
        index,
        title,
        padding,
        date: format!("{:>width$}", post.formatted_date(), width = DATE_WIDTH),
        indent: INDENT,
        category: post.category.clone(),
        author: post.author.clone(),
        tags: hashtags(&post.tags),
        snippet: truncate_to_width(&snippet, LINE_WIDTH - INDENT.len()),
    }
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}
