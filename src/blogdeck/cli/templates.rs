//! # CLI Templates
//!
//! Terminal output is rendered with `outstanding` from minijinja templates kept as stand-alone
//! files, so they are easy to edit and diff. They are compiled in as string constants.
//!
//! Templates run with minijinja's default whitespace rules, so block tags sit at the start of
//! the line they guard (`{% if x %}text`) and the line break after a block comes from the text
//! it wraps. The renderer ends every block with exactly one newline, so a template's own
//! trailing newline does not matter.
//!
//! Styles are only ever selected by semantic name (`style("title")`); layout math (widths,
//! truncation, padding) is done in Rust before the data reaches the template.

pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.tmp");
pub const EMPTY_TEMPLATE: &str = include_str!("templates/empty.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const LOAD_ERROR_TEMPLATE: &str = include_str!("templates/load_error.tmp");
pub const SHARE_TEMPLATE: &str = include_str!("templates/share.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
