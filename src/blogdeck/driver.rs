//! The rendering seam.
//!
//! A [`RenderDriver`] is the only thing allowed side effects on a display surface. It owns no
//! filtering logic: it is told what to show through [`Frame`]s and preview calls.
//!
//! Contract:
//! - `Frame::Reset` replaces every displayed card.
//! - `Frame::Append` adds cards after the displayed ones, never repainting them.
//! - `Frame::Empty` shows the "no posts found" state with a way to clear filters.

use crate::detail::PostDetail;
use crate::error::{LoadError, Result};
use crate::feed::Frame;

pub trait RenderDriver {
    /// Paint a frame of cards.
    fn render(&mut self, frame: &Frame) -> Result<()>;

    /// The load is outstanding; no cards.
    fn show_loading(&mut self) -> Result<()>;

    /// The load failed; offer a retry.
    fn show_load_error(&mut self, error: &LoadError) -> Result<()>;

    fn show_detail(&mut self, detail: &PostDetail) -> Result<()>;

    fn close_detail(&mut self) -> Result<()>;
}
