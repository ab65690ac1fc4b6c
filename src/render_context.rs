use chrono::NaiveDate;

use crate::theme::{Palette, ThemeMode};

/// Shared inputs for rendering a page, so page renderers take one argument
/// instead of a growing parameter list.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub mode: ThemeMode,
    /// Whether keyboard focus is in the content area rather than the sidebar.
    pub focused: bool,
    pub today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    pub fn new(palette: &'a Palette, mode: ThemeMode, focused: bool, today: NaiveDate) -> Self {
        Self {
            palette,
            mode,
            focused,
            today,
        }
    }
}
