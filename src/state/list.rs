//! Selection and scroll tracking for list and table views.

/// Rows visible at once in the list views.
pub const WINDOW_SIZE: usize = 10;

/// Selected row plus scroll offset for a windowed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Currently selected index.
    pub selected: usize,
    /// First visible index.
    pub scroll: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the previous item.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    /// Moves to the next item.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_down(&mut self, max_items: usize) -> bool {
        let max_index = max_items.saturating_sub(1);
        if self.selected < max_index {
            self.selected += 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(WINDOW_SIZE);
        self.ensure_visible();
    }

    pub fn page_down(&mut self, max_items: usize) {
        self.selected = (self.selected + WINDOW_SIZE).min(max_items.saturating_sub(1));
        self.ensure_visible();
    }

    /// Resets selection to the valid range for the given item count.
    pub fn clamp(&mut self, max_items: usize) {
        self.selected = self.selected.min(max_items.saturating_sub(1));
        self.scroll = self.scroll.min(self.selected);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn ensure_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + WINDOW_SIZE {
            self.scroll = self.selected.saturating_sub(WINDOW_SIZE - 1);
        }
    }
}

/// Steps a tab or field index forward or backward, wrapping at both ends.
pub fn cycle(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_up_at_top() {
        let mut cursor = ListCursor::new();
        assert!(!cursor.navigate_up());
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_navigate_down_at_bottom() {
        let mut cursor = ListCursor {
            selected: 9,
            ..Default::default()
        };
        assert!(!cursor.navigate_down(10));
        assert_eq!(cursor.selected, 9);
    }

    #[test]
    fn test_navigate_down_scrolls_window() {
        let mut cursor = ListCursor {
            selected: WINDOW_SIZE - 1,
            ..Default::default()
        };
        assert!(cursor.navigate_down(20));
        assert_eq!(cursor.selected, WINDOW_SIZE);
        assert_eq!(cursor.scroll, 1);
    }

    #[test]
    fn test_page_down_clamps() {
        let mut cursor = ListCursor::new();
        cursor.page_down(4);
        assert_eq!(cursor.selected, 3);
        cursor.page_up();
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_clamp_selection_empty_list() {
        let mut cursor = ListCursor {
            selected: 5,
            scroll: 3,
        };
        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.scroll, 0);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(0, 0, true), 0);
    }
}
