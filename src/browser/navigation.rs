use std::ops::Range;

/// Smallest transaction window: a title row plus two transaction rows.
pub const MIN_WINDOW_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOutcome {
    /// No browse height yet, nothing to seek from.
    Unset,
    /// Target would be below the genesis block.
    Rejected,
    Moved(u64),
}

/// Browse height plus the selected row and first visible row of the
/// transaction window.
///
/// `window_rows` counts the window title row, so at most `window_rows - 1`
/// transactions are visible and the cursor stays within `window_rows - 2`
/// rows of the offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    browse_height: Option<u64>,
    cursor: usize,
    offset: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_height(height: u64) -> Self {
        Self {
            browse_height: Some(height),
            ..Self::default()
        }
    }

    pub fn browse_height(&self) -> Option<u64> {
        self.browse_height
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset_cursors(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn seek(&mut self, delta: i64) -> SeekOutcome {
        let Some(height) = self.browse_height else {
            return SeekOutcome::Unset;
        };

        let Some(target) = height.checked_add_signed(delta) else {
            return SeekOutcome::Rejected;
        };

        self.reset_cursors();
        self.browse_height = Some(target);
        SeekOutcome::Moved(target)
    }

    /// Seeks to an absolute height through the same path as relative seeks.
    /// Without a browse height the target simply becomes the browse height.
    pub fn seek_to(&mut self, height: u64) -> SeekOutcome {
        let Some(current) = self.browse_height else {
            self.reset_cursors();
            self.browse_height = Some(height);
            return SeekOutcome::Moved(height);
        };

        let delta = i128::from(height) - i128::from(current);
        match i64::try_from(delta) {
            Ok(delta) => self.seek(delta),
            Err(_) => SeekOutcome::Rejected,
        }
    }

    pub fn scroll_down(&mut self, tx_count: usize, window_rows: usize) -> bool {
        if self.cursor + 1 >= tx_count {
            return false;
        }

        self.cursor += 1;
        if self.cursor - self.offset > max_gap(window_rows) {
            self.offset += 1;
        }
        true
    }

    pub fn scroll_up(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        if self.cursor <= self.offset {
            self.offset = self.offset.saturating_sub(1);
        }
        self.cursor -= 1;
        self.offset = self.offset.min(self.cursor);
        true
    }

    /// Takes the first height ever seen. Returns true if it did.
    pub fn observe_arrival(&mut self, height: u64) -> bool {
        if self.browse_height.is_some() {
            return false;
        }
        self.browse_height = Some(height);
        true
    }

    /// Re-establishes the window invariants against the block being shown.
    pub fn fit_to(&mut self, tx_count: usize, window_rows: usize) {
        let gap = max_gap(window_rows);
        if self.cursor > self.offset + gap {
            self.offset = self.cursor - gap;
        }

        if self.cursor >= tx_count || self.offset >= tx_count {
            self.reset_cursors();
        }
    }

    pub fn visible_range(&self, tx_count: usize, window_rows: usize) -> Range<usize> {
        let end = (self.offset + window_rows.saturating_sub(1)).min(tx_count);
        self.offset.min(end)..end
    }
}

fn max_gap(window_rows: usize) -> usize {
    window_rows.max(MIN_WINDOW_ROWS) - 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(cursor: usize, offset: usize) -> NavigationState {
        NavigationState {
            browse_height: Some(100),
            cursor,
            offset,
        }
    }

    #[test]
    fn test_seek_without_height_is_noop() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.seek(1), SeekOutcome::Unset);
        assert_eq!(nav.seek(-1), SeekOutcome::Unset);
        assert_eq!(nav, NavigationState::new());
    }

    #[test]
    fn test_seek_to_without_height_sets_it() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.seek_to(10), SeekOutcome::Moved(10));
        assert_eq!(nav.browse_height(), Some(10));
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_seek_resets_cursors() {
        let mut nav = scrolled(7, 3);
        assert_eq!(nav.seek(-1), SeekOutcome::Moved(99));
        assert_eq!(nav.browse_height(), Some(99));
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_seek_below_genesis_rejected() {
        let mut nav = NavigationState::at_height(500);
        nav.scroll_down(10, 10);

        assert_eq!(nav.seek(-1000), SeekOutcome::Rejected);
        assert_eq!(nav.browse_height(), Some(500));
        assert_eq!(nav.cursor(), 1);
    }

    #[test]
    fn test_seek_to_genesis_allowed() {
        let mut nav = NavigationState::at_height(1000);
        assert_eq!(nav.seek(-1000), SeekOutcome::Moved(0));
    }

    #[test]
    fn test_seek_to_absolute_height() {
        let mut nav = NavigationState::at_height(10);
        assert_eq!(nav.seek_to(800_000), SeekOutcome::Moved(800_000));
        assert_eq!(nav.seek_to(3), SeekOutcome::Moved(3));
    }

    #[test]
    fn test_scroll_down_stops_at_last_row() {
        let mut nav = NavigationState::at_height(100);
        for _ in 0..4 {
            assert!(nav.scroll_down(5, 10));
        }
        assert_eq!((nav.cursor(), nav.offset()), (4, 0));
        assert!(!nav.scroll_down(5, 10));
        assert_eq!(nav.cursor(), 4);
    }

    #[test]
    fn test_scroll_down_pins_cursor_to_bottom_row() {
        let mut nav = NavigationState::at_height(100);
        for _ in 0..8 {
            nav.scroll_down(50, 10);
        }
        assert_eq!((nav.cursor(), nav.offset()), (8, 0));

        nav.scroll_down(50, 10);
        assert_eq!((nav.cursor(), nav.offset()), (9, 1));
    }

    #[test]
    fn test_scroll_up_at_top_of_window_moves_offset() {
        let mut nav = scrolled(5, 5);
        assert!(nav.scroll_up());
        assert_eq!((nav.cursor(), nav.offset()), (4, 4));
    }

    #[test]
    fn test_scroll_up_at_zero_is_noop() {
        let mut nav = NavigationState::at_height(1);
        assert!(!nav.scroll_up());
    }

    #[test]
    fn test_scroll_up_clamps_inconsistent_offset() {
        let mut nav = scrolled(2, 6);
        assert!(nav.scroll_up());
        assert_eq!((nav.cursor(), nav.offset()), (1, 1));
    }

    #[test]
    fn test_observe_arrival_only_initializes() {
        let mut nav = NavigationState::new();
        assert!(nav.observe_arrival(42));
        nav.scroll_down(3, 10);
        assert!(!nav.observe_arrival(43));
        assert_eq!(nav.browse_height(), Some(42));
        assert_eq!(nav.cursor(), 1);
    }

    #[test]
    fn test_fit_to_resets_when_block_shrank() {
        let mut nav = scrolled(12, 5);
        nav.fit_to(4, 10);
        assert_eq!((nav.cursor(), nav.offset()), (0, 0));
    }

    #[test]
    fn test_fit_to_follows_shrunk_window() {
        let mut nav = scrolled(12, 5);
        nav.fit_to(40, 5);
        assert_eq!((nav.cursor(), nav.offset()), (12, 9));
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(scrolled(0, 0).visible_range(5, 10), 0..5);
        assert_eq!(scrolled(12, 4).visible_range(40, 10), 4..13);
        assert_eq!(scrolled(0, 0).visible_range(0, 10), 0..0);
    }
}
