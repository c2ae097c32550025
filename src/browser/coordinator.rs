use std::sync::Arc;

use super::{
    dispatcher::Command,
    navigation::{MIN_WINDOW_ROWS, NavigationState, SeekOutcome},
    provider::{BlockDataProvider, ProviderError},
};
use crate::models::block::Block;

/// Whether the block browser currently owns input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Inactive,
    Block,
}

/// Outcome of a block arrival notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// First block ever seen, it became the browse height.
    Initialized,
    /// The block at the current browse height.
    Resolved,
    /// Superseded or never requested, nothing changed.
    Unsolicited,
}

/// Visible slice of a block's transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct TxWindow<'a> {
    pub rows: &'a [String],
    /// Cursor position relative to `rows`.
    pub selected: usize,
    pub has_more_above: bool,
    pub has_more_below: bool,
    pub tx_count: usize,
    pub bytes_per_tx: u64,
}

/// Painting surface driven by [`ViewCoordinator`].
pub trait Renderer {
    fn paint_header(&mut self, block: &Block);

    fn paint_transaction_window(&mut self, window: &TxWindow<'_>);

    fn paint_placeholder(&mut self, last_known_height: Option<u64>);
}

pub struct ViewCoordinator<P> {
    nav: NavigationState,
    provider: P,
    window_rows: usize,
    pending: Option<u64>,
}

impl<P: BlockDataProvider> ViewCoordinator<P> {
    pub fn new(provider: P, window_rows: usize) -> Self {
        Self::with_state(provider, NavigationState::new(), window_rows)
    }

    pub fn with_state(provider: P, nav: NavigationState, window_rows: usize) -> Self {
        Self {
            nav,
            provider,
            window_rows: window_rows.max(MIN_WINDOW_ROWS),
            pending: None,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Height requested from the provider and not yet arrived.
    pub fn pending_height(&self) -> Option<u64> {
        self.pending
    }

    pub fn window_rows(&self) -> usize {
        self.window_rows
    }

    pub fn set_window_rows(&mut self, rows: usize) {
        self.window_rows = rows.max(MIN_WINDOW_ROWS);
    }

    fn loaded_block(&self) -> Result<Arc<Block>, ProviderError> {
        match self.nav.browse_height() {
            Some(height) => self.provider.block_at(height),
            None => Err(ProviderError::HeightNotFound(0)),
        }
    }

    pub fn request_render<R: Renderer>(&mut self, renderer: &mut R) {
        let block = match self.loaded_block() {
            Ok(block) => block,
            Err(_) => {
                renderer.paint_placeholder(self.nav.browse_height());
                return;
            }
        };

        let tx_count = block.tx_count();
        self.nav.fit_to(tx_count, self.window_rows);
        let visible = self.nav.visible_range(tx_count, self.window_rows);

        renderer.paint_header(&block);
        renderer.paint_transaction_window(&TxWindow {
            rows: &block.tx[visible.clone()],
            selected: self.nav.cursor() - visible.start,
            has_more_above: visible.start > 0,
            has_more_below: visible.end < tx_count,
            tx_count,
            bytes_per_tx: block.bytes_per_tx(),
        });
    }

    pub fn selected_transaction_id(&self) -> Option<String> {
        let block = self.loaded_block().ok()?;
        block.tx.get(self.nav.cursor()).cloned()
    }

    pub fn execute<R: Renderer>(&mut self, command: Command, renderer: &mut R) {
        match command {
            Command::ScrollDown => {
                self.scroll_down(renderer);
            }
            Command::ScrollUp => {
                self.scroll_up(renderer);
            }
            Command::Seek(delta) => {
                self.seek(delta, renderer);
            }
        }
    }

    pub fn seek<R: Renderer>(&mut self, delta: i64, renderer: &mut R) -> SeekOutcome {
        let outcome = self.nav.seek(delta);
        self.after_seek(outcome, renderer);
        outcome
    }

    pub fn seek_to<R: Renderer>(&mut self, height: u64, renderer: &mut R) -> SeekOutcome {
        let outcome = self.nav.seek_to(height);
        self.after_seek(outcome, renderer);
        outcome
    }

    fn after_seek<R: Renderer>(&mut self, outcome: SeekOutcome, renderer: &mut R) {
        let SeekOutcome::Moved(target) = outcome else {
            return;
        };

        if self.provider.get_hash(target).is_ok() {
            self.pending = None;
            self.request_render(renderer);
        } else {
            self.pending = Some(target);
            self.provider.request_blockheight(target);
        }
    }

    pub fn scroll_down<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        let Ok(block) = self.loaded_block() else {
            return false;
        };

        let moved = self.nav.scroll_down(block.tx_count(), self.window_rows);
        if moved {
            self.request_render(renderer);
        }
        moved
    }

    pub fn scroll_up<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        if self.nav.browse_height().is_none() {
            return false;
        }

        let moved = self.nav.scroll_up();
        if moved {
            self.request_render(renderer);
        }
        moved
    }

    /// Reconciles a delivered block with the current browse height. Only the
    /// first block ever seen or the block at the browse height count; the
    /// view repaints for those only while `mode` is [`Mode::Block`].
    pub fn on_block_arrival<R: Renderer>(
        &mut self,
        block: &Block,
        mode: Mode,
        renderer: &mut R,
    ) -> Arrival {
        let arrival = if self.nav.observe_arrival(block.height) {
            Arrival::Initialized
        } else if self.nav.browse_height() == Some(block.height) {
            Arrival::Resolved
        } else {
            return Arrival::Unsolicited;
        };

        if self.pending == Some(block.height) {
            self.pending = None;
        }

        if mode == Mode::Block {
            self.request_render(renderer);
        }
        arrival
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryProvider {
        blocks: HashMap<u64, Arc<Block>>,
        requested: Vec<u64>,
    }

    impl BlockDataProvider for MemoryProvider {
        fn get_hash(&self, height: u64) -> Result<String, ProviderError> {
            self.blocks
                .get(&height)
                .map(|b| b.hash.clone())
                .ok_or(ProviderError::HeightNotFound(height))
        }

        fn get_block(&self, hash: &str) -> Result<Arc<Block>, ProviderError> {
            self.blocks
                .values()
                .find(|b| b.hash == hash)
                .cloned()
                .ok_or_else(|| ProviderError::BlockNotFound(hash.to_string()))
        }

        fn request_blockheight(&mut self, height: u64) {
            self.requested.push(height);
        }
    }

    #[derive(Default)]
    struct Paints {
        headers: Vec<u64>,
        windows: Vec<(Vec<String>, usize, bool, bool)>,
        placeholders: Vec<Option<u64>>,
    }

    impl Renderer for Paints {
        fn paint_header(&mut self, block: &Block) {
            self.headers.push(block.height);
        }

        fn paint_transaction_window(&mut self, window: &TxWindow<'_>) {
            self.windows.push((
                window.rows.to_vec(),
                window.selected,
                window.has_more_above,
                window.has_more_below,
            ));
        }

        fn paint_placeholder(&mut self, last_known_height: Option<u64>) {
            self.placeholders.push(last_known_height);
        }
    }

    fn block(height: u64, txs: usize) -> Block {
        Block {
            hash: format!("hash{height}"),
            height,
            merkle_root: format!("root{height}"),
            size: 250 * txs as u64,
            difficulty: 1.0,
            time: 1_231_006_505,
            version: 1,
            tx: (0..txs).map(|i| format!("tx{height}-{i}")).collect(),
        }
    }

    fn coordinator(blocks: &[Block], window_rows: usize) -> ViewCoordinator<MemoryProvider> {
        let mut provider = MemoryProvider::default();
        for b in blocks {
            provider.blocks.insert(b.height, Arc::new(b.clone()));
        }
        ViewCoordinator::new(provider, window_rows)
    }

    #[test]
    fn test_render_without_height_shows_placeholder() {
        let mut coord = coordinator(&[], 10);
        let mut paints = Paints::default();
        coord.request_render(&mut paints);
        assert_eq!(paints.placeholders, vec![None]);
        assert!(paints.headers.is_empty());
    }

    #[test]
    fn test_render_window_with_ellipsis_flags() {
        let mut coord = coordinator(&[block(7, 20)], 5);
        let mut paints = Paints::default();
        coord.on_block_arrival(&block(7, 20), Mode::Block, &mut paints);

        let (rows, selected, above, below) = paints.windows.last().unwrap().clone();
        assert_eq!(rows.len(), 4);
        assert_eq!(selected, 0);
        assert!(!above);
        assert!(below);

        for _ in 0..6 {
            coord.scroll_down(&mut paints);
        }
        let (rows, selected, above, below) = paints.windows.last().unwrap().clone();
        assert_eq!(rows.first().unwrap(), "tx7-3");
        assert_eq!(selected, 3);
        assert!(above);
        assert!(below);
    }

    #[test]
    fn test_seek_to_resolvable_height_renders() {
        let mut coord = coordinator(&[block(10, 2), block(11, 3)], 10);
        let mut paints = Paints::default();
        coord.on_block_arrival(&block(10, 2), Mode::Block, &mut paints);

        assert_eq!(coord.seek(1, &mut paints), SeekOutcome::Moved(11));
        assert_eq!(paints.headers, vec![10, 11]);
        assert_eq!(coord.pending_height(), None);
        assert!(coord.provider().requested.is_empty());
    }

    #[test]
    fn test_seek_to_missing_height_requests_and_defers() {
        let mut coord = coordinator(&[block(10, 2)], 10);
        let mut paints = Paints::default();
        coord.on_block_arrival(&block(10, 2), Mode::Block, &mut paints);

        coord.seek(1000, &mut paints);
        assert_eq!(coord.pending_height(), Some(1010));
        assert_eq!(coord.provider().requested, vec![1010]);
        assert_eq!(paints.headers, vec![10]);
    }

    #[test]
    fn test_arrival_while_inactive_does_not_render() {
        let mut coord = coordinator(&[block(3, 1)], 10);
        let mut paints = Paints::default();
        let arrival = coord.on_block_arrival(&block(3, 1), Mode::Inactive, &mut paints);

        assert_eq!(arrival, Arrival::Initialized);
        assert_eq!(coord.navigation().browse_height(), Some(3));
        assert!(paints.headers.is_empty());
        assert!(paints.placeholders.is_empty());
    }

    #[test]
    fn test_selected_transaction_id() {
        let mut coord = coordinator(&[block(5, 3)], 10);
        let mut paints = Paints::default();
        assert_eq!(coord.selected_transaction_id(), None);

        coord.on_block_arrival(&block(5, 3), Mode::Block, &mut paints);
        coord.scroll_down(&mut paints);
        assert_eq!(coord.selected_transaction_id().as_deref(), Some("tx5-1"));

        coord.seek(1, &mut paints);
        assert_eq!(coord.selected_transaction_id(), None);
    }

    #[test]
    fn test_execute_dispatches_commands() {
        let mut coord = coordinator(&[block(5, 3), block(4, 1)], 10);
        let mut paints = Paints::default();
        coord.on_block_arrival(&block(5, 3), Mode::Block, &mut paints);

        coord.execute(Command::ScrollDown, &mut paints);
        assert_eq!(coord.navigation().cursor(), 1);
        coord.execute(Command::ScrollUp, &mut paints);
        assert_eq!(coord.navigation().cursor(), 0);
        coord.execute(Command::Seek(-1), &mut paints);
        assert_eq!(coord.navigation().browse_height(), Some(4));
    }

    #[test]
    fn test_window_rows_never_below_minimum() {
        let mut coord = coordinator(&[], 1);
        assert_eq!(coord.window_rows(), MIN_WINDOW_ROWS);
        coord.set_window_rows(0);
        assert_eq!(coord.window_rows(), MIN_WINDOW_ROWS);
    }
}
