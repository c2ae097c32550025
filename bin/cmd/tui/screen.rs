//! Renderer that formats browser paints into a screen model drawn each frame

use blockview::misc::utils::{
    format_block_time, format_difficulty, format_height, format_placeholder, format_size,
    format_version,
};
use blockview::{Block, Renderer, TxWindow};

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HeaderView {
    pub height: String,
    pub hash: String,
    pub merkle_root: String,
    pub size: String,
    pub difficulty: String,
    pub time: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TxsView {
    pub title: String,
    pub rows: Vec<TxRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TxRow {
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Screen {
    #[default]
    Empty,
    Placeholder(String),
    Block {
        header: HeaderView,
        txs: TxsView,
    },
}

#[derive(Debug, Default)]
pub(crate) struct ScreenRenderer {
    screen: Screen,
}

impl ScreenRenderer {
    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }
}

impl Renderer for ScreenRenderer {
    fn paint_header(&mut self, block: &Block) {
        self.screen = Screen::Block {
            header: HeaderView {
                height: format_height(Some(block.height)),
                hash: block.hash.clone(),
                merkle_root: block.merkle_root.clone(),
                size: format_size(block.size),
                difficulty: format_difficulty(block.difficulty),
                time: format_block_time(block.time),
                version: format_version(block.version),
            },
            txs: TxsView::default(),
        };
    }

    fn paint_transaction_window(&mut self, window: &TxWindow<'_>) {
        if let Screen::Block { txs, .. } = &mut self.screen {
            *txs = txs_view(window);
        }
    }

    fn paint_placeholder(&mut self, last_known_height: Option<u64>) {
        self.screen = Screen::Placeholder(format_placeholder(last_known_height));
    }
}

fn txs_view(window: &TxWindow<'_>) -> TxsView {
    let last = window.rows.len().saturating_sub(1);
    let rows = window
        .rows
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            let elided = (i == 0 && window.has_more_above) || (i == last && window.has_more_below);
            TxRow {
                text: if elided {
                    ELLIPSIS.to_string()
                } else {
                    tx.clone()
                },
                selected: i == window.selected,
            }
        })
        .collect();

    TxsView {
        title: format!(
            "Transactions: {:>4} ({} bytes/tx)",
            window.tx_count, window.bytes_per_tx
        ),
        rows,
    }
}
