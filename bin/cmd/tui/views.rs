mod block_header;
mod bottom_bar;
mod goto_popup;
mod status_bar;
mod tx_popup;
mod txs_list;

pub use block_header::BlockHeader;
pub use bottom_bar::render_key_bindings;
pub use goto_popup::render_goto_popup;
pub use status_bar::StatusBar;
pub use tx_popup::render_tx_popup;
pub use txs_list::TxsList;
