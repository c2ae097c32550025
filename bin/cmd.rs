pub mod block;
#[cfg(feature = "tui")]
pub mod tui;
