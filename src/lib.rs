pub mod browser;
pub mod misc;
pub mod models;
pub mod store;

pub use browser::{
    Arrival, BlockDataProvider, BrowseAction, Command, Dispatch, InputDispatcher, Keymap, Mode,
    NavigationState, ProviderError, Renderer, SeekOutcome, TxWindow, ViewCoordinator,
};
pub use models::block::Block;
