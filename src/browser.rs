//! Block browsing controller: navigation state, key dispatch and the
//! coordinator reconciling seeks with asynchronously arriving blocks.

mod coordinator;
mod dispatcher;
mod navigation;
mod provider;

pub use coordinator::{Arrival, Mode, Renderer, TxWindow, ViewCoordinator};
pub use dispatcher::{BrowseAction, Command, Dispatch, InputDispatcher, Keymap};
pub use navigation::{MIN_WINDOW_ROWS, NavigationState, SeekOutcome};
pub use provider::{BlockDataProvider, ProviderError};
