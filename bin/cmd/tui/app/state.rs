//! View switching between the browser and its popups

use blockview::misc::utils::format_height;
use tui_input::Input;

use super::{App, AppMode};

impl App {
    pub(crate) fn open_tx_popup(&mut self) {
        if let Some(txid) = self.coordinator.selected_transaction_id() {
            self.mode = AppMode::TxPopup(txid);
        }
    }

    pub(crate) fn open_goto(&mut self) {
        self.goto_input = Input::default();
        self.mode = AppMode::Goto;
    }

    pub(crate) fn confirm_goto(&mut self) {
        let value = self.goto_input.value().trim().to_string();
        self.return_to_browse();

        if value.is_empty() {
            return;
        }

        match value.parse::<u64>() {
            Ok(height) => {
                self.coordinator.seek_to(height, &mut self.screen);
            }
            Err(_) => {
                self.error_message = Some(format!("'{value}' is not a block height"));
            }
        }
    }

    pub(crate) fn seek_latest(&mut self) {
        let store = self.coordinator.provider();
        store.request_tip();
        if let Some(tip) = store.tip() {
            self.coordinator.seek_to(tip, &mut self.screen);
        } else {
            self.error_message = Some(format!(
                "chain tip not known yet (browsing {})",
                format_height(self.coordinator.navigation().browse_height())
            ));
        }
    }

    /// Gives focus back to the browser and repaints whatever arrived meanwhile.
    pub(crate) fn return_to_browse(&mut self) {
        self.mode = AppMode::Browse;
        self.coordinator.request_render(&mut self.screen);
    }
}
