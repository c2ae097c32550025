//! Keyboard input handling

use blockview::{BrowseAction, Dispatch, Keymap};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::cmd::tui::app::{App, AppEvent, AppMode};

pub(crate) fn default_keymap() -> Keymap<KeyCode> {
    Keymap::new()
        .bind(KeyCode::Down, BrowseAction::ScrollDown)
        .bind(KeyCode::Up, BrowseAction::ScrollUp)
        .bind(KeyCode::Home, BrowseAction::SeekBack1000)
        .bind(KeyCode::End, BrowseAction::SeekForward1000)
        .bind(KeyCode::Char('j'), BrowseAction::SeekBack1)
        .bind(KeyCode::Char('J'), BrowseAction::SeekBack1)
        .bind(KeyCode::Char('k'), BrowseAction::SeekForward1)
        .bind(KeyCode::Char('K'), BrowseAction::SeekForward1)
}

#[hotpath::measure_all]
impl App {
    pub(crate) fn handle_key_event(&mut self, key_code: KeyCode) {
        if self.mode != AppMode::Goto && matches!(key_code, KeyCode::Char('q')) {
            self.exit();
            return;
        }

        if self.error_message.is_some() {
            self.error_message = None;
            return;
        }

        match self.mode {
            AppMode::Browse => self.handle_browse_keys(key_code),
            AppMode::TxPopup(_) => self.handle_tx_popup_keys(key_code),
            AppMode::Goto => self.handle_goto_keys(key_code),
        }
    }

    fn handle_browse_keys(&mut self, key_code: KeyCode) {
        let dispatch = self.dispatcher.dispatch(
            self.mode.browser_mode(),
            &key_code,
            &mut self.coordinator,
            &mut self.screen,
        );
        if dispatch == Dispatch::Handled {
            return;
        }

        match key_code {
            KeyCode::Enter => self.open_tx_popup(),
            KeyCode::Char('g') | KeyCode::Char('G') => self.open_goto(),
            KeyCode::Char('l') | KeyCode::Char('L') => self.seek_latest(),
            _ => {}
        }
    }

    fn handle_tx_popup_keys(&mut self, key_code: KeyCode) {
        if matches!(key_code, KeyCode::Esc | KeyCode::Enter) {
            self.return_to_browse();
        }
    }

    fn handle_goto_keys(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => self.return_to_browse(),
            KeyCode::Enter => self.confirm_goto(),
            _ => {
                let event = Event::Key(KeyEvent::new(key_code, KeyModifiers::empty()));
                self.goto_input.handle_event(&event);
            }
        }
    }
}

pub(crate) fn spawn_input_reader(event_tx: Sender<AppEvent>) {
    std::thread::spawn(move || {
        while let Ok(evt) = event::read() {
            if let Event::Key(key_event) = evt
                && key_event.kind == KeyEventKind::Press
                && event_tx.send(AppEvent::Key(key_event.code)).is_err()
            {
                break;
            }
        }
    });
}
