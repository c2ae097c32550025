//! TUI application state and main run loop

mod keys;
mod state;

use std::io;

use blockview::{
    InputDispatcher, Mode, NavigationState, ViewCoordinator, misc::shared_init::RpcOpts,
    store::BlockStore,
};
use crossbeam_channel::{Receiver, select};
use crossterm::event::KeyCode;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Clear, Paragraph},
};
use tracing::debug;
use tui_input::Input;

use crate::cmd::tui::{
    app::keys::{default_keymap, spawn_input_reader},
    data::{DataResponse, worker::spawn_data_worker},
    screen::ScreenRenderer,
    views::{
        BlockHeader, StatusBar, TxsList, render_goto_popup, render_key_bindings, render_tx_popup,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppMode {
    Browse,
    TxPopup(String),
    Goto,
}

impl AppMode {
    /// Only the plain browse view gives the block browser input focus.
    pub(crate) fn browser_mode(&self) -> Mode {
        match self {
            AppMode::Browse => Mode::Block,
            AppMode::TxPopup(_) | AppMode::Goto => Mode::Inactive,
        }
    }
}

pub(crate) enum AppEvent {
    Key(KeyCode),
    Data(DataResponse),
}

pub struct App {
    pub(crate) coordinator: ViewCoordinator<BlockStore>,
    dispatcher: InputDispatcher<KeyCode>,
    pub(crate) screen: ScreenRenderer,
    pub(crate) mode: AppMode,
    pub(crate) goto_input: Input,
    pub(crate) error_message: Option<String>,
    max_window_rows: usize,
    state_rx: Receiver<AppEvent>,
    exit: bool,
}

#[hotpath::measure_all]
impl App {
    /// `max_window_rows` caps the transaction window; smaller terminals shrink it further.
    pub fn new(opts: RpcOpts, start_height: Option<u64>, max_window_rows: usize) -> Self {
        let (data_req_tx, data_req_rx) = crossbeam_channel::unbounded();
        let (state_tx, state_rx) = crossbeam_channel::unbounded();

        spawn_data_worker(data_req_rx, state_tx.clone(), opts);
        spawn_input_reader(state_tx);

        let store = BlockStore::new(data_req_tx);
        store.request_tip();

        let nav = match start_height {
            Some(height) => NavigationState::at_height(height),
            None => NavigationState::new(),
        };

        let mut app = Self {
            coordinator: ViewCoordinator::with_state(store, nav, max_window_rows),
            dispatcher: InputDispatcher::new(default_keymap()),
            screen: ScreenRenderer::default(),
            mode: AppMode::Browse,
            goto_input: Input::default(),
            error_message: None,
            max_window_rows,
            state_rx,
            exit: false,
        };

        app.coordinator.request_render(&mut app.screen);
        if start_height.is_some() {
            // resolves the start height, requesting it when it isn't cached
            app.coordinator.seek(0, &mut app.screen);
        }
        app
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Length(6), // Block header
                Constraint::Min(0),    // Transactions
                Constraint::Length(3), // Key bindings footer
            ])
            .split(frame.area());

        self.fit_window_rows(chunks[2]);

        let nav = self.coordinator.navigation();
        StatusBar::new(
            nav.browse_height(),
            self.coordinator.pending_height(),
            self.coordinator.provider().tip(),
        )
        .render(chunks[0], frame);

        BlockHeader::new(self.screen.screen()).render(chunks[1], frame);
        TxsList::new(self.screen.screen()).render(chunks[2], frame);
        render_key_bindings(frame, chunks[3], &self.mode);

        match &self.mode {
            AppMode::Browse => {}
            AppMode::TxPopup(txid) => render_tx_popup(txid, frame.area(), frame),
            AppMode::Goto => render_goto_popup(&self.goto_input, frame.area(), frame),
        }

        if let Some(error_msg) = &self.error_message {
            render_error_popup(frame, error_msg);
        }
    }

    fn fit_window_rows(&mut self, txs_area: Rect) {
        let rows = window_rows_for(txs_area, self.max_window_rows);
        if rows == self.coordinator.window_rows() {
            return;
        }

        self.coordinator.set_window_rows(rows);
        if self.mode.browser_mode() == Mode::Block {
            self.coordinator.request_render(&mut self.screen);
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        select! {
            recv(self.state_rx) -> event => {
                if let Ok(event) = event {
                    match event {
                        AppEvent::Key(key_code) => self.handle_key_event(key_code),
                        AppEvent::Data(response) => self.handle_data_response(response),
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_data_response(&mut self, response: DataResponse) {
        let mode = self.mode.browser_mode();
        match response {
            DataResponse::Block(block) => {
                let block = self.coordinator.provider_mut().insert(block);
                let arrival = self
                    .coordinator
                    .on_block_arrival(&block, mode, &mut self.screen);
                debug!(height = block.height, ?arrival, "block arrived");
            }
            DataResponse::Tip(block) => {
                let block = self.coordinator.provider_mut().insert_tip(block);
                let arrival = self
                    .coordinator
                    .on_block_arrival(&block, mode, &mut self.screen);
                debug!(height = block.height, ?arrival, "tip arrived");
            }
            DataResponse::Error(height, error_msg) => {
                if let Some(height) = height {
                    self.coordinator.provider_mut().forget_request(height);
                    if self.coordinator.pending_height() != Some(height) {
                        debug!(height, "ignoring failure for superseded height");
                        return;
                    }
                }
                self.error_message = Some(error_msg);
            }
        }
    }

    pub(crate) fn exit(&mut self) {
        self.exit = true;
    }
}

/// The transaction pane's inner height, capped by the configured window size.
fn window_rows_for(txs_area: Rect, max_window_rows: usize) -> usize {
    (txs_area.height.saturating_sub(2) as usize).min(max_window_rows)
}

fn render_error_popup(frame: &mut Frame, error_msg: &str) {
    let text = format!("Error: {} (press any key)", error_msg);
    let popup_width = (text.len() as u16 + 4).min(frame.area().width.saturating_sub(4));
    let popup_area = centered_rect(popup_width, 3, frame.area());

    let popup = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().style(Style::default().bg(Color::DarkGray)));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
