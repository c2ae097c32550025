use crate::cmd::tui::app::AppMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::{Block, Paragraph},
};

// Control text constants
const NAV_TXS: &str = " <↑/↓> ";
const NAV_BLOCKS_LABEL: &str = " | Browse ";
const NAV_BLOCKS: &str = "<j/k> ";
const NAV_FAR_LABEL: &str = " | ±1000 ";
const NAV_FAR: &str = "<Home/End> ";
const LATEST_LABEL: &str = " | Latest ";
const LATEST: &str = "<l> ";
const GOTO_LABEL: &str = " | Seek ";
const GOTO: &str = "<g> ";
const VIEW_LABEL: &str = " | View tx ";
const VIEW: &str = "<Enter> ";
const BACK: &str = " <Esc> ";
const BACK_LABEL: &str = " Back ";
const CONFIRM_LABEL: &str = " | Go ";
const QUIT_LABEL: &str = " | Quit ";
const QUIT: &str = "<q>";

/// Renders the bottom controls bar showing context-aware keybindings
pub fn render_key_bindings(frame: &mut Frame, area: Rect, mode: &AppMode) {
    let controls_line = match mode {
        AppMode::Browse => Line::from(vec![
            NAV_TXS.blue().bold(),
            NAV_BLOCKS_LABEL.into(),
            NAV_BLOCKS.blue().bold(),
            NAV_FAR_LABEL.into(),
            NAV_FAR.blue().bold(),
            LATEST_LABEL.into(),
            LATEST.blue().bold(),
            GOTO_LABEL.into(),
            GOTO.blue().bold(),
            VIEW_LABEL.into(),
            VIEW.blue().bold(),
            QUIT_LABEL.into(),
            QUIT.blue().bold(),
        ]),
        AppMode::TxPopup(_) => Line::from(vec![
            BACK.blue().bold(),
            BACK_LABEL.into(),
            QUIT_LABEL.into(),
            QUIT.blue().bold(),
        ]),
        AppMode::Goto => Line::from(vec![
            BACK.blue().bold(),
            BACK_LABEL.into(),
            CONFIRM_LABEL.into(),
            VIEW.blue().bold(),
        ]),
    };

    let block = Block::bordered().border_set(border::PLAIN);

    let paragraph = Paragraph::new(controls_line).block(block).left_aligned();

    frame.render_widget(paragraph, area);
}
