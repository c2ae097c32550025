use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Paragraph},
};
use tui_input::Input;

use crate::cmd::tui::app::centered_rect;

const POPUP_WIDTH: u16 = 40;
const PLACEHOLDER: &str = "block height";

pub fn render_goto_popup(input: &Input, area: Rect, frame: &mut Frame) {
    let popup_area = centered_rect(POPUP_WIDTH.min(area.width), 3, area);
    frame.render_widget(Clear, popup_area);

    let width = popup_area.width.saturating_sub(3);
    let scroll = input.visual_scroll(width as usize);

    let value = input.value();
    let (text, style) = if value.is_empty() {
        (PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::Yellow))
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .scroll((0, scroll as u16))
        .block(
            Block::bordered()
                .title(" Seek to height ")
                .style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(paragraph, popup_area);

    let x = input.visual_cursor().max(scroll) - scroll + 1;
    frame.set_cursor_position((popup_area.x + x as u16, popup_area.y + 1));
}
