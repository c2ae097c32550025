use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::cmd::tui::app::centered_rect;

pub fn render_tx_popup(txid: &str, area: Rect, frame: &mut Frame) {
    let popup_width = (area.width as f32 * 0.8) as u16;
    let popup_area = centered_rect(popup_width, 6, area);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Transaction".yellow().bold()),
        Line::from(""),
        Line::from(txid.to_string()),
    ];

    let popup = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::bordered()
            .border_set(border::DOUBLE)
            .style(Style::default().fg(Color::White)),
    );

    frame.render_widget(popup, popup_area);
}
