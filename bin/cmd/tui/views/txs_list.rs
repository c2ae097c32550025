use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::cmd::tui::screen::Screen;

const TITLE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const SELECTED_ROW_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
const MARKER: &str = "> ";
const NO_MARKER: &str = "  ";

pub struct TxsList<'a> {
    screen: &'a Screen,
}

impl<'a> TxsList<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        let block = Block::bordered().border_set(border::PLAIN);

        let Screen::Block { txs, .. } = self.screen else {
            frame.render_widget(block, area);
            return;
        };

        let mut lines = Vec::with_capacity(txs.rows.len() + 1);
        lines.push(Line::from(Span::styled(txs.title.clone(), TITLE_STYLE)));
        lines.extend(txs.rows.iter().map(|row| {
            if row.selected {
                Line::from(vec![
                    Span::styled(MARKER, SELECTED_ROW_STYLE),
                    Span::styled(row.text.clone(), SELECTED_ROW_STYLE),
                ])
            } else {
                Line::from(vec![Span::raw(NO_MARKER), Span::raw(row.text.clone())])
            }
        }));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
