use blockview::misc::utils::PLACEHOLDER_HINT;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::cmd::tui::screen::{HeaderView, Screen};

const LABEL_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

pub struct BlockHeader<'a> {
    screen: &'a Screen,
}

impl<'a> BlockHeader<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        let block = Block::bordered()
            .title(" Block ")
            .border_set(border::PLAIN);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.screen {
            Screen::Empty => {}
            Screen::Placeholder(text) => {
                let lines = vec![
                    Line::from(text.as_str()).red().bold(),
                    Line::from(PLACEHOLDER_HINT).bold(),
                ];
                frame.render_widget(Paragraph::new(lines), inner);
            }
            Screen::Block { header, .. } => render_header(header, inner, frame),
        }
    }
}

fn render_header(header: &HeaderView, area: Rect, frame: &mut Frame) {
    let [top, stats] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let lines = vec![
        Line::from(vec![
            Span::styled("height: ", LABEL_STYLE),
            header.height.clone().bold(),
        ]),
        Line::from(vec![
            Span::styled("hash:   ", LABEL_STYLE),
            header.hash.clone().into(),
        ]),
        Line::from(vec![
            Span::styled("root:   ", LABEL_STYLE),
            header.merkle_root.clone().into(),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), top);

    let [size, difficulty, time, version] = Layout::horizontal([
        Constraint::Length(25),
        Constraint::Length(26),
        Constraint::Length(21),
        Constraint::Min(0),
    ])
    .areas(stats);

    frame.render_widget(Paragraph::new(header.size.as_str()), size);
    frame.render_widget(Paragraph::new(header.difficulty.as_str()), difficulty);
    frame.render_widget(Paragraph::new(header.time.as_str()), time);
    frame.render_widget(
        Paragraph::new(header.version.as_str()).right_aligned().dark_gray(),
        version,
    );
}
