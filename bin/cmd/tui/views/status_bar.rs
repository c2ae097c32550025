use blockview::misc::utils::format_height;
use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::{Block, Paragraph},
};

pub struct StatusBar {
    browse_height: Option<u64>,
    pending_height: Option<u64>,
    tip: Option<u64>,
}

impl StatusBar {
    pub fn new(browse_height: Option<u64>, pending_height: Option<u64>, tip: Option<u64>) -> Self {
        Self {
            browse_height,
            pending_height,
            tip,
        }
    }

    pub fn render(&self, area: Rect, frame: &mut Frame) {
        let mut status_parts = vec![];

        if self.browse_height.is_none() {
            status_parts.push("⋯ ".into());
            status_parts.push("Connecting...".into());
        } else if self.pending_height.is_some() {
            status_parts.push("⋯ ".yellow());
            status_parts.push("Loading...".yellow().bold());
        } else {
            status_parts.push("✓ ".green());
            status_parts.push("Ready".green().bold());
        }

        status_parts.push(" | Block ".into());

        if let Some(pending) = self.pending_height {
            status_parts.push(format_height(Some(pending)).yellow());
        } else if self.browse_height.is_some() {
            status_parts.push(format_height(self.browse_height).into());
        } else {
            status_parts.push("N/A".dark_gray());
        }

        status_parts.push(" | Tip ".into());

        match self.tip {
            Some(tip) => status_parts.push(tip.to_string().into()),
            None => status_parts.push("N/A".dark_gray()),
        }

        let status_line = Line::from(status_parts);

        let block = Block::bordered()
            .title(" Status ")
            .border_set(border::PLAIN);

        let paragraph = Paragraph::new(status_line).block(block).left_aligned();

        frame.render_widget(paragraph, area);
    }
}
