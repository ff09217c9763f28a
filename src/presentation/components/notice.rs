//! Modal confirmation shown after a save

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::{core::state::AppState, domain::text::display_width};

const HINT: &str = "Enter / Esc to close";

#[derive(Debug, Clone, Default)]
pub struct NoticeComponent;

impl NoticeComponent {
    pub fn new() -> Self {
        Self
    }

    /// Centered box sized to the message, clipped to `area`
    pub fn area(message: &str, area: Rect) -> Rect {
        let content = display_width(message).max(HINT.len()) + 4;
        let width = u16::try_from(content).unwrap_or(u16::MAX).min(area.width);
        let height = 4.min(area.height);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        rect
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(message) = state.system.notice() else {
            return;
        };
        let style = state.config.config.styles.get_or_default("notice");
        let rect = Self::area(message, area);

        let text = vec![
            Line::from(message.to_string()),
            Line::from(Span::styled(HINT, Style::default().add_modifier(Modifier::DIM))),
        ];
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).style(style)),
            rect,
        );
    }
}
