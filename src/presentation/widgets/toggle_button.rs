use ratatui::{prelude::*, widgets::Paragraph};

/// The Edit/Save control; the label is a projection of the profile mode
#[derive(Debug, Clone)]
pub struct ToggleButton<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> ToggleButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ToggleButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(self.style)
            .render(area, buf);
    }
}
