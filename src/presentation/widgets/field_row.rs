use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::{
        field::{Field, FieldInput, Representation},
        text::{fit_width, scroll_to_cursor},
    },
    presentation::config::styles::Styles,
};

const MISSING_TEXT: &str = "(missing)";

/// One profile row: the label column followed by whatever representation
/// the field currently holds
pub struct FieldRow<'a> {
    field: &'a Field,
    styles: &'a Styles,
    label_width: u16,
    focused: bool,
}

impl<'a> FieldRow<'a> {
    pub fn new(field: &'a Field, styles: &'a Styles, label_width: u16) -> Self {
        Self {
            field,
            styles,
            label_width,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Split a row into label and value columns
    pub fn columns(&self, area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Length(self.label_width), Constraint::Min(0)]).areas(area)
    }

    /// Terminal cursor position for a focused input
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let input = self.field.input().filter(|_| self.focused)?;
        let [_, value_area] = self.columns(area);
        if value_area.width == 0 {
            return None;
        }
        let width = usize::from(value_area.width);
        let (_, column) = scroll_to_cursor(input.buffer().before_cursor(), width);
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        let x = value_area.x + column.min(value_area.width - 1);
        Some(Position::new(x, value_area.y))
    }

    fn input_line(&self, input: &FieldInput, width: usize) -> Line<'a> {
        if input.value().is_empty() {
            if let Some(placeholder) = input.kind().placeholder() {
                return Line::from(Span::styled(
                    placeholder,
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }
        if !self.focused {
            return Line::from(fit_width(input.value(), width));
        }
        // The focused input scrolls so the cursor stays in view.
        let (hidden, _) = scroll_to_cursor(input.buffer().before_cursor(), width);
        let visible: String = input.value().chars().skip(hidden).collect();
        Line::from(fit_width(&visible, width))
    }
}

impl Widget for FieldRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [label_area, value_area] = self.columns(area);

        let label = fit_width(self.field.label(), usize::from(self.label_width.saturating_sub(1)));
        Paragraph::new(label)
            .style(self.styles.get_or_default("label"))
            .render(label_area, buf);

        let width = usize::from(value_area.width);
        match self.field.representation() {
            Representation::Display(value) => {
                Paragraph::new(fit_width(value, width))
                    .style(self.styles.get_or_default("value"))
                    .render(value_area, buf);
            }
            Representation::Input(input) => {
                let style = if self.focused {
                    self.styles.get_or_default("input_focused")
                } else {
                    self.styles.get_or_default("input")
                };
                Paragraph::new(self.input_line(input, width))
                    .style(style)
                    .render(value_area, buf);
            }
            Representation::Missing => {
                Paragraph::new(MISSING_TEXT)
                    .style(self.styles.get_or_default("missing"))
                    .render(value_area, buf);
            }
        }
    }
}
