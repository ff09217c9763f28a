//! Screen geometry shared by rendering and mouse hit-testing

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

/// Width of the mode-switch button, wide enough for either label
pub const BUTTON_WIDTH: u16 = 10;
/// Rows between the last field and the button
const BUTTON_GAP: u16 = 1;

/// Where each part of the profile screen lands for a given terminal area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLayout {
    pub panel: Rect,
    /// Index of the field drawn in the first row
    pub first: usize,
    /// One rect per visible field, in field order starting at `first`
    pub rows: Vec<Rect>,
    pub button: Rect,
    pub status: Rect,
}

impl ProfileLayout {
    /// Lay out `field_count` rows in `area`. When not every row fits, the
    /// rows scroll so that the `focus` field stays on screen.
    pub fn new(area: Rect, field_count: usize, focus: Option<usize>) -> Self {
        let [panel, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let inner = Block::default().borders(Borders::ALL).inner(panel);
        let row_budget = inner.height.saturating_sub(BUTTON_GAP + 1);
        let visible = field_count.min(usize::from(row_budget));
        let first = match focus {
            Some(focus) if visible > 0 && focus >= visible => {
                (focus + 1 - visible).min(field_count - visible)
            }
            _ => 0,
        };

        let rows = (0..visible)
            .map(|i| Rect::new(inner.x, inner.y + i as u16, inner.width, 1))
            .collect::<Vec<_>>();

        let button_y = inner.y + visible as u16 + BUTTON_GAP;
        let button = Rect::new(inner.x + 1, button_y, BUTTON_WIDTH, 1).intersection(inner);

        Self {
            panel,
            first,
            rows,
            button,
            status,
        }
    }

    pub fn from_size(width: u16, height: u16, field_count: usize, focus: Option<usize>) -> Self {
        Self::new(Rect::new(0, 0, width, height), field_count, focus)
    }

    /// Field index and row rect for each visible field
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(offset, rect)| (self.first + offset, *rect))
    }

    /// Index of the field under `(column, row)`
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.visible_rows()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| index)
    }

    pub fn is_on_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }
}
