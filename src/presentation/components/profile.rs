//! Profile panel component
//!
//! Renders the title, one row per field and the Edit/Save button. The
//! panel never decides what a field looks like: each row renders the
//! representation its field currently holds.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::text::display_width,
    presentation::{
        layout::ProfileLayout,
        widgets::{FieldRow, ToggleButton},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    /// Width of the label column: the longest label plus a gap, at most
    /// half of the row
    pub fn label_width(state: &AppState, row_width: u16) -> u16 {
        let longest = state
            .profile
            .fields()
            .iter()
            .map(|field| display_width(field.label()))
            .max()
            .unwrap_or(0);
        let wanted = u16::try_from(longest + 1).unwrap_or(u16::MAX);
        wanted.min(row_width / 2).max(1)
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &ProfileLayout) {
        let styles = &state.config.config.styles;
        let profile = &state.profile;

        let border_style = if profile.is_editing() {
            styles.get_or_default("edit_mode")
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", profile.title()));
        frame.render_widget(block, layout.panel);

        let label_width = layout
            .rows
            .first()
            .map_or(1, |row| Self::label_width(state, row.width));
        for (index, area) in layout.visible_rows() {
            let Some(field) = profile.field(index) else {
                continue;
            };
            let row = FieldRow::new(field, styles, label_width)
                .focused(profile.focus() == Some(index));
            if let Some(position) = row.cursor_position(area) {
                if !state.system.has_notice() {
                    frame.set_cursor_position(position);
                }
            }
            frame.render_widget(row, area);
        }

        let button =
            ToggleButton::new(profile.toggle_label()).style(styles.get_or_default("button"));
        frame.render_widget(button, layout.button);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::{
        core::{msg::profile::ProfileMsg, textarea_engine::NoopTextAreaEngine},
        domain::field::Field,
    };

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_label_width_follows_longest_label() {
        let state = AppState::new(
            "Ada",
            vec![Field::new("Name", "Ada"), Field::new("Zip Code", "SW1")],
        );

        assert_eq!(ProfileComponent::label_width(&state, 40), 9);
        assert_eq!(ProfileComponent::label_width(&state, 10), 5);
        assert_eq!(ProfileComponent::label_width(&AppState::default(), 40), 1);
    }

    #[test]
    fn test_focused_row_stays_visible_on_short_terminal() -> color_eyre::Result<()> {
        let fields = (0..10)
            .map(|i| Field::new(format!("F{i}"), format!("v{i}")))
            .collect();
        let mut state = AppState::new("t", fields);
        state.profile.activate();
        state
            .profile
            .update(ProfileMsg::FocusField(6), &NoopTextAreaEngine);

        let mut terminal = Terminal::new(TestBackend::new(30, 9))?;
        terminal.draw(|frame| {
            let layout = ProfileLayout::new(frame.area(), 10, state.profile.focus());
            ProfileComponent::new().view(&state, frame, &layout);
        })?;

        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 1).contains("F3"));
        assert!(row_text(buffer, 4).contains("F6 v6"));
        assert!((1..5).all(|y| !row_text(buffer, y).contains("F0")));
        Ok(())
    }
}
