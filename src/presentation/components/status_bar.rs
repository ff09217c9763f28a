//! Status bar component
//!
//! One line at the bottom of the screen: the key hints of the current mode
//! on the left, the last status message on the right.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::keybindings::Action};

const VIEW_ACTIONS: [(Action, &str); 2] = [(Action::ToggleEdit, "edit"), (Action::Quit, "quit")];
const EDIT_HINTS: &str = "Tab/Shift-Tab: move  Ctrl-s: save";

/// Status bar component
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the current mode. View-mode hints name whatever keys
    /// the configuration binds.
    pub fn hints(state: &AppState) -> String {
        if state.profile.is_editing() {
            return EDIT_HINTS.to_string();
        }
        let keybindings = &state.config.config.keybindings;
        VIEW_ACTIONS
            .iter()
            .filter_map(|(action, label)| {
                keybindings
                    .hint_for(*action)
                    .map(|key| format!("{key}: {label}"))
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let hints = Span::styled(
            Self::hints(state),
            Style::default().fg(Color::Gray).italic(),
        );
        frame.render_widget(Paragraph::new(hints), area);

        if let Some(message) = state.system.status_message() {
            frame.render_widget(
                Paragraph::new(message.as_str()).alignment(Alignment::Right),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::profile::ProfileMode, infrastructure::config::Config,
        presentation::config::keybindings::parse_key_sequence,
    };

    #[test]
    fn test_hints_follow_mode() {
        let mut state = AppState::default();
        assert_eq!(state.profile.mode(), ProfileMode::Viewing);
        assert_eq!(StatusBarComponent::hints(&state), "e: edit  q: quit");

        state.profile.activate();
        assert_eq!(StatusBarComponent::hints(&state), EDIT_HINTS);
    }

    #[test]
    fn test_view_hints_follow_keybindings() -> Result<(), String> {
        let mut keybindings = Config::default().keybindings;
        keybindings.retain(|_, action| *action != Action::ToggleEdit);
        keybindings.insert(parse_key_sequence("<ctrl-e>")?, Action::ToggleEdit);
        keybindings.retain(|_, action| *action != Action::Quit);

        let mut state = AppState::default();
        state.config.config.keybindings = keybindings;

        assert_eq!(StatusBarComponent::hints(&state), "ctrl-e: edit");
        Ok(())
    }
}
