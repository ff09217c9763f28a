use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    core::{
        msg::{profile::ProfileMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::{config::keybindings::Action, layout::ProfileLayout},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::Paste(text) => {
            if state.profile.is_editing() && !state.system.has_notice() {
                vec![Msg::Profile(ProfileMsg::InsertText(text))]
            } else {
                vec![]
            }
        }

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.system.has_notice() {
        translate_notice_keys(key)
    } else if state.profile.is_editing() {
        translate_edit_mode_keys(key)
    } else {
        translate_view_mode_keys(key, state)
    }
}

/// The notice is modal: it only listens for dismissal
fn translate_notice_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            vec![Msg::System(SystemMsg::DismissNotice)]
        }
        _ => vec![],
    }
}

/// Key bindings while inputs are shown
fn translate_edit_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Profile(ProfileMsg::Activate)],

        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down | KeyCode::Enter,
            ..
        } => vec![Msg::Profile(ProfileMsg::FocusNext)],

        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => vec![Msg::Profile(ProfileMsg::FocusPrev)],

        // Everything else is typed into the focused input
        _ => vec![Msg::Profile(ProfileMsg::EditFocused(key))],
    }
}

/// Key bindings while values are read-only
fn translate_view_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::ToggleEdit => vec![Msg::Profile(ProfileMsg::Activate)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Left clicks on the button activate it; in edit mode a click on a row
/// focuses that row's input
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    if state.system.has_notice() {
        return vec![Msg::System(SystemMsg::DismissNotice)];
    }
    let Some((width, height)) = state.system.terminal_size else {
        return vec![];
    };

    let profile = &state.profile;
    let layout = ProfileLayout::from_size(width, height, profile.fields().len(), profile.focus());
    if layout.is_on_button(mouse.column, mouse.row) {
        return vec![Msg::Profile(ProfileMsg::Activate)];
    }
    match layout.row_at(mouse.column, mouse.row) {
        Some(index) if state.profile.is_editing() => {
            vec![Msg::Profile(ProfileMsg::FocusField(index))]
        }
        _ => vec![],
    }
}
