use crate::core::{
    cmd::Cmd,
    msg::{profile::ProfileMsg, system::SystemMsg, Msg},
    state::AppState,
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Confirmation shown after every save
pub const COMMIT_NOTICE: &str = "Profile updated successfully!";

static NOOP_ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;

/// Collaborators the update function needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        Self {
            text_area: &NOOP_ENGINE,
        }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

/// Update with explicit collaborators (text editing engine)
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // A modal notice swallows activations until it is dismissed
        Msg::Profile(ProfileMsg::Activate) if state.system.has_notice() => (state, vec![]),

        // Profile messages (delegated to ProfileState); a save also raises the notice
        Msg::Profile(profile_msg) => {
            let mut commands = state.profile.update(profile_msg, ctx.text_area);
            let saved = commands.iter().find_map(|cmd| match cmd {
                Cmd::EmitUpdatedData { data, skipped } => Some((data.len(), *skipped)),
                _ => None,
            });
            if let Some((saved, skipped)) = saved {
                commands.extend(
                    state
                        .system
                        .update(SystemMsg::ShowNotice(COMMIT_NOTICE.to_string())),
                );
                commands.extend(
                    state
                        .system
                        .update(SystemMsg::UpdateStatusMessage(save_summary(saved, skipped))),
                );
            }
            (state, commands)
        }
    }
}

fn save_summary(saved: usize, skipped: usize) -> String {
    let noun = if saved == 1 { "field" } else { "fields" };
    if skipped == 0 {
        format!("[Saved] {saved} {noun}")
    } else {
        format!("[Saved] {saved} {noun}, {skipped} skipped")
    }
}
