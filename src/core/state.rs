pub mod profile;
pub mod system;

use crate::{domain::field::Field, infrastructure::config::Config};

use profile::ProfileState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub profile: ProfileState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState for the given profile with the embedded default
    /// configuration
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new_with_config(title, fields, Config::default())
    }

    /// Initialize AppState for the given profile and configuration
    pub fn new_with_config(title: impl Into<String>, fields: Vec<Field>, config: Config) -> Self {
        Self {
            profile: ProfileState::new(title, fields, config.field_kinds.clone()),
            config: ConfigState { config },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::profile::ProfileMode;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.profile.fields().is_empty());
        assert_eq!(state.profile.mode(), ProfileMode::Viewing);
        assert!(!state.system.should_quit);
        assert!(!state.system.has_notice());
    }

    #[test]
    fn test_app_state_new_uses_config_kind_rules() {
        let state = AppState::new("Ada", vec![Field::new("Birthday", "1815-12-10")]);

        assert_eq!(state.profile.title(), "Ada");
        assert_eq!(state.profile.fields().len(), 1);
        assert_eq!(state.profile.kind_rules().len(), 1);
    }

    #[test]
    fn test_app_state_new_binds_view_mode_keys() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        use crate::core::{
            msg::{profile::ProfileMsg, Msg},
            raw_msg::RawMsg,
            translator::translate_raw_to_domain,
        };

        let state = AppState::new("Ada", vec![Field::new("Name", "Ada")]);
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));

        assert_eq!(
            translate_raw_to_domain(raw, &state),
            vec![Msg::Profile(ProfileMsg::Activate)]
        );
    }
}
