use serde::{Deserialize, Serialize};

pub mod profile;
pub mod system;

use profile::ProfileMsg;
use system::SystemMsg;

/// Domain messages representing application intent.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // Delegated to SystemState
    System(SystemMsg),

    // Delegated to ProfileState
    Profile(ProfileMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Profile(ProfileMsg::FocusNext),
            Msg::Profile(ProfileMsg::FocusPrev)
        );
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::Profile(ProfileMsg::SetValue {
            index: 2,
            value: "b@y.com".into(),
        });
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
