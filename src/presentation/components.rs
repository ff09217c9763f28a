//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::ProfileLayout};

pub mod notice;
pub mod profile;
pub mod status_bar;

pub use notice::NoticeComponent;
pub use profile::ProfileComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub profile: ProfileComponent,
    pub status_bar: StatusBarComponent,
    pub notice: NoticeComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let profile = &state.profile;
        let layout = ProfileLayout::new(area, profile.fields().len(), profile.focus());

        self.profile.view(state, frame, &layout);
        self.status_bar.view(state, frame, layout.status);
        // Drawn last so it covers the panel
        self.notice.view(state, frame, area);
    }
}
