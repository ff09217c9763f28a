use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{cmd::Cmd, msg::profile::ProfileMsg, textarea_engine::TextAreaEngine},
    domain::{
        error::FieldError,
        field::Field,
        field_kind::FieldKindRules,
        input::InputBuffer,
        updated_data::UpdatedDataSet,
    },
};

/// The two modes of the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileMode {
    #[default]
    Viewing,
    Editing,
}

impl ProfileMode {
    /// Text of the toggle control, derived from the mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            ProfileMode::Viewing => "Edit",
            ProfileMode::Editing => "Save",
        }
    }
}

/// Outcome of one activation of the toggle control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Entered {
        skipped: Vec<FieldError>,
    },
    Committed {
        data: UpdatedDataSet,
        skipped: Vec<FieldError>,
    },
}

/// Profile screen state: the ordered fields and the view/edit cycle
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    title: String,
    fields: Vec<Field>,
    mode: ProfileMode,
    /// Index of the focused input, edit mode only
    focus: Option<usize>,
    kind_rules: FieldKindRules,
    last_commit: Option<UpdatedDataSet>,
}

impl ProfileState {
    pub fn new(title: impl Into<String>, fields: Vec<Field>, kind_rules: FieldKindRules) -> Self {
        Self {
            title: title.into(),
            fields,
            kind_rules,
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ProfileMode::Editing
    }

    pub fn toggle_label(&self) -> &'static str {
        self.mode.toggle_label()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.focus.and_then(|i| self.fields.get(i))
    }

    /// Data set produced by the most recent save
    pub fn last_commit(&self) -> Option<&UpdatedDataSet> {
        self.last_commit.as_ref()
    }

    pub fn kind_rules(&self) -> &FieldKindRules {
        &self.kind_rules
    }

    /// Profile-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ProfileMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            ProfileMsg::Activate => match self.activate() {
                Transition::Entered { .. } => vec![],
                Transition::Committed { data, skipped } => vec![Cmd::EmitUpdatedData {
                    data,
                    skipped: skipped.len(),
                }],
            },
            ProfileMsg::FocusNext => {
                self.focus = self.step_focus(true);
                vec![]
            }
            ProfileMsg::FocusPrev => {
                self.focus = self.step_focus(false);
                vec![]
            }
            ProfileMsg::FocusField(index) => {
                if self.fields.get(index).is_some_and(Field::is_editable) {
                    self.focus = Some(index);
                }
                vec![]
            }
            ProfileMsg::EditFocused(key) => {
                self.edit_focused(key, engine);
                vec![]
            }
            ProfileMsg::InsertText(text) => {
                self.insert_text(&text);
                vec![]
            }
            ProfileMsg::SetValue { index, value } => {
                self.set_value(index, value);
                vec![]
            }
        }
    }

    /// Run the transition selected by the current mode. Fields lacking the
    /// expected representation are skipped and reported, the rest proceed.
    pub fn activate(&mut self) -> Transition {
        match self.mode {
            ProfileMode::Viewing => {
                let skipped = self.enter_editing();
                self.mode = ProfileMode::Editing;
                self.focus = self.fields.iter().position(Field::is_editable);
                Transition::Entered { skipped }
            }
            ProfileMode::Editing => {
                let (data, skipped) = self.commit();
                self.mode = ProfileMode::Viewing;
                self.focus = None;
                self.last_commit = Some(data.clone());
                Transition::Committed { data, skipped }
            }
        }
    }

    fn enter_editing(&mut self) -> Vec<FieldError> {
        let mut skipped = Vec::new();
        for field in &mut self.fields {
            match field.editing(&self.kind_rules) {
                Ok(editing) => *field = editing,
                Err(e) => {
                    log::warn!("Skipping field while entering edit mode: {e}");
                    skipped.push(e);
                }
            }
        }
        skipped
    }

    fn commit(&mut self) -> (UpdatedDataSet, Vec<FieldError>) {
        let mut data = UpdatedDataSet::new();
        let mut skipped = Vec::new();
        for field in &mut self.fields {
            let committed = match field.viewing() {
                Ok(committed) => committed,
                Err(e) => {
                    log::warn!("Skipping field while saving: {e}");
                    skipped.push(e);
                    continue;
                }
            };
            match committed.entry() {
                Ok((key, value)) => data.insert(key, value),
                Err(e) => {
                    log::warn!("Not recording field: {e}");
                    skipped.push(e);
                }
            }
            *field = committed.field;
        }
        (data, skipped)
    }

    fn step_focus(&self, forward: bool) -> Option<usize> {
        let editable: Vec<usize> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_editable())
            .map(|(i, _)| i)
            .collect();
        if editable.is_empty() {
            return None;
        }

        let pos = self
            .focus
            .and_then(|current| editable.iter().position(|&i| i == current));
        let next = match (pos, forward) {
            (None, true) => 0,
            (None, false) => editable.len() - 1,
            (Some(p), true) => (p + 1) % editable.len(),
            (Some(p), false) => (p + editable.len() - 1) % editable.len(),
        };
        Some(editable[next])
    }

    fn edit_focused(&mut self, key: KeyEvent, engine: &dyn TextAreaEngine) {
        let Some(input) = self
            .focus
            .and_then(|i| self.fields.get_mut(i))
            .and_then(Field::input_mut)
        else {
            return;
        };

        if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
            return;
        }
        let kind = input.kind();
        if let KeyCode::Char(c) = key.code {
            let typing = !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if typing && !kind.accepts(c) {
                return;
            }
            if typing
                && kind
                    .max_len()
                    .is_some_and(|max| input.buffer().char_len() >= max)
            {
                return;
            }
        }

        let next = engine.apply_keys(input.buffer(), &[key]);
        input.set_buffer(next);
    }

    fn insert_text(&mut self, text: &str) {
        let Some(input) = self
            .focus
            .and_then(|i| self.fields.get_mut(i))
            .and_then(Field::input_mut)
        else {
            return;
        };

        let kind = input.kind();
        let room = kind
            .max_len()
            .map_or(usize::MAX, |max| max.saturating_sub(input.buffer().char_len()));
        let accepted: String = text
            .chars()
            .filter(|&c| kind.accepts(c))
            .take(room)
            .collect();
        if accepted.is_empty() {
            return;
        }

        let mut buffer = input.buffer().clone();
        buffer.insert_str(&accepted);
        input.set_buffer(buffer);
    }

    fn set_value(&mut self, index: usize, value: String) {
        match self.fields.get_mut(index).and_then(Field::input_mut) {
            Some(input) => input.set_buffer(InputBuffer::new(value)),
            None => log::debug!("SetValue ignored: field {index} holds no input"),
        }
    }
}
