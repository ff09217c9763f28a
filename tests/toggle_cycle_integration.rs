use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::rstest;

use proftui::{
    core::{
        cmd::Cmd,
        msg::{profile::ProfileMsg, Msg},
        state::{profile::ProfileMode, AppState},
        update::COMMIT_NOTICE,
    },
    domain::{
        field::{Field, Representation},
        field_kind::InputKind,
        updated_data::UpdatedDataSet,
    },
    infrastructure::{config::Config, profile_source::ProfileDocument},
    integration::runtime::Runtime,
    RawMsg,
};

fn sample_runtime() -> color_eyre::Result<Runtime> {
    let (title, fields) = ProfileDocument::sample()?.into_parts();
    Ok(Runtime::new_with_executor(AppState::new_with_config(
        title,
        fields,
        Config::embedded()?,
    )))
}

fn key(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> RawMsg {
    RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn activate(runtime: &mut Runtime) -> Vec<Cmd> {
    runtime.process_message(Msg::Profile(ProfileMsg::Activate))
}

fn emitted(commands: &[Cmd]) -> Option<&UpdatedDataSet> {
    commands.iter().find_map(|cmd| match cmd {
        Cmd::EmitUpdatedData { data, .. } => Some(data),
        _ => None,
    })
}

#[test]
fn test_toggle_cycle_is_idempotent() -> color_eyre::Result<()> {
    let mut runtime = sample_runtime()?;
    let before = runtime.state().profile.fields().to_vec();

    activate(&mut runtime);
    assert_eq!(runtime.state().profile.toggle_label(), "Save");
    activate(&mut runtime);

    let profile = &runtime.state().profile;
    assert_eq!(profile.mode(), ProfileMode::Viewing);
    assert_eq!(profile.toggle_label(), "Edit");
    assert_eq!(profile.fields().len(), before.len());
    for (after, before) in profile.fields().iter().zip(&before) {
        assert_eq!(after, before);
        assert!(matches!(after.representation(), Representation::Display(_)));
    }
    Ok(())
}

#[rstest]
#[case("Birthday", InputKind::Date)]
#[case("Date of BIRTHDAY", InputKind::Date)]
#[case("birthday party", InputKind::Date)]
#[case("Email", InputKind::Text)]
#[case("Birth date", InputKind::Text)]
fn test_kind_inference(#[case] label: &str, #[case] kind: InputKind) {
    let mut runtime = Runtime::new(AppState::new("t", vec![Field::new(label, "")]));
    activate(&mut runtime);

    let input = runtime.state().profile.fields()[0].input().map(|i| i.kind());
    assert_eq!(input, Some(kind));
}

#[test]
fn test_value_round_trip() {
    let mut runtime = Runtime::new(AppState::new("t", vec![Field::new("Name", "Ada")]));

    activate(&mut runtime);
    let input = runtime.state().profile.fields()[0].input().cloned();
    assert_eq!(input.as_ref().map(|i| i.value()), Some("Ada"));
    assert_eq!(input.as_ref().and_then(|i| i.tag()), Some("name"));

    let commands = activate(&mut runtime);
    assert_eq!(runtime.state().profile.fields()[0].display_value(), Some("Ada"));
    assert_eq!(
        emitted(&commands),
        Some(&[("name", "Ada")].into_iter().collect())
    );
}

#[test]
fn test_edit_propagates_through_keys() -> color_eyre::Result<()> {
    let mut runtime = Runtime::new(AppState::new_with_config(
        "t",
        vec![Field::new("Email", "a@x.com")],
        Config::embedded()?,
    ));

    let mut script = vec![key(KeyCode::Char('e'))];
    script.extend(std::iter::repeat(key(KeyCode::Backspace)).take(7));
    script.extend("b@y.com".chars().map(|c| key(KeyCode::Char(c))));
    script.push(ctrl('s'));
    let commands = runtime.process_raw_sequentially(script);

    assert_eq!(runtime.state().profile.fields()[0].display_value(), Some("b@y.com"));
    assert_eq!(
        emitted(&commands),
        Some(&[("email", "b@y.com")].into_iter().collect())
    );
    assert_eq!(runtime.state().system.notice(), Some(COMMIT_NOTICE));
    Ok(())
}

#[test]
fn test_malformed_row_is_tolerated() -> color_eyre::Result<()> {
    let doc = ProfileDocument::parse(
        r#"{ fields: [
            { label: "Name", value: "Ada" },
            { label: "Phone" },
            { label: "City", value: "London" },
        ] }"#,
    )?;
    let (title, fields) = doc.into_parts();
    let mut runtime = Runtime::new(AppState::new(title, fields));

    activate(&mut runtime);
    assert!(runtime.state().profile.fields()[1].is_missing());
    let commands = activate(&mut runtime);

    let data = emitted(&commands).cloned().unwrap_or_default();
    assert_eq!(data.len(), 2);
    assert!(!data.contains_key("phone"));
    assert!(commands.contains(&Cmd::EmitUpdatedData {
        data,
        skipped: 1
    }));
    // The notice is shown even though a row was skipped
    assert_eq!(runtime.state().system.notice(), Some(COMMIT_NOTICE));
    assert_eq!(
        runtime.state().system.status_message().map(String::as_str),
        Some("[Saved] 2 fields, 1 skipped")
    );
    Ok(())
}

#[test]
fn test_birthday_is_normalized_to_iso_on_edit() {
    let mut runtime = Runtime::new(AppState::new(
        "t",
        vec![Field::new("Birthday", "Dec. 10, 1815")],
    ));

    activate(&mut runtime);
    let seeded = runtime.state().profile.fields()[0]
        .input()
        .map(|input| input.value().to_string());
    assert_eq!(seeded.as_deref(), Some("1815-12-10"));

    let commands = activate(&mut runtime);
    assert_eq!(
        emitted(&commands).and_then(|data| data.get("birthday")),
        Some("1815-12-10")
    );
}

#[test]
fn test_key_is_the_label_captured_at_edit_time() {
    let mut runtime = Runtime::new(AppState::new(
        "t",
        vec![Field::new("Zip Code", "SW1"), Field::new("City", "London")],
    ));

    activate(&mut runtime);
    runtime.process_message(Msg::Profile(ProfileMsg::SetValue {
        index: 1,
        value: "Paris".into(),
    }));
    let commands = activate(&mut runtime);

    let data = emitted(&commands).cloned().unwrap_or_default();
    assert_eq!(data.get("zip code"), Some("SW1"));
    assert_eq!(data.get("city"), Some("Paris"));
    assert!(!data.contains_key("0") && !data.contains_key("1"));
}

#[test]
fn test_notice_blocks_activation_until_dismissed() {
    let mut runtime = Runtime::new(AppState::new_with_config(
        "t",
        vec![Field::new("Name", "Ada")],
        Config::default(),
    ));

    activate(&mut runtime);
    activate(&mut runtime);
    assert!(runtime.state().system.has_notice());

    // Activation is swallowed while the notice is up
    activate(&mut runtime);
    assert!(!runtime.state().profile.is_editing());

    runtime.process_raw_sequentially([key(KeyCode::Esc)]);
    assert!(!runtime.state().system.has_notice());
    activate(&mut runtime);
    assert!(runtime.state().profile.is_editing());
}
