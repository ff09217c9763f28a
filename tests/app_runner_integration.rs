use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use tokio::sync::{mpsc, Mutex};

use proftui::{
    core::update::COMMIT_NOTICE,
    domain::updated_data::UpdatedDataSet,
    infrastructure::{
        config::Config,
        profile_source::ProfileDocument,
        tui::{event_source::EventSource, test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn typed(text: &str) -> impl Iterator<Item = Event> + '_ {
    text.chars().map(|c| key(KeyCode::Char(c)))
}

fn left_click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Run the sample profile against a scripted event list
async fn run_script(
    events: Vec<Event>,
) -> color_eyre::Result<(AppRunner, Arc<Mutex<TestTui>>, mpsc::UnboundedReceiver<UpdatedDataSet>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::new(WIDTH, HEIGHT)?));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = test_tui.clone();
    let (title, fields) = ProfileDocument::sample()?.into_parts();

    let mut runner = AppRunner::new_with_config(
        Config::embedded()?,
        title,
        fields,
        tui,
        EventSource::test(events),
    )?;
    let (tx, rx) = mpsc::unbounded_channel();
    runner.set_commit_sink(tx)?;
    runner.run().await?;

    Ok((runner, test_tui, rx))
}

#[tokio::test]
async fn test_initial_screen_shows_values_and_edit() -> color_eyre::Result<()> {
    let (_, tui, _) = run_script(vec![]).await?;
    let tui = tui.lock().await;

    assert_eq!(tui.draw_count(), 1);
    assert!(tui.contains_text("Ada Lovelace"));
    assert!(tui.contains_text("First Name"));
    assert!(tui.contains_text("London"));
    assert!(tui.contains_text("Edit"));
    assert!(!tui.contains_text("Save"));
    Ok(())
}

#[tokio::test]
async fn test_keyboard_edit_and_save_cycle() -> color_eyre::Result<()> {
    let mut events = vec![key(KeyCode::Char('e')), key(KeyCode::Tab)];
    events.extend(std::iter::repeat(key(KeyCode::Backspace)).take("Lovelace".len()));
    events.extend(typed("King"));
    events.push(ctrl('s'));

    let (runner, tui, mut rx) = run_script(events).await?;

    let data = rx.try_recv()?;
    assert_eq!(data.get("last name"), Some("King"));
    assert_eq!(data.get("first name"), Some("Ada"));
    assert_eq!(data.get("birthday"), Some("1815-12-10"));
    assert_eq!(data.len(), 10);
    assert!(rx.try_recv().is_err());

    let state = runner.runtime().state();
    assert!(!state.profile.is_editing());
    assert_eq!(state.system.notice(), Some(COMMIT_NOTICE));

    let tui = tui.lock().await;
    assert!(tui.contains_text(COMMIT_NOTICE));
    assert!(tui.contains_text("King"));
    assert!(tui.contains_text("[Saved] 10 fields"));
    Ok(())
}

#[tokio::test]
async fn test_mouse_click_on_button_enters_edit_mode() -> color_eyre::Result<()> {
    // 10 sample rows start at y=1; the button sits one blank row below them
    let (runner, tui, _) = run_script(vec![left_click(3, 12)]).await?;

    assert!(runner.runtime().state().profile.is_editing());
    let tui = tui.lock().await;
    assert!(tui.contains_text("Save"));
    assert!(tui.contains_text("Ctrl-s: save"));
    Ok(())
}

#[tokio::test]
async fn test_click_on_row_focuses_it_while_editing() -> color_eyre::Result<()> {
    let (runner, _, _) = run_script(vec![key(KeyCode::Char('e')), left_click(20, 7)]).await?;

    assert_eq!(runner.runtime().state().profile.focus(), Some(6));
    Ok(())
}

#[tokio::test]
async fn test_notice_must_be_dismissed_before_next_edit() -> color_eyre::Result<()> {
    let events = vec![
        key(KeyCode::Char('e')),
        ctrl('s'),
        // swallowed by the notice
        key(KeyCode::Char('e')),
        key(KeyCode::Enter),
        key(KeyCode::Char('e')),
    ];
    let (runner, tui, mut rx) = run_script(events).await?;

    assert!(rx.try_recv().is_ok());
    let state = runner.runtime().state();
    assert!(!state.system.has_notice());
    assert!(state.profile.is_editing());
    assert!(!tui.lock().await.contains_text(COMMIT_NOTICE));
    Ok(())
}

#[tokio::test]
async fn test_quit_stops_the_loop() -> color_eyre::Result<()> {
    let events = vec![key(KeyCode::Char('q')), key(KeyCode::Char('e'))];
    let (runner, _, _) = run_script(events).await?;

    assert!(runner.runtime().state().system.should_quit);
    assert!(!runner.runtime().state().profile.is_editing());
    Ok(())
}

#[tokio::test]
async fn test_resize_is_applied_to_the_terminal() -> color_eyre::Result<()> {
    let (runner, tui, _) = run_script(vec![Event::Resize(80, 30)]).await?;

    assert_eq!(runner.runtime().state().system.terminal_size, Some((80, 30)));
    assert_eq!(tui.lock().await.size()?.width, 80);
    Ok(())
}
