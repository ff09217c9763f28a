use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    domain::{field::Field, updated_data::UpdatedDataSet},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource, real::RealTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders the result
pub struct AppRunner {
    runtime: Runtime,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner for `fields` drawing on `tui` and reading `events`
    pub fn new_with_config(
        config: Config,
        title: impl Into<String>,
        fields: Vec<Field>,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(title, fields, config);
        let mut runtime = Runtime::new_with_executor(initial_state);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            renderer: Renderer::new(),
            tui,
            events,
            tui_cmd_rx,
            render_req_rx,
            last_size: None,
        })
    }

    /// Create a runner on the real terminal, reading its event stream
    pub fn new_with_real(
        config: Config,
        title: impl Into<String>,
        fields: Vec<Field>,
        tui: Arc<Mutex<RealTui>>,
    ) -> Result<Self> {
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = tui;
        let events = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, title, fields, tui, events)
    }

    /// Receive every saved data set on `sink`
    pub fn set_commit_sink(&mut self, sink: mpsc::UnboundedSender<UpdatedDataSet>) -> Result<()> {
        self.runtime.add_commit_sink(sink).map_err(|e| eyre!(e))
    }

    /// Run until quit is requested or the event source ends
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        // Seed the terminal size so mouse clicks can be hit-tested right away
        let area = self.tui.lock().await.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(area.width, area.height));
        self.cycle(true).await?;

        loop {
            let Some(event) = self.events.next().await else {
                break;
            };

            let (raw, changed) = match event {
                tui::Event::Quit => (Some(RawMsg::Quit), true),
                tui::Event::Tick => (Some(RawMsg::Tick), false),
                tui::Event::Render => (Some(RawMsg::Render), false),
                tui::Event::Resize(w, h) => (Some(RawMsg::Resize(w, h)), true),
                tui::Event::Key(key) => (Some(RawMsg::Key(key)), true),
                tui::Event::Mouse(mouse) => (Some(RawMsg::Mouse(mouse)), true),
                tui::Event::Paste(text) => (Some(RawMsg::Paste(text)), true),
                tui::Event::Error => (
                    Some(RawMsg::Error("terminal event stream failed".to_string())),
                    true,
                ),
                tui::Event::Closed => break,
                tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => (None, false),
            };
            if let Some(raw) = raw {
                if !raw.is_frequent() {
                    log::debug!("raw event: {raw:?}");
                }
                self.runtime.send_raw_msg(raw);
            }

            self.cycle(changed).await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One update pass: apply queued messages, run their commands, carry
    /// out terminal commands and draw if anything asked for it
    async fn cycle(&mut self, changed: bool) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        let mut resizes = Vec::new();
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
            }
        }
        let mut render_reqs = 0;
        while self.render_req_rx.try_recv().is_ok() {
            render_reqs += 1;
        }

        let size = Coalescer::decide_resize(self.last_size, &resizes);
        let resized = size != self.last_size;
        if let (true, Some((width, height))) = (resized, size) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.last_size = size;
        }

        if Coalescer::decide_render(render_reqs, changed || resized) {
            self.renderer.render(&self.tui, self.runtime.state()).await?;
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.cycle(true).await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    fn key(code: KeyCode) -> tui::Event {
        tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_runner_quits_on_key() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(40, 12)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let events = EventSource::test([key(KeyCode::Char('q')), key(KeyCode::Char('e'))]);
        let mut runner = AppRunner::new_with_config(
            Config::embedded()?,
            "Ada",
            vec![Field::new("Name", "Ada")],
            tui,
            events,
        )?;

        runner.run().await?;

        // 'e' after quit is never processed
        assert!(runner.runtime().state().system.should_quit);
        assert!(!runner.runtime().state().profile.is_editing());
        assert_eq!(runner.runtime().state().system.terminal_size, Some((40, 12)));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes_and_redraws() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(40, 12)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = test_tui.clone();
        let events = EventSource::test([tui::Event::Key(KeyEvent::new(
            KeyCode::Char('z'),
            KeyModifiers::CONTROL,
        ))]);
        let mut runner =
            AppRunner::new_with_config(Config::embedded()?, "Ada", vec![], tui, events)?;

        runner.run().await?;

        assert!(!runner.runtime().state().system.should_suspend);
        // initial draw, the key itself, and the redraw after resuming
        assert_eq!(test_tui.lock().await.draw_count(), 3);
        Ok(())
    }
}
