use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    domain::updated_data::UpdatedDataSet,
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

const NO_EXECUTOR: &str = "No command executor available. Use set_executor() to configure.";

/// Message and command queues around the pure update function
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: Option<mpsc::UnboundedSender<Msg>>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: Option<mpsc::UnboundedSender<RawMsg>>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a new Runtime; commands queue up until an executor is set
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx: Some(msg_tx),
            msg_rx,
            raw_msg_tx: Some(raw_msg_tx),
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with command executor
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.set_executor();
        runtime
    }

    pub fn set_executor(&mut self) {
        self.cmd_executor = Some(CmdExecutor::new());
    }

    fn executor_mut(&mut self) -> Result<&mut CmdExecutor, String> {
        self.cmd_executor.as_mut().ok_or_else(|| NO_EXECUTOR.to_string())
    }

    /// Add TUI command sender support to existing executor (for TuiCommand execution)
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_render_request_sender(render_sender);
        Ok(())
    }

    /// Receive every saved data set
    pub fn add_commit_sink(
        &mut self,
        sink: mpsc::UnboundedSender<UpdatedDataSet>,
    ) -> Result<(), String> {
        self.executor_mut()?.set_commit_sink(sink);
        Ok(())
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> Option<mpsc::UnboundedSender<Msg>> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> Option<mpsc::UnboundedSender<RawMsg>> {
        self.raw_msg_tx.clone()
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        if self.cmd_executor.is_none() {
            return Err(NO_EXECUTOR.to_string());
        }

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.execute_all(&commands)
    }

    fn execute_all(&self, commands: &[Cmd]) -> Result<Vec<String>, String> {
        let executor = self.cmd_executor.as_ref().ok_or_else(|| NO_EXECUTOR.to_string())?;
        executor
            .execute_commands(commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Execute a single command immediately
    pub fn execute_command(&self, cmd: &Cmd) -> Result<(), String> {
        let executor = self.cmd_executor.as_ref().ok_or_else(|| NO_EXECUTOR.to_string())?;
        executor
            .execute_command(cmd)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    fn translate(&mut self, raw_msg: RawMsg) {
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    /// Process all messages in queue
    ///
    /// Raw messages are translated against the state as it stands before
    /// any of them is applied.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
        }
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Translate and apply one raw message at a time, so each sees the
    /// state left by the previous one
    pub fn process_raw_sequentially(
        &mut self,
        raw_msgs: impl IntoIterator<Item = RawMsg>,
    ) -> Vec<Cmd> {
        let mut all_commands = Vec::new();
        for raw_msg in raw_msgs {
            self.translate(raw_msg);
            all_commands.extend(self.process_all_messages());
        }
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            field_count: self.state.profile.fields().len(),
            is_editing: self.state.profile.is_editing(),
            focus: self.state.profile.focus(),
            has_executor: self.cmd_executor.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub field_count: usize,
    pub is_editing: bool,
    pub focus: Option<usize>,
    pub has_executor: bool,
}
