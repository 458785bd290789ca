//! Runtime module - drives the update loop from the command line
//!
//! - `batch` - one-shot subcommands
//! - `repl` - line-oriented interactive session
//!
//! [`Runtime`] owns the model, executes the [`Cmd`]s returned by `update`,
//! and feeds messages from background timers back into the loop.

pub mod batch;
pub mod repl;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::commands::Cmd;
use crate::messages::{Msg, UiMsg};
use crate::model::{AppModel, Toast};
use crate::update::update;

pub use batch::run_cli;

/// Upper bound on waiting for a loading timer that never reports back
const LOADING_WAIT_LIMIT: Duration = Duration::from_secs(5);

/// Owns the model and executes side effects
pub struct Runtime<W: Write> {
    pub model: AppModel,
    /// Where toasts and status lines are written
    out: W,
    /// Directory export payloads are written to
    export_dir: PathBuf,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    needs_redraw: bool,
    quit: bool,
}

impl<W: Write> Runtime<W> {
    pub fn new(model: AppModel, out: W) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            out,
            export_dir: PathBuf::from("."),
            msg_tx,
            msg_rx,
            needs_redraw: false,
            quit: false,
        }
    }

    pub fn set_export_dir(&mut self, dir: impl Into<PathBuf>) {
        self.export_dir = dir.into();
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Run one message through `update`, execute its command and print any
    /// toasts it raised
    pub fn dispatch(&mut self, msg: Msg) -> Result<()> {
        self.handle(Msg::Ui(UiMsg::ExpireToasts))?;

        let before = self.model.ui.toasts.len();
        self.handle(msg)?;
        self.process_async_messages()?;

        let new_toasts: Vec<Toast> = self
            .model
            .ui
            .toasts
            .get(before..)
            .map(<[Toast]>::to_vec)
            .unwrap_or_default();
        for toast in &new_toasts {
            writeln!(self.out, "[{}] {}", toast.kind.label(), toast.text)
                .context("Failed to write toast")?;
        }
        Ok(())
    }

    fn handle(&mut self, msg: Msg) -> Result<()> {
        if let Some(cmd) = update(&mut self.model, msg) {
            if cmd.needs_redraw() {
                self.needs_redraw = true;
            }
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    /// Execute a side effect
    pub fn process_cmd(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd)?;
                }
            }
            Cmd::HideLoadingAfter { ticket, delay_ms } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Ui(UiMsg::LoadingElapsed(ticket)));
                });
            }
            Cmd::WriteExport(payload) => {
                let path = self.export_dir.join(&payload.file_name);
                std::fs::write(&path, &payload.contents)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), mime = payload.mime_type, "exported");
            }
            Cmd::SaveConfig => {
                if let Err(e) = self.model.config.save() {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
            Cmd::Quit => self.quit = true,
        }
        Ok(())
    }

    /// Feed messages sent by background timers back through `update`.
    /// Returns true if any of them asked for a redraw.
    pub fn process_async_messages(&mut self) -> Result<bool> {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                if cmd.needs_redraw() {
                    needs_redraw = true;
                }
                self.process_cmd(cmd)?;
            }
        }
        self.needs_redraw |= needs_redraw;
        Ok(needs_redraw)
    }

    /// Block until the loading indicator is gone
    pub fn wait_for_loading(&mut self) -> Result<()> {
        while self.model.ui.is_loading() {
            match self.msg_rx.recv_timeout(LOADING_WAIT_LIMIT) {
                Ok(msg) => self.handle(msg)?,
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::warn!("Loading timer never fired, hiding indicator");
                    self.model.ui.cancel_loading();
                }
            }
        }
        Ok(())
    }

    /// Whether a redraw was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (AppModel, W) {
        (self.model, self.out)
    }
}

/// Read the initial text from `path`, or from stdin when absent
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin"),
    }
}
