//! Synchronous host loop: render, read one event, dispatch it.
//!
//! `EditorRuntime::step` holds all per-event logic and never touches the
//! terminal, so the loop body is unit-testable; `run` wraps it with the
//! blocking reader and the frame writer.

use anyhow::Result;
use core_actions::handle_key;
use core_config::Config;
use core_events::{InputEvent, KeyEvent};
use core_input::{is_interrupt, read_input};
use core_model::Viewport;
use core_render::{Chrome, Frame, render};
use core_state::EditorState;
use core_text::TextStore;
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownReason {
    CtrlC,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::CtrlC => "ctrl_c",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue { redraw: bool },
    Break { reason: ShutdownReason },
}

pub(crate) struct EditorRuntime<S: TextStore> {
    state: EditorState<S>,
    config: Config,
    iteration: u64,
    last_key: Option<KeyEvent>,
}

impl<S: TextStore> EditorRuntime<S> {
    pub fn new(state: EditorState<S>, mut config: Config) -> Self {
        config.apply_viewport(state.viewport().cols);
        Self {
            state,
            config,
            iteration: 0,
            last_key: None,
        }
    }

    pub fn state(&self) -> &EditorState<S> {
        &self.state
    }

    /// Right-aligned status info: last key and iteration count.
    fn info(&self) -> Option<String> {
        if !self.config.show_info() {
            return None;
        }
        let key = self
            .last_key
            .map(|k| k.to_string())
            .unwrap_or_else(|| "-".to_string());
        Some(format!("{key} {}", self.iteration))
    }

    pub fn frame(&self) -> Frame {
        let info = self.info();
        Frame::build(
            &self.state,
            Chrome {
                pad: self.config.effective_pad,
                info: info.as_deref(),
            },
        )
    }

    pub fn step(&mut self, event: InputEvent) -> LoopControl {
        match event {
            InputEvent::Key(key) => {
                if is_interrupt(&key) {
                    return LoopControl::Break {
                        reason: ShutdownReason::CtrlC,
                    };
                }
                self.last_key = Some(key);
                // A failed key is already recorded for the status line.
                let dirty = handle_key(&mut self.state, &key).map_or(true, |r| r.dirty);
                // info changes with every key
                LoopControl::Continue {
                    redraw: dirty || self.config.show_info(),
                }
            }
            InputEvent::Resize(cols, rows) => {
                debug!(target: "runtime", cols, rows, "resize");
                self.state.set_viewport(Viewport::new(rows, cols));
                self.config.recompute_after_resize(cols);
                LoopControl::Continue { redraw: true }
            }
        }
    }

    /// Drive the session until Ctrl-C or an I/O error.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<ShutdownReason> {
        let mut redraw = true;
        loop {
            if redraw {
                self.iteration += 1;
                render(out, &self.frame())?;
            }
            let event = read_input()?;
            match self.step(event) {
                LoopControl::Continue { redraw: r } => redraw = r,
                LoopControl::Break { reason } => {
                    info!(target: "runtime", reason = reason.as_str(), iterations = self.iteration, "shutdown");
                    return Ok(reason);
                }
            }
        }
    }
}
