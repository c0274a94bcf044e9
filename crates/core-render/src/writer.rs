//! Terminal writer: batches primitive commands and emits them in one flush.
//!
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    ClearAll,
    MoveTo(u16, u16),
    Print(String),
    /// Print with reverse video, restoring normal attributes afterwards.
    PrintReverse(String),
}

#[derive(Default)]
pub(crate) struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn print_reverse<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::PrintReverse(s));
        }
    }

    #[cfg(test)]
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::ClearAll => {
                    queue!(out, Clear(ClearType::All))?;
                }
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
                Command::PrintReverse(s) => {
                    queue!(
                        out,
                        SetAttribute(Attribute::Reverse),
                        Print(s),
                        SetAttribute(Attribute::Reset)
                    )?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
