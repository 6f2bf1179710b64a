//! Terminal sink for the driver loop.
//!
//! The simulation core only produces text frames; this module owns how they
//! reach the screen. Frames are repainted in place by homing the cursor, so
//! the terminal never scrolls and no external clear process is spawned.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    terminal::{Clear, ClearType},
};

/// Writes frames over each other at the top-left of the terminal
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    /// Wrap a writer, clearing it once so the first frame starts clean
    pub fn new(mut out: W) -> io::Result<Self> {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(Self { out })
    }

    /// Repaint the frame and a one-line status beneath it
    pub fn present(&mut self, frame: &str, status: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0))?;
        self.out.write_all(frame.as_bytes())?;
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        write!(self.out, "{status}")?;
        self.out.flush()
    }
}
