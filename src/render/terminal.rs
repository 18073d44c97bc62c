//! Inline terminal surface: redraws a frame in place below the prompt.
//!
//! The surface remembers where it started, and each `present` returns
//! there, clears everything below and writes the new frame. The cursor is
//! hidden while the surface is alive and restored on drop.

use super::output::OutputBuffer;
use crossterm::{
    cursor, execute, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// A region of the terminal that is redrawn in place.
pub struct InlineSurface<W: Write> {
    writer: W,
}

impl<W: Write> InlineSurface<W> {
    /// Claim the terminal from the current cursor position down.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn new(mut writer: W) -> io::Result<Self> {
        execute!(writer, cursor::SavePosition, cursor::Hide)?;
        Ok(Self { writer })
    }

    /// Replace what is on the surface with `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self, frame: &OutputBuffer) -> io::Result<()> {
        queue!(
            self.writer,
            cursor::RestorePosition,
            Clear(ClearType::FromCursorDown)
        )?;
        frame.flush_to(&mut self.writer)
    }
}

impl<W: Write> Drop for InlineSurface<W> {
    fn drop(&mut self) {
        let _ = execute!(self.writer, cursor::Show);
        let _ = writeln!(self.writer);
    }
}
