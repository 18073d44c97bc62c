//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use super::span::{flatten, Span};
use super::style::{Modifiers, Rgb, Style};
use crate::typewriter::{Frame, TypewriterConfig};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write text, normalizing bare newlines to CRLF.
    pub fn write_text(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.data.extend_from_slice(first.as_bytes());
        }
        for line in lines {
            self.data.extend_from_slice(b"\r\n");
            self.data.extend_from_slice(line.as_bytes());
        }
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    /// Enable every modifier in `modifiers`.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        for (flag, code) in Modifiers::SGR {
            if modifiers.contains(flag) {
                let _ = write!(self.data, "\x1b[{code}m");
            }
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Reset, then apply `style`.
    pub fn set_style(&mut self, style: Style) {
        self.reset_attrs();
        if style.is_plain() {
            return;
        }
        if let Some(fg) = style.fg {
            self.set_fg(fg);
        }
        if let Some(bg) = style.bg {
            self.set_bg(bg);
        }
        self.set_modifiers(style.modifiers);
    }

    /// Write styled spans, resetting attributes afterwards.
    pub fn write_spans(&mut self, spans: &[Span]) {
        for span in spans {
            self.set_style(span.style);
            self.write_text(&span.text);
        }
        if !spans.is_empty() {
            self.reset_attrs();
        }
    }

    /// Write the reveal cursor glyph.
    pub fn write_cursor(&mut self, glyph: char, style: Style) {
        self.set_style(style);
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(glyph.encode_utf8(&mut utf8).as_bytes());
        self.reset_attrs();
    }

    /// Write a typewriter frame: the revealed content, then the cursor
    /// while the reveal is still running.
    pub fn write_frame(&mut self, frame: &Frame<Style>, config: &TypewriterConfig) {
        let spans = flatten(&frame.content, config.base_style);
        self.write_spans(&spans);
        if frame.cursor {
            self.write_cursor(config.cursor_glyph, config.cursor_style);
        }
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
