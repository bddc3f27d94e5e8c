//! Crossterm-backed renderer and scoped terminal mode handling.
//!
//! [`CrosstermRenderer`] translates the [`Renderer`] primitives into crossterm
//! commands queued on any `Write` sink (stderr in the binary, a byte buffer in
//! tests). [`TerminalGuard`] puts the terminal into raw mode with a hidden
//! cursor and guarantees it is put back on every exit path.
//!
//! # Example
//!
//! ```
//! use autoprompt::infrastructure::terminal::CrosstermRenderer;
//! use autoprompt::ui::Renderer;
//!
//! let mut renderer = CrosstermRenderer::new(Vec::new());
//! renderer.move_cursor_to(1, 1)?;
//! renderer.write_text("hi")?;
//! renderer.flush()?;
//! assert!(renderer.get_ref().ends_with(b"hi"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::ui::renderer::Renderer;
use crate::ui::theme::DisplayAttribute;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

/// Erase from start of line through the cursor (EL1). Crossterm has no
/// command for it.
const CLEAR_TO_START_OF_LINE: &str = "\x1b[1K";

/// Renders through crossterm onto a writer.
#[derive(Debug)]
pub struct CrosstermRenderer<W: Write> {
    out: W,
}

impl<W: Write> CrosstermRenderer<W> {
    /// Wraps `out`. Raw mode and size queries still go to the controlling
    /// terminal.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl CrosstermRenderer<io::Stderr> {
    /// Renderer on standard error, leaving stdout free for the result.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

const fn to_crossterm(attr: DisplayAttribute) -> Attribute {
    match attr {
        DisplayAttribute::Reset => Attribute::Reset,
        DisplayAttribute::Bright => Attribute::Bold,
        DisplayAttribute::Dim => Attribute::Dim,
        DisplayAttribute::Underscore => Attribute::Underlined,
        DisplayAttribute::Blink => Attribute::SlowBlink,
        DisplayAttribute::Reverse => Attribute::Reverse,
        DisplayAttribute::Hidden => Attribute::Hidden,
    }
}

impl<W: Write> Renderer for CrosstermRenderer<W> {
    fn move_cursor_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(col.saturating_sub(1), row.saturating_sub(1))
        )
    }

    fn set_display_attribute(&mut self, attr: DisplayAttribute) -> io::Result<()> {
        queue!(self.out, SetAttribute(to_crossterm(attr)))
    }

    fn clear_to_end_of_line(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine))
    }

    fn clear_to_start_of_line(&mut self) -> io::Result<()> {
        queue!(self.out, Print(CLEAR_TO_START_OF_LINE))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn terminal_rows(&self) -> Option<u16> {
        terminal::size().ok().map(|(_, rows)| rows)
    }
}

/// Holds the terminal in prompt mode (raw input, hidden cursor) for its
/// lifetime.
///
/// Call [`release`](Self::release) to restore and observe errors. If the
/// guard is dropped instead (early `?` return, panic unwind, the interrupt
/// exit path) the same restoration runs and errors are ignored.
///
/// The guard derefs to the wrapped renderer so drawing goes through it.
pub struct TerminalGuard<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    active: bool,
}

impl<'a, R: Renderer + ?Sized> TerminalGuard<'a, R> {
    /// Enters raw mode and hides the cursor.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error. If hiding the cursor fails, raw mode is
    /// left again before returning.
    pub fn acquire(renderer: &'a mut R) -> io::Result<Self> {
        renderer.enter_raw_mode()?;
        if let Err(e) = renderer.set_cursor_visible(false) {
            let _ = renderer.exit_raw_mode();
            return Err(e);
        }
        tracing::debug!("terminal acquired");

        Ok(Self {
            renderer,
            active: true,
        })
    }

    /// Restores the terminal now.
    ///
    /// # Errors
    ///
    /// Returns the first renderer error hit while restoring.
    pub fn release(mut self) -> io::Result<()> {
        self.active = false;
        restore(&mut *self.renderer)
    }
}

fn restore<R: Renderer + ?Sized>(renderer: &mut R) -> io::Result<()> {
    renderer.set_cursor_visible(true)?;
    renderer.set_display_attribute(DisplayAttribute::Reset)?;
    renderer.exit_raw_mode()?;
    renderer.flush()?;
    tracing::debug!("terminal restored");
    Ok(())
}

impl<R: Renderer + ?Sized> Deref for TerminalGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for TerminalGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for TerminalGuard<'_, R> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let renderer = &mut *self.renderer;
        let _ = renderer.set_cursor_visible(true);
        let _ = renderer.set_display_attribute(DisplayAttribute::Reset);
        let _ = renderer.exit_raw_mode();
        let _ = renderer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut CrosstermRenderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = CrosstermRenderer::new(Vec::new());
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn cursor_positions_are_one_indexed() {
        let out = output(|r| r.move_cursor_to(4, 2));
        assert_eq!(out, "\x1b[2;4H");
    }

    #[test]
    fn clears_emit_erase_line_sequences() {
        assert_eq!(output(|r| r.clear_to_end_of_line()), "\x1b[K");
        assert_eq!(output(|r| r.clear_to_start_of_line()), "\x1b[1K");
    }

    #[test]
    fn attributes_map_to_sgr() {
        assert_eq!(
            output(|r| r.set_display_attribute(DisplayAttribute::Bright)),
            "\x1b[1m"
        );
        assert_eq!(
            output(|r| r.set_display_attribute(DisplayAttribute::Reset)),
            "\x1b[0m"
        );
        assert_eq!(
            output(|r| r.set_display_attribute(DisplayAttribute::Reverse)),
            "\x1b[7m"
        );
    }

    #[test]
    fn text_is_written_verbatim() {
        assert_eq!(output(|r| r.write_text("sell some widgets")), "sell some widgets");
    }
}
