//! Terminal renderer interface and the prompt drawing routine.
//!
//! The core never writes escape sequences itself. It drives an abstract
//! [`Renderer`] whose primitives mirror a classic cursor-addressing terminal
//! library; [`CrosstermRenderer`](crate::infrastructure::terminal::CrosstermRenderer)
//! implements it for real terminals and tests use an in-memory recorder.
//!
//! # Layout
//!
//! Coordinates are 1-indexed `(column, row)`.
//!
//! ```text
//! row 1            <prompt> <query>
//! row 2             > first visible match
//! row 3               second visible match
//! ...
//! row capacity+1      last visible row (cleared when empty)
//! ```
//!
//! The marker occupies the first `marker_width` columns; candidate text starts
//! right after it.

use crate::app::SessionState;
use crate::ui::theme::{DisplayAttribute, Theme};
use crate::ui::viewmodel::{RowView, ViewModel};
use std::io;

/// First screen row used for candidates.
const FIRST_ROW: u16 = 2;

/// Primitive terminal operations consumed by the prompt.
pub trait Renderer {
    /// Moves the terminal cursor to 1-indexed `(col, row)`.
    fn move_cursor_to(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Switches the display attribute for subsequent text.
    fn set_display_attribute(&mut self, attr: DisplayAttribute) -> io::Result<()>;

    /// Clears from the cursor to the end of the line.
    fn clear_to_end_of_line(&mut self) -> io::Result<()>;

    /// Clears from the start of the line up to and including the cursor.
    fn clear_to_start_of_line(&mut self) -> io::Result<()>;

    /// Writes text at the cursor.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    fn enter_raw_mode(&mut self) -> io::Result<()>;

    fn exit_raw_mode(&mut self) -> io::Result<()>;

    /// Clears the whole screen.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Flushes buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Terminal height in rows, if known.
    fn terminal_rows(&self) -> Option<u16> {
        None
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn move_cursor_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        (**self).move_cursor_to(col, row)
    }

    fn set_display_attribute(&mut self, attr: DisplayAttribute) -> io::Result<()> {
        (**self).set_display_attribute(attr)
    }

    fn clear_to_end_of_line(&mut self) -> io::Result<()> {
        (**self).clear_to_end_of_line()
    }

    fn clear_to_start_of_line(&mut self) -> io::Result<()> {
        (**self).clear_to_start_of_line()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        (**self).enter_raw_mode()
    }

    fn exit_raw_mode(&mut self) -> io::Result<()> {
        (**self).exit_raw_mode()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        (**self).clear_screen()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn terminal_rows(&self) -> Option<u16> {
        (**self).terminal_rows()
    }
}

/// Renders the current session state.
///
/// # Errors
///
/// Propagates renderer I/O errors.
pub fn render<R: Renderer + ?Sized>(
    state: &SessionState,
    theme: &Theme,
    renderer: &mut R,
) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, theme, renderer)
}

/// Draws a precomputed view model: the prompt line, then every candidate row.
///
/// # Errors
///
/// Propagates renderer I/O errors.
pub fn render_viewmodel<R: Renderer + ?Sized>(
    vm: &ViewModel,
    theme: &Theme,
    renderer: &mut R,
) -> io::Result<()> {
    render_prompt_line(vm, theme, renderer)?;

    for (row, view) in (FIRST_ROW..).zip(&vm.rows) {
        render_row(row, view, theme, renderer)?;
    }

    renderer.flush()
}

/// Screen row just below the candidate list, where the cursor is parked once
/// the prompt resolves.
#[must_use]
pub fn resting_row(capacity: usize) -> u16 {
    u16::try_from(capacity)
        .unwrap_or(u16::MAX)
        .saturating_add(FIRST_ROW + 1)
}

fn render_prompt_line<R: Renderer + ?Sized>(
    vm: &ViewModel,
    theme: &Theme,
    renderer: &mut R,
) -> io::Result<()> {
    renderer.move_cursor_to(1, 1)?;
    renderer.set_display_attribute(theme.prompt)?;
    renderer.write_text(&vm.message)?;
    renderer.write_text(" ")?;
    renderer.set_display_attribute(DisplayAttribute::Reset)?;

    let query_col = u16::try_from(vm.message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    renderer.move_cursor_to(query_col, 1)?;
    renderer.clear_to_end_of_line()?;
    renderer.write_text(&vm.query)
}

fn render_row<R: Renderer + ?Sized>(
    row: u16,
    view: &RowView,
    theme: &Theme,
    renderer: &mut R,
) -> io::Result<()> {
    let marker_width = theme.marker_width();

    renderer.move_cursor_to(marker_width.saturating_add(1), row)?;
    renderer.clear_to_end_of_line()?;
    for segment in &view.segments {
        if segment.highlighted {
            renderer.set_display_attribute(theme.highlight)?;
            renderer.write_text(&segment.text)?;
            renderer.set_display_attribute(DisplayAttribute::Reset)?;
        } else {
            renderer.write_text(&segment.text)?;
        }
    }

    // erase any marker left from the previous frame
    renderer.move_cursor_to(marker_width, row)?;
    renderer.clear_to_start_of_line()?;
    if view.selected {
        renderer.move_cursor_to(1, row)?;
        renderer.write_text(&theme.marker)?;
    }
    Ok(())
}
