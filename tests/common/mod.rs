//! In-memory terminal used by the integration tests.
//!
//! [`RecordingRenderer`] keeps a log of every renderer call and also applies
//! the calls to a small character grid, so tests can assert on what a user
//! would actually see.

#![allow(dead_code)]

use autoprompt::ui::{DisplayAttribute, Renderer};
use std::collections::BTreeMap;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    MoveTo(u16, u16),
    Attr(DisplayAttribute),
    ClearToEnd,
    ClearToStart,
    Write(String),
    CursorVisible(bool),
    RawMode(bool),
    ClearScreen,
    Flush,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    attr: DisplayAttribute,
}

const BLANK: Cell = Cell {
    ch: ' ',
    attr: DisplayAttribute::Reset,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    #[default]
    Never,
    /// Return an error from the nth `write_text` call (0-based).
    ErrorOnWrite(usize),
    /// Panic in the nth `write_text` call (0-based).
    PanicOnWrite(usize),
}

#[derive(Debug)]
pub struct RecordingRenderer {
    pub ops: Vec<Op>,
    pub raw_mode: bool,
    pub cursor_visible: bool,
    pub rows: Option<u16>,
    pub failure: Failure,
    writes: usize,
    cursor: (u16, u16),
    attr: DisplayAttribute,
    screen: BTreeMap<u16, Vec<Cell>>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            raw_mode: false,
            cursor_visible: true,
            rows: None,
            failure: Failure::Never,
            writes: 0,
            cursor: (1, 1),
            attr: DisplayAttribute::Reset,
            screen: BTreeMap::new(),
        }
    }
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: u16) -> Self {
        Self {
            rows: Some(rows),
            ..Self::default()
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            failure,
            ..Self::default()
        }
    }

    /// Visible text of a screen row, without trailing blanks.
    pub fn line(&self, row: u16) -> String {
        self.screen
            .get(&row)
            .map(|cells| cells.iter().map(|c| c.ch).collect::<String>())
            .unwrap_or_default()
            .trim_end()
            .to_string()
    }

    /// Characters on `row` drawn with `attr`.
    pub fn text_with_attr(&self, row: u16, attr: DisplayAttribute) -> String {
        self.screen
            .get(&row)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| c.attr == attr)
                    .map(|c| c.ch)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn last_move(&self) -> Option<(u16, u16)> {
        self.ops.iter().rev().find_map(|op| match op {
            Op::MoveTo(col, row) => Some((*col, *row)),
            _ => None,
        })
    }

    pub fn count(&self, wanted: &Op) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }

    fn row_mut(&mut self, row: u16) -> &mut Vec<Cell> {
        self.screen.entry(row).or_default()
    }
}

impl Renderer for RecordingRenderer {
    fn move_cursor_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.ops.push(Op::MoveTo(col, row));
        self.cursor = (col, row);
        Ok(())
    }

    fn set_display_attribute(&mut self, attr: DisplayAttribute) -> io::Result<()> {
        self.ops.push(Op::Attr(attr));
        self.attr = attr;
        Ok(())
    }

    fn clear_to_end_of_line(&mut self) -> io::Result<()> {
        self.ops.push(Op::ClearToEnd);
        let (col, row) = self.cursor;
        let keep = usize::from(col.saturating_sub(1));
        self.row_mut(row).truncate(keep);
        Ok(())
    }

    fn clear_to_start_of_line(&mut self) -> io::Result<()> {
        self.ops.push(Op::ClearToStart);
        let (col, row) = self.cursor;
        let cells = self.row_mut(row);
        let end = usize::from(col).min(cells.len());
        for cell in &mut cells[..end] {
            *cell = BLANK;
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let call = self.writes;
        self.writes += 1;
        match self.failure {
            Failure::ErrorOnWrite(n) if n == call => {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away"));
            }
            Failure::PanicOnWrite(n) if n == call => panic!("renderer blew up"),
            _ => {}
        }

        self.ops.push(Op::Write(text.to_string()));
        let (col, row) = self.cursor;
        let attr = self.attr;
        let mut index = usize::from(col.saturating_sub(1));
        let cells = self.row_mut(row);
        for ch in text.chars() {
            if cells.len() <= index {
                cells.resize(index + 1, BLANK);
            }
            cells[index] = Cell { ch, attr };
            index += 1;
        }
        self.cursor.0 = u16::try_from(index + 1).unwrap_or(u16::MAX);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.ops.push(Op::CursorVisible(visible));
        self.cursor_visible = visible;
        Ok(())
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.ops.push(Op::RawMode(true));
        self.raw_mode = true;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> io::Result<()> {
        self.ops.push(Op::RawMode(false));
        self.raw_mode = false;
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.ops.push(Op::ClearScreen);
        self.screen.clear();
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.ops.push(Op::Flush);
        Ok(())
    }

    fn terminal_rows(&self) -> Option<u16> {
        self.rows
    }
}
