//! Sliding-window selection math over the match list.
//!
//! The viewport shows at most `capacity` consecutive matches starting at
//! `offset`. The cursor is a row *within* that window. Moving past the top or
//! bottom row slides the window by one instead of moving the cursor, so the
//! highlighted screen row stays put while content scrolls underneath it.
//!
//! # Invariants
//!
//! For a list of `len` matches, every [`Window`] returned by
//! [`compute_window`] satisfies:
//!
//! - `len == 0` ⇒ `offset == 0` and `cursor == None`
//! - `len > 0` ⇒ `offset < len`, `cursor == Some(c)` with
//!   `c < min(capacity, len - offset)`
//!
//! so `offset + c` is always a valid index into the match list.
//!
//! # Example
//!
//! ```
//! use autoprompt::domain::{compute_window, Move, Window};
//!
//! let window = compute_window(12, 5, Window::reset(12), Move::Down);
//! assert_eq!(window, Window { offset: 0, cursor: Some(1) });
//! ```

/// Visible slice position and selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Index of the first visible match.
    pub offset: usize,
    /// Selected row within the window, `None` when nothing is selectable.
    pub cursor: Option<usize>,
}

impl Window {
    /// Window for a freshly computed match list of length `len`.
    #[must_use]
    pub const fn reset(len: usize) -> Self {
        Self {
            offset: 0,
            cursor: if len > 0 { Some(0) } else { None },
        }
    }

    /// Absolute index of the selected match, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.map(|row| self.offset + row)
    }

    /// Checks the window invariants against a list of `len` matches.
    #[must_use]
    pub fn is_valid_for(&self, len: usize, capacity: usize) -> bool {
        match self.cursor {
            None => len == 0 && self.offset == 0,
            Some(row) => {
                len > 0 && self.offset < len && row < capacity.min(len - self.offset)
            }
        }
    }
}

/// Cursor movement requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Keep the previous window.
    None,
    /// Move the selection one row up, scrolling at the top row.
    Up,
    /// Move the selection one row down, scrolling at the bottom row.
    Down,
    /// Jump back to the first match. Issued after every query edit.
    Reset,
}

/// Computes the next window for a list of `len` matches.
///
/// `capacity` must be non-zero; the prompt builder rejects a zero capacity
/// before any window is computed.
///
/// Up and Down never wrap around: at the first match `Up` is a no-op, at the
/// last match `Down` is a no-op.
#[must_use]
pub fn compute_window(len: usize, capacity: usize, previous: Window, requested: Move) -> Window {
    debug_assert!(capacity > 0, "viewport capacity must be non-zero");

    if len == 0 {
        return Window::reset(0);
    }

    match requested {
        Move::Reset => Window::reset(len),
        Move::None => previous,
        Move::Up => match previous.cursor {
            Some(0) if previous.offset > 0 => Window {
                offset: previous.offset - 1,
                cursor: Some(0),
            },
            Some(row) if row > 0 => Window {
                offset: previous.offset,
                cursor: Some(row - 1),
            },
            _ => previous,
        },
        Move::Down => {
            let Some(row) = previous.cursor else {
                return previous;
            };
            let has_next = previous.offset + row < len - 1;

            if row == capacity - 1 && has_next {
                Window {
                    offset: previous.offset + 1,
                    cursor: Some(row),
                }
            } else if has_next && row < capacity - 1 {
                Window {
                    offset: previous.offset,
                    cursor: Some(row + 1),
                }
            } else {
                previous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(offset: usize, cursor: usize) -> Window {
        Window {
            offset,
            cursor: Some(cursor),
        }
    }

    #[test]
    fn reset_selects_first_row_or_nothing() {
        assert_eq!(compute_window(3, 5, at(2, 0), Move::Reset), at(0, 0));
        assert_eq!(
            compute_window(0, 5, at(3, 1), Move::Reset),
            Window {
                offset: 0,
                cursor: None
            }
        );
    }

    #[test]
    fn down_at_last_visible_row_scrolls() {
        let next = compute_window(12, 5, at(0, 4), Move::Down);
        assert_eq!(next, at(1, 4));
        assert_eq!(next.selected_index(), Some(5));
    }

    #[test]
    fn down_stops_at_last_match() {
        let bottom = at(7, 4);
        assert_eq!(bottom.selected_index(), Some(11));
        assert_eq!(compute_window(12, 5, bottom, Move::Down), bottom);
    }

    #[test]
    fn down_stops_at_short_list_end() {
        let last = at(0, 2);
        assert_eq!(compute_window(3, 5, last, Move::Down), last);
    }

    #[test]
    fn up_at_top_row_scrolls_back() {
        assert_eq!(compute_window(12, 5, at(3, 0), Move::Up), at(2, 0));
    }

    #[test]
    fn up_inside_window_moves_cursor() {
        assert_eq!(compute_window(12, 5, at(3, 2), Move::Up), at(3, 1));
    }

    #[test]
    fn up_at_first_match_is_noop() {
        assert_eq!(compute_window(12, 5, at(0, 0), Move::Up), at(0, 0));
    }

    #[test]
    fn none_keeps_previous_window() {
        assert_eq!(compute_window(12, 5, at(2, 3), Move::None), at(2, 3));
    }

    #[test]
    fn moves_on_empty_list_select_nothing() {
        for requested in [Move::Up, Move::Down, Move::None, Move::Reset] {
            assert_eq!(compute_window(0, 5, Window::reset(0), requested), Window::reset(0));
        }
    }

    #[test]
    fn capacity_of_one_scrolls_every_step() {
        let mut window = Window::reset(3);
        window = compute_window(3, 1, window, Move::Down);
        assert_eq!(window, at(1, 0));
        window = compute_window(3, 1, window, Move::Down);
        assert_eq!(window, at(2, 0));
        window = compute_window(3, 1, window, Move::Down);
        assert_eq!(window, at(2, 0));
    }

    fn valid_window() -> impl Strategy<Value = (usize, usize, Window)> {
        (1usize..40, 1usize..10).prop_flat_map(|(len, capacity)| {
            (0..len).prop_flat_map(move |offset| {
                let rows = capacity.min(len - offset);
                (0..rows).prop_map(move |row| (len, capacity, at(offset, row)))
            })
        })
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_moves(
            (len, capacity, start) in valid_window(),
            moves in proptest::collection::vec(prop_oneof![Just(Move::Up), Just(Move::Down)], 0..60),
        ) {
            let mut window = start;
            for requested in moves {
                window = compute_window(len, capacity, window, requested);
                prop_assert!(window.is_valid_for(len, capacity), "{window:?} invalid for len {len}, capacity {capacity}");
            }
        }

        #[test]
        fn repeated_up_at_top_is_stable(len in 1usize..30, capacity in 1usize..8) {
            let top = compute_window(len, capacity, Window::reset(len), Move::Up);
            prop_assert_eq!(top, Window::reset(len));
            prop_assert_eq!(compute_window(len, capacity, top, Move::Up), top);
        }

        #[test]
        fn repeated_down_reaches_bottom_and_stays(len in 1usize..30, capacity in 1usize..8) {
            let mut window = Window::reset(len);
            for _ in 0..len {
                window = compute_window(len, capacity, window, Move::Down);
            }
            prop_assert_eq!(window.selected_index(), Some(len - 1));
            prop_assert_eq!(compute_window(len, capacity, window, Move::Down), window);
        }

        #[test]
        fn full_window_stays_full_while_scrolling(len in 1usize..30, capacity in 1usize..8, steps in 0usize..40) {
            let mut window = Window::reset(len);
            for _ in 0..steps {
                window = compute_window(len, capacity, window, Move::Down);
                prop_assert!(len - window.offset >= capacity.min(len));
            }
        }
    }
}
