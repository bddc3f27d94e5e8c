//! Shared rendering utilities.
//!
//! Splits candidate text at highlight boundaries so the renderer can switch
//! display attributes between runs. Concatenating the segments always
//! reproduces the original text: nothing is dropped or duplicated.
//!
//! # Example
//!
//! ```
//! use autoprompt::ui::helpers::split_segments;
//!
//! let segments = split_segments("build 1 widget", &[(0, 5), (8, 11)]);
//! let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
//! assert_eq!(texts, vec!["build", " 1 ", "wid", "get"]);
//! ```

use crate::ui::viewmodel::Segment;

/// Splits `text` into alternating plain and highlighted segments.
///
/// `ranges` are `(start, end)` byte offsets, sorted and non-overlapping, as
/// produced by the matcher. Ranges that are empty, out of order, out of
/// bounds, or not on character boundaries are skipped rather than panicking.
#[must_use]
pub fn split_segments(text: &str, ranges: &[(usize, usize)]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(text.len());
        if start < current_pos || start >= end {
            continue;
        }
        let (Some(before), Some(highlighted)) = (text.get(current_pos..start), text.get(start..end))
        else {
            continue;
        };

        if !before.is_empty() {
            segments.push(Segment {
                text: before.to_string(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: highlighted.to_string(),
            highlighted: true,
        });
        current_pos = end;
    }

    if current_pos < text.len() {
        segments.push(Segment {
            text: text[current_pos..].to_string(),
            highlighted: false,
        });
    }

    segments
}
