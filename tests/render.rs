//! Screen layout produced by the drawing routine for hand-built view models.

mod common;

use autoprompt::ui::{render_viewmodel, resting_row, RowView, Segment, ViewModel};
use autoprompt::{DisplayAttribute, Theme};
use common::{Op, RecordingRenderer};

fn plain(text: &str) -> Segment {
    Segment {
        text: text.to_string(),
        highlighted: false,
    }
}

fn lit(text: &str) -> Segment {
    Segment {
        text: text.to_string(),
        highlighted: true,
    }
}

fn viewmodel(message: &str, query: &str, rows: Vec<RowView>) -> ViewModel {
    ViewModel {
        message: message.to_string(),
        query: query.to_string(),
        rows,
    }
}

#[test]
fn query_starts_two_columns_after_the_prompt() {
    let mut screen = RecordingRenderer::new();
    let vm = viewmodel("¿qué?", "abc", vec![RowView::default()]);

    render_viewmodel(&vm, &Theme::default(), &mut screen).unwrap();

    assert!(screen.ops.contains(&Op::MoveTo(7, 1)));
    assert_eq!(screen.line(1), "¿qué? abc");
    assert_eq!(screen.text_with_attr(1, DisplayAttribute::Bright), "¿qué? ");
}

#[test]
fn text_follows_the_marker_column() {
    let theme = Theme {
        marker: "*".to_string(),
        highlight: DisplayAttribute::Reverse,
        ..Theme::default()
    };
    let rows = vec![
        RowView {
            selected: false,
            segments: vec![plain("run "), lit("bat"), plain("ch process")],
        },
        RowView {
            selected: true,
            segments: vec![plain("restart service")],
        },
    ];
    let mut screen = RecordingRenderer::new();

    render_viewmodel(&viewmodel("do:", "bat", rows), &theme, &mut screen).unwrap();

    assert_eq!(screen.line(2), " run batch process");
    assert_eq!(screen.line(3), "*restart service");
    assert_eq!(screen.text_with_attr(2, DisplayAttribute::Reverse), "bat");
    assert_eq!(screen.ops.last(), Some(&Op::Flush));
}

#[test]
fn redraw_replaces_longer_previous_rows() {
    let theme = Theme::default();
    let mut screen = RecordingRenderer::new();

    let before = vec![RowView {
        selected: true,
        segments: vec![plain("build some widgets")],
    }];
    render_viewmodel(&viewmodel("do:", "", before), &theme, &mut screen).unwrap();

    let after = vec![RowView {
        selected: false,
        segments: vec![plain("sell")],
    }];
    render_viewmodel(&viewmodel("do:", "", after), &theme, &mut screen).unwrap();

    assert_eq!(screen.line(2), "   sell");
}

#[test]
fn reverse_theme_marker_is_three_columns() {
    let theme = Theme::from_name("reverse").unwrap();
    let mut screen = RecordingRenderer::new();
    let rows = vec![RowView {
        selected: true,
        segments: vec![plain("run a report")],
    }];

    render_viewmodel(&viewmodel("do:", "", rows), &theme, &mut screen).unwrap();

    assert_eq!(screen.line(2), " » run a report");
}

#[test]
fn resting_row_sits_below_the_list() {
    assert_eq!(resting_row(5), 8);
    assert_eq!(resting_row(1), 4);
}
