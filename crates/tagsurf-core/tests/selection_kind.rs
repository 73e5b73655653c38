use pretty_assertions::assert_eq;
use tagsurf_core::selection::{normalize_selections, trim_trailing_line_start};
use tagsurf_core::{Position, Range, Selection, SelectionDirection, SelectionKind, TextDocument};

const TEXT: &str = "<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>";

fn kind(range: Range) -> SelectionKind {
    SelectionKind::classify(range, &TextDocument::new(TEXT))
}

#[test]
fn test_classification_table() {
    let cases = [
        (Range::from_coords(1, 4, 1, 4), SelectionKind::None),
        (Range::from_coords(1, 2, 1, 13), SelectionKind::Inline),
        (Range::from_coords(1, 0, 1, 13), SelectionKind::Inline),
        (Range::from_coords(1, 0, 1, 14), SelectionKind::FullLine),
        (Range::from_coords(0, 0, 3, 5), SelectionKind::MultiFullLine),
        (Range::from_coords(1, 0, 2, 14), SelectionKind::MultiFullLine),
        (Range::from_coords(1, 2, 2, 14), SelectionKind::MultiInline),
        (Range::from_coords(1, 0, 2, 3), SelectionKind::MultiInline),
    ];
    for (range, expected) in cases {
        assert_eq!(kind(range), expected, "{range:?}");
    }
}

#[test]
fn test_reversed_selection_classifies_like_forward() {
    let reversed = Selection::new(Position::new(2, 14), Position::new(1, 0));
    assert_eq!(reversed.direction(), SelectionDirection::Backward);
    assert_eq!(kind(reversed.range()), SelectionKind::MultiFullLine);
}

#[test]
fn test_block_and_multi_line_flags() {
    assert!(SelectionKind::FullLine.is_block());
    assert!(!SelectionKind::FullLine.is_multi_line());
    assert!(!SelectionKind::Inline.is_block());
    assert!(!SelectionKind::None.is_block());
    assert!(SelectionKind::MultiInline.is_multi_line());
}

#[test]
fn test_drag_to_next_line_start_counts_as_full_lines() {
    let doc = TextDocument::new(TEXT);
    let dragged = Range::from_coords(1, 0, 3, 0);
    let trimmed = trim_trailing_line_start(dragged, &doc);

    assert_eq!(trimmed, Range::from_coords(1, 0, 2, 14));
    assert_eq!(
        SelectionKind::classify(trimmed, &doc),
        SelectionKind::MultiFullLine
    );
}

#[test]
fn test_normalize_keeps_touching_selections_apart() {
    let selections = vec![
        Selection::new(Position::new(0, 4), Position::new(0, 8)),
        Selection::new(Position::new(0, 0), Position::new(0, 4)),
    ];
    assert_eq!(
        normalize_selections(selections),
        vec![
            Selection::new(Position::new(0, 0), Position::new(0, 4)),
            Selection::new(Position::new(0, 4), Position::new(0, 8)),
        ]
    );
}
