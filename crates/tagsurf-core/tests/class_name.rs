use pretty_assertions::assert_eq;
use tagsurf_core::{
    ClassNameKind, ClassNamePosition, Position, Range, Tag, TagKind, TagScanner, TextDocument,
};

fn locate(text: &str, name: &str, kind: TagKind, range: Range) -> ClassNamePosition {
    let tag = Tag::new(name, kind, range);
    TagScanner::new().class_name_position(&TextDocument::new(text), &tag)
}

fn end_of_list(line: usize, character: usize) -> ClassNamePosition {
    ClassNamePosition {
        position: Position::new(line, character),
        kind: ClassNameKind::EndOfClassList,
    }
}

#[test]
fn test_class_name_double_quotes() {
    assert_eq!(
        locate(
            "<div className=\"test-class\"></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 28)
        ),
        end_of_list(0, 26)
    );
}

#[test]
fn test_class_attribute() {
    assert_eq!(
        locate(
            "<div class=\"test-class\"></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 24)
        ),
        end_of_list(0, 22)
    );
}

#[test]
fn test_class_name_with_helper_call() {
    assert_eq!(
        locate(
            "<div className={cn(\"test-class\")}></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 34)
        ),
        end_of_list(0, 30)
    );
}

#[test]
fn test_no_class_attribute() {
    assert_eq!(
        locate(
            "<div id=\"test-id\"></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 18)
        ),
        ClassNamePosition {
            position: Position::new(0, 4),
            kind: ClassNameKind::EndOfName,
        }
    );
}

#[test]
fn test_class_name_single_quotes() {
    assert_eq!(
        locate(
            "<div className='test-class'></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 27)
        ),
        end_of_list(0, 26)
    );
}

#[test]
fn test_multi_line_tag_second_line() {
    assert_eq!(
        locate(
            "<div\n    className=\"test-class\"\n    id=\"test-id\"\n></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 3, 1)
        ),
        end_of_list(1, 25)
    );
}

#[test]
fn test_multi_line_tag_third_line() {
    assert_eq!(
        locate(
            "<div\n    id=\"test-id\"\n    className=\"test-class\"\n></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 3, 1)
        ),
        end_of_list(2, 25)
    );
}

#[test]
fn test_multi_line_tag_with_leading_indent() {
    assert_eq!(
        locate(
            "  <div\n    className=\"test-class\"\n    id=\"test-id\"\n></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 2, 3, 1)
        ),
        end_of_list(1, 25)
    );
    assert_eq!(
        locate(
            "  <div\n    id=\"test-id\"\n    className=\"test-class\"\n></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 2, 3, 1)
        ),
        end_of_list(2, 25)
    );
}

#[test]
fn test_multiple_classes() {
    assert_eq!(
        locate(
            "<div className=\"class1 class2 class3\"></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 38)
        ),
        end_of_list(0, 36)
    );
}

#[test]
fn test_self_closing_tag() {
    assert_eq!(
        locate(
            "<input className=\"test-class\" />",
            "input",
            TagKind::SelfClosing,
            Range::from_coords(0, 0, 0, 32)
        ),
        end_of_list(0, 28)
    );
}

#[test]
fn test_class_name_after_other_attributes() {
    assert_eq!(
        locate(
            "<div id=\"test-id\" className=\"test-class\"></div>",
            "div",
            TagKind::Opening,
            Range::from_coords(0, 0, 0, 41)
        ),
        end_of_list(0, 39)
    );
}

#[test]
fn test_tag_found_by_scanner() {
    let doc = TextDocument::new("<section class=\"a b\">\n  text\n</section>");
    let scanner = TagScanner::new();
    let tag = scanner.surrounding_tag(&doc, Position::new(1, 3)).unwrap();
    assert_eq!(scanner.class_name_position(&doc, &tag), end_of_list(0, 19));
}
