use super::{EditError, Replacement, ReplacementBuffer};

#[test]
fn empty_buffer_is_identity() {
    let buffer = ReplacementBuffer::new();
    for content in ["", "const a = 1;", "ünïcödé\n\tmixed"] {
        assert_eq!(buffer.apply(content).unwrap(), content);
    }
}

#[test]
fn replace_and_delete() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(6, 7, "b");
    buffer.delete(11, 12);

    let out = buffer.apply("const a = 1;").unwrap();
    assert_eq!(out, "const b = 1");
}

#[test]
fn recording_order_does_not_matter() {
    let content = "one two three";
    let mut forward = ReplacementBuffer::new();
    forward.replace(0, 3, "1");
    forward.replace(4, 7, "2");
    forward.replace(8, 13, "3");

    let mut backward = ReplacementBuffer::new();
    backward.replace(8, 13, "3");
    backward.replace(0, 3, "1");
    backward.replace(4, 7, "2");

    assert_eq!(forward.apply(content).unwrap(), "1 2 3");
    assert_eq!(backward.apply(content).unwrap(), "1 2 3");
}

#[test]
fn length_accounts_for_every_edit() {
    let content = "abcdefghijklmnopqrstuvwxyz";
    let edits = [(0, 2, "XY_"), (5, 5, "++"), (10, 15, ""), (20, 26, "end")];

    let mut buffer = ReplacementBuffer::new();
    for (start, end, text) in edits {
        buffer.replace(start, end, text);
    }
    let out = buffer.apply(content).unwrap();

    let removed: usize = edits.iter().map(|(s, e, _)| e - s).sum();
    let added: usize = edits.iter().map(|(_, _, t)| t.len()).sum();
    assert_eq!(out.len(), content.len() - removed + added);
    assert_eq!(out, "XY_cde++fghijpqrstend");
}

#[test]
fn insert_before_and_after_range() {
    let mut buffer = ReplacementBuffer::new();
    buffer.insert_before(4..7, "<");
    buffer.insert_after(4..7, ">");

    assert_eq!(buffer.apply("let foo;").unwrap(), "let <foo>;");
}

#[test]
fn insert_lands_before_replacement_at_same_start() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace_node(0..3, "bar");
    buffer.insert(0, "// x\n", 0);

    assert_eq!(buffer.apply("foo;").unwrap(), "// x\nbar;");
}

#[test]
fn higher_priority_lands_first_at_shared_point() {
    let mut buffer = ReplacementBuffer::new();
    buffer.insert(3, "a", 0);
    buffer.insert(3, "b", 5);
    buffer.insert(3, "c", -1);

    assert_eq!(buffer.apply("xxxyyy").unwrap(), "xxxbacyyy");
}

#[test]
fn delete_node_by_range() {
    let mut buffer = ReplacementBuffer::new();
    buffer.delete_node(&(3..6));
    assert_eq!(buffer.apply("abcdefg").unwrap(), "abcg");
}

#[test]
fn overlap_is_rejected() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(2, 5, "x");
    buffer.replace(3, 4, "y");

    let err = buffer.apply("abcdefg").unwrap_err();
    assert_eq!(
        err,
        EditError::Overlap {
            start: 2,
            end: 5,
            next: 3
        }
    );
}

#[test]
fn duplicate_ranges_overlap() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(1, 3, "x");
    buffer.replace(1, 3, "y");
    assert!(matches!(
        buffer.apply("abcd"),
        Err(EditError::Overlap { .. })
    ));
}

#[test]
fn insert_inside_replacement_overlaps() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(0, 4, "x");
    buffer.insert(2, "y", 0);
    assert!(buffer.apply("abcd").is_err());
}

#[test]
fn adjacent_edits_do_not_overlap() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(0, 2, "A");
    buffer.replace(2, 4, "B");
    assert_eq!(buffer.apply("abcd").unwrap(), "AB");
}

#[test]
fn out_of_bounds_is_rejected() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(2, 10, "x");
    assert_eq!(
        buffer.apply("abc").unwrap_err(),
        EditError::OutOfBounds {
            start: 2,
            end: 10,
            len: 3
        }
    );

    let mut inverted = ReplacementBuffer::new();
    inverted.push(Replacement::new(2, 1, ""));
    assert!(matches!(
        inverted.apply("abc"),
        Err(EditError::OutOfBounds { .. })
    ));
}

#[test]
fn split_char_is_rejected() {
    let mut buffer = ReplacementBuffer::new();
    buffer.delete(1, 2);
    assert_eq!(
        buffer.apply("é").unwrap_err(),
        EditError::NotCharBoundary { offset: 1 }
    );
}

#[test]
fn apply_does_not_consume_buffer() {
    let mut buffer = ReplacementBuffer::new();
    buffer.replace(0, 1, "z");

    assert_eq!(buffer.apply("abc").unwrap(), "zbc");
    assert_eq!(buffer.apply("xyz").unwrap(), "zyz");
    assert_eq!(buffer.len(), 1);
    assert!(buffer.iter().all(|r| !r.is_insert()));
}
