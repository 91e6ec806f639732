use crate::{ScanCursor, Span};

// === Basic Navigation ===

#[test]
fn new_cursor_starts_empty_at_zero() {
    let cursor = ScanCursor::new(b"abc");
    assert_eq!(cursor.start(), 0);
    assert_eq!(cursor.end(), 0);
    assert_eq!(cursor.lead_byte(), Some(b'a'));
    assert_eq!(cursor.current(), Some(b'a'));
}

#[test]
fn advance_moves_end_only() {
    let mut cursor = ScanCursor::new(b"abc");
    assert_eq!(cursor.advance_n(2), 2);
    assert_eq!(cursor.start(), 0);
    assert_eq!(cursor.end(), 2);
    assert_eq!(cursor.current(), Some(b'c'));
    assert_eq!(cursor.lead_byte(), Some(b'a'));
    assert_eq!(cursor.pending(), b"ab");
}

#[test]
fn advance_clamps_at_end_of_buffer() {
    let mut cursor = ScanCursor::new(b"ab");
    cursor.advance_n(1);
    assert_eq!(cursor.advance_n(4), 1);
    assert_eq!(cursor.end(), 2);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn bump_collapses_span() {
    let mut cursor = ScanCursor::new(b"hello world");
    cursor.advance_n(5);
    assert_eq!(cursor.bump(), Span::new(0, 5));
    assert_eq!(cursor.start(), 5);
    assert_eq!(cursor.end(), 5);
    assert_eq!(cursor.lead_byte(), Some(b' '));
}

// === EOF ===

#[test]
fn empty_buffer_is_eof() {
    let cursor = ScanCursor::new(b"");
    assert!(cursor.is_eof());
    assert_eq!(cursor.lead_byte(), None);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn remaining_counts_unread_bytes() {
    let mut cursor = ScanCursor::new(b"abcd");
    assert_eq!(cursor.remaining(), 4);
    cursor.advance_n(3);
    assert_eq!(cursor.remaining(), 1);
}

// === eat_while ===

#[test]
fn eat_while_stops_at_predicate_failure() {
    let mut cursor = ScanCursor::new(b"aaab");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.end(), 3);
    assert_eq!(cursor.current(), Some(b'b'));
}

#[test]
fn eat_while_stops_at_end_of_buffer() {
    let mut cursor = ScanCursor::new(b"aaaa");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.end(), 4);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_with_always_true_predicate_is_bounded() {
    let mut cursor = ScanCursor::new(b"\0\0\0");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.end(), 3);
}

// === Slice ===

#[test]
fn slice_in_bounds() {
    let cursor = ScanCursor::new(b"hello world");
    assert_eq!(cursor.slice(Span::new(6, 11)), Some(&b"world"[..]));
}

#[test]
fn slice_out_of_bounds_is_none() {
    let cursor = ScanCursor::new(b"abc");
    assert_eq!(cursor.slice(Span::new(2, 5)), None);
}
