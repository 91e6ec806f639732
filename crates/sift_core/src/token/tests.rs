use super::*;

// === Span ===

#[test]
fn span_len_and_range() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert_eq!(span.range(), 3..7);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
}

#[test]
fn span_display() {
    assert_eq!(Span::new(0, 5).to_string(), "0..5");
}

// === Token ===

#[test]
fn token_accessors() {
    let tok = Token::new(b"abc", Span::new(10, 13));
    assert_eq!(tok.content(), b"abc");
    assert_eq!(tok.len(), 3);
    assert_eq!(tok.start(), 10);
    assert_eq!(tok.end(), 13);
    assert!(!tok.is_empty());
}

#[test]
fn token_into_owned_copies_content_and_span() {
    let tok = Token::new(b"xy", Span::new(1, 3));
    assert_eq!(tok.into_owned(), OwnedToken::new("xy", 1, 3));
}

// === Status ===

#[test]
fn status_ok_is_zero() {
    assert_eq!(Status::OK.code(), 0);
    assert!(Status::OK.is_ok());
    assert!(!Status::ERROR.is_ok());
    assert!(!Status::from_code(-1).is_ok());
}

#[test]
fn status_round_trips_raw_code() {
    assert_eq!(Status::from_code(42).code(), 42);
    assert_eq!(Status::from_code(7), Status::NOMEM);
}

#[test]
fn status_display() {
    assert_eq!(Status::OK.to_string(), "ok");
    assert_eq!(Status::NOMEM.to_string(), "out of memory");
    assert_eq!(Status::from_code(99).to_string(), "status 99");
}

// === Sinks ===

#[test]
fn vec_sink_collects_and_continues() {
    let mut sink: Vec<OwnedToken> = Vec::new();
    let status = sink.emit(Token::new(b"a", Span::new(0, 1)));
    assert_eq!(status, Status::OK);
    assert_eq!(sink, vec![OwnedToken::new("a", 0, 1)]);
}

#[test]
fn closure_sink_returns_its_status() {
    let mut seen = 0;
    let mut sink = |_: Token<'_>| {
        seen += 1;
        Status::ERROR
    };
    assert_eq!(sink.emit(Token::new(b"a", Span::new(0, 1))), Status::ERROR);
    assert_eq!(seen, 1);
}
