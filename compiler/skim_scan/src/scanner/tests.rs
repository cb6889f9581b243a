use super::*;
use pretty_assertions::assert_eq;

#[test]
fn skips_trivia_and_stops_at_eof() {
    let mut sc = Scanner::new("fn  // note\n main");
    let words: Vec<_> = std::iter::from_fn(|| sc.next_token())
        .map(|t| t.text)
        .collect();
    assert_eq!(words, vec!["fn", "main"]);
    assert!(sc.next_token().is_none());
}

#[test]
fn nested_positions_are_rebased() {
    let file = "fn f() {\n    unsafe {}\n}";
    let body_start = file.find('{').map_or(0, |i| i + 1);
    let origin = Position::new(1, 9, 8);
    assert_eq!(body_start, 8);

    let mut sc = Scanner::nested(&file[body_start..], origin);
    let token = sc.next_token();
    assert!(token.is_some_and(|t| t.is_word("unsafe")));
    assert_eq!(token.map(|t| t.start), Some(Position::new(2, 5, 13)));
    assert_eq!(&file[13..19], "unsafe");
}

#[test]
fn span_from_uses_absolute_positions() {
    let mut sc = Scanner::nested("ab", Position::new(3, 4, 20));
    let start = sc.position();
    sc.cursor().bump();
    sc.cursor().bump();
    let span = sc.span_from(start);
    assert_eq!(span.start, Position::new(3, 4, 20));
    assert_eq!(span.end, Position::new(3, 6, 22));
}

#[test]
fn snapshot_does_not_advance() {
    let mut sc = Scanner::new("unsafe fn");
    let _ = sc.next_token();
    let mut ahead = sc.snapshot();
    ahead.eat_whitespace();
    assert_eq!(ahead.current(), 'f');
    assert_eq!(sc.position().offset, 6);
}
