use super::*;

#[test]
fn short_text_stays_on_one_line() {
    assert_eq!(wrap_lines("Stay focused", 10.0, 200.0), vec!["Stay focused"]);
}

#[test]
fn wraps_on_word_boundaries() {
    // 6 px per char at size 10, so 10 chars per 60 px line.
    let lines = wrap_lines("one two three four", 10.0, 60.0);
    assert_eq!(lines, vec!["one two", "three four"]);
    assert!(lines.iter().all(|l| estimate_width(l, 10.0) <= 60.0));
}

#[test]
fn overlong_word_is_split() {
    let lines = wrap_lines("abcdefghijkl xy", 10.0, 30.0);
    assert_eq!(lines, vec!["abcde", "fghij", "kl xy"]);
}

#[test]
fn collapses_whitespace_and_ignores_empty_input() {
    assert!(wrap_lines("   ", 12.0, 100.0).is_empty());
    assert_eq!(wrap_lines("  a \n b  ", 12.0, 1000.0), vec!["a b"]);
}

#[test]
fn degenerate_width_still_makes_progress() {
    let lines = wrap_lines("abc", 10.0, 0.0);
    assert_eq!(lines, vec!["a", "b", "c"]);
}

#[test]
fn shaper_rejects_garbage_font_bytes() {
    assert!(TextShaper::new(b"not a font").is_err());
}
