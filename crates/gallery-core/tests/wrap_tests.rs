// Greedy word wrap used for the description panel.

use gallery_core::wrap_text;
use proptest::prelude::*;

#[test]
fn short_text_is_unchanged() {
    let text = "Laws of motion & gravity";
    assert_eq!(wrap_text(text, 50), text);
}

#[test]
fn empty_text_stays_empty() {
    assert_eq!(wrap_text("", 50), "");
}

#[test]
fn wraps_builtin_description() {
    let text = "Super dense regions in space where gravity is so strong that not even light can escape.";
    let wrapped = wrap_text(text, 50);
    assert_eq!(
        wrapped,
        "Super dense regions in space where gravity is so\nstrong that not even light can escape."
    );
}

#[test]
fn line_may_reach_exactly_max_width() {
    // 24 + 1 + 25 = 50
    let a = "a".repeat(24);
    let b = "b".repeat(25);
    let text = format!("{a} {b} c");
    assert_eq!(wrap_text(&text, 50), format!("{a} {b}\nc"));
}

#[test]
fn joining_space_counts_towards_width() {
    let a = "a".repeat(25);
    let b = "b".repeat(25);
    let text = format!("{a} {b}");
    assert_eq!(wrap_text(&text, 50), format!("{a}\n{b}"));
}

#[test]
fn overlong_word_is_kept_whole() {
    let long = "x".repeat(60);
    let text = format!("short {long} tail");
    assert_eq!(wrap_text(&text, 50), format!("short\n{long}\ntail"));
}

#[test]
fn existing_line_breaks_are_preserved() {
    let text = "1.First Law (Law of Inertia)\nSecond Law (Force and Acceleration)(F = m·a)";
    assert_eq!(wrap_text(text, 50), text);
}

#[test]
fn width_counts_characters_not_bytes() {
    // 49 characters but more than 50 bytes.
    let text = format!("{} ·", "é".repeat(47));
    assert_eq!(text.chars().count(), 49);
    assert_eq!(wrap_text(&text, 50), text);
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,70}", 0..40)
}

proptest! {
    #[test]
    fn lines_fit_unless_single_overlong_word(ws in words(), width in 10usize..80) {
        let text = ws.join(" ");
        for line in wrap_text(&text, width).split('\n') {
            let len = line.chars().count();
            prop_assert!(
                len <= width || !line.contains(' '),
                "line {:?} is {} chars with width {}", line, len, width
            );
        }
    }

    #[test]
    fn wrapping_keeps_every_word_in_order(ws in words(), width in 10usize..80) {
        let text = ws.join(" ");
        let wrapped = wrap_text(&text, width);
        let back: Vec<&str> = wrapped.split(|c| c == ' ' || c == '\n').filter(|w| !w.is_empty()).collect();
        let orig: Vec<&str> = ws.iter().map(String::as_str).collect();
        prop_assert_eq!(back, orig);
    }

    #[test]
    fn text_within_width_is_returned_as_is(ws in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let text = ws.join(" ");
        prop_assume!(text.chars().count() < 50);
        prop_assert_eq!(wrap_text(&text, 50), text);
    }
}
