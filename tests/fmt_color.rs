use logmagix::fmt::{Alignment, Color, Elapsed, Transform, colorize, palette, strip_ansi};
use std::borrow::Cow;
use std::time::{Duration, Instant};

#[test]
fn ansi_sequences_per_color_form() {
    assert_eq!(Color::Basic(96).fg_ansi(), "\x1b[96m");
    assert_eq!(Color::indexed(176).fg_ansi(), "\x1b[38;5;176m");
    assert_eq!(Color::rgb(10, 20, 30).fg_ansi(), "\x1b[38;2;10;20;30m");
}

#[test]
fn palette_timestamp_is_true_color() {
    assert_eq!(palette::VIOLET.fg_ansi(), "\x1b[38;2;157;38;255m");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Color::Basic(32)), "\x1b[32mhi\x1b[0m");
}

#[test]
fn strip_removes_escapes() {
    let frame = palette::PINK.fg_ansi();
    let stamp = palette::VIOLET.fg_ansi();
    let colored = format!("{frame}[{stamp}12:00:00{frame}]{}", palette::RESET);
    assert_eq!(strip_ansi(&colored), "[12:00:00]");
    assert_eq!(strip_ansi("\x1b[1;31mbold red\x1b[0m"), "bold red");
}

#[test]
fn strip_borrows_plain_text() {
    assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
}

#[test]
fn transform_casing() {
    assert_eq!(Transform::Uppercase.apply("info"), "INFO");
    assert_eq!(Transform::Lowercase.apply("INFO"), "info");
    assert_eq!(Transform::Capitalize.apply("WARNING"), "Warning");
    assert_eq!(Transform::None.apply("MiXeD"), "MiXeD");
    assert_eq!(Transform::parse("cap"), Transform::Capitalize);
    assert_eq!(Transform::parse("whatever"), Transform::None);
}

#[test]
fn alignment_padding() {
    assert_eq!(Alignment::Left.left_padding(80, 30), 0);
    assert_eq!(Alignment::Right.left_padding(80, 30), 50);
    assert_eq!(Alignment::Center.left_padding(80, 30), 25);
    assert_eq!(Alignment::Center.left_padding(81, 30), 25);
    assert_eq!(Alignment::Center.left_padding(20, 30), 0);
    assert_eq!(Alignment::Right.left_padding(20, 30), 0);
}

#[test]
fn elapsed_truncates_not_rounds() {
    assert_eq!(Elapsed::between(0.0, 0.456_789).render(), "0.456");
    assert_eq!(Elapsed::between(0.0, 0.999_9).render(), "0.999");
    assert_eq!(Elapsed::between(0.0, 12.345_6).render(), "12.34");
    assert_eq!(Elapsed::between(1.0, 3.0).render(), "2.0");
}

#[test]
fn tiny_elapsed_renders_in_decimal() {
    assert_eq!(Elapsed::between(0.0, 0.000_04).render(), "0.000");
    assert_eq!(Elapsed::between(0.0, 0.000_04).suffix(), " In 0.000s");
}

#[test]
fn elapsed_suffix_and_duration() {
    let elapsed = Elapsed::from(Duration::from_millis(1500));
    assert_eq!(elapsed.suffix(), " In 1.5s");
    assert_eq!(elapsed.to_string(), "1.5");
    assert!((elapsed.seconds() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn elapsed_since_is_non_negative() {
    let elapsed = Elapsed::since(Instant::now());
    assert!(elapsed.seconds() >= 0.0);
    assert!(elapsed.render().starts_with('0'));
}
