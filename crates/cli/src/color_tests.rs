#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;

#[test]
fn always_mode_returns_always() {
    assert_eq!(resolve_color(ColorMode::Always, false), ColorChoice::Always);
}

#[test]
fn never_mode_returns_never() {
    assert_eq!(resolve_color(ColorMode::Never, false), ColorChoice::Never);
}

#[test]
fn no_color_takes_priority_over_always() {
    // no_color wins even when --color=always is also set
    assert_eq!(resolve_color(ColorMode::Always, true), ColorChoice::Never);
}

#[test]
fn no_color_takes_priority_over_auto() {
    assert_eq!(resolve_color(ColorMode::Auto, true), ColorChoice::Never);
}

#[test]
fn is_colored_matches_choice() {
    assert!(is_colored(ColorChoice::Always));
    assert!(!is_colored(ColorChoice::Never));
}

#[test]
fn scheme_added_is_green() {
    assert_eq!(scheme::added().fg(), Some(&Color::Green));
}

#[test]
fn scheme_removed_is_red() {
    assert_eq!(scheme::removed().fg(), Some(&Color::Red));
}

#[test]
fn scheme_hunk_is_cyan() {
    assert_eq!(scheme::hunk().fg(), Some(&Color::Cyan));
}

#[test]
fn scheme_header_is_bold() {
    let spec = scheme::header();
    assert!(spec.bold());
    assert!(spec.fg().is_none());
}

#[test]
fn scheme_fail_is_red_bold() {
    let spec = scheme::fail();
    assert_eq!(spec.fg(), Some(&Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_pass_is_green_bold() {
    let spec = scheme::pass();
    assert_eq!(spec.fg(), Some(&Color::Green));
    assert!(spec.bold());
}

#[test]
fn scheme_path_is_cyan() {
    assert_eq!(scheme::path().fg(), Some(&Color::Cyan));
}
