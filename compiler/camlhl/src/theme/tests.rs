use super::*;
use pretty_assertions::assert_eq;

#[test]
fn color_mode_parse() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn every_styled_tag_has_a_default_style() {
    for tag in [
        Tag::Keyword,
        Tag::Operator,
        Tag::Builtin,
        Tag::Atom,
        Tag::Constructor,
        Tag::Number,
        Tag::String,
        Tag::Comment,
    ] {
        assert!(Theme::DEFAULT.style(tag).is_some(), "{tag:?} has no style");
    }
}

#[test]
fn unstyled_tags() {
    assert_eq!(Theme::DEFAULT.style(Tag::Variable), None);
    assert_eq!(Theme::DEFAULT.style(Tag::Whitespace), None);
    assert_eq!(Theme::DEFAULT.style(Tag::Plain), None);
    assert_eq!(Theme::DEFAULT.style_for_label("unknown"), None);
}

#[test]
fn constructors_are_styled_by_label() {
    assert_eq!(
        Theme::DEFAULT.style(Tag::Constructor),
        Theme::DEFAULT.style_for_label("variable-2")
    );
}

#[test]
fn paint_wraps_styled_text() {
    let mut out = String::new();
    Theme::DEFAULT.paint(Tag::Keyword, "let", &mut out);
    Theme::DEFAULT.paint(Tag::Whitespace, " ", &mut out);
    assert_eq!(out, "\x1b[1;35mlet\x1b[0m ");
}

#[test]
fn monochrome_paints_nothing() {
    let mut out = String::new();
    Theme::MONOCHROME.paint(Tag::Comment, "(* c *)", &mut out);
    assert_eq!(out, "(* c *)");
}
