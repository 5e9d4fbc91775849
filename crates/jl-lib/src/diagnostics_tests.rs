use crate::diagnostics::PatternErrorPrinter;
use crate::pattern::Pattern;

#[test]
fn render_includes_source_and_message() {
    let err = Pattern::compile("{a,[*]}").expect_err("invalid pattern");
    assert_eq!(err.to_string(), "invalid pattern: empty property name");
    assert_eq!(err.span, 3..4);

    let rendered = PatternErrorPrinter::new(&err, "{a,[*]}").render();
    assert!(rendered.contains("invalid pattern"));
    assert!(rendered.contains("{a,[*]}"));
    assert!(rendered.contains("empty property name"));
}

#[test]
fn span_at_end_of_pattern_still_renders() {
    let err = Pattern::compile("[").expect_err("invalid pattern");
    let rendered = PatternErrorPrinter::new(&err, "[").render();
    assert!(rendered.contains("invalid pattern"));
}

#[test]
fn empty_source_falls_back_to_plain_message() {
    let err = Pattern::compile("").expect_err("invalid pattern");
    let rendered = PatternErrorPrinter::new(&err, "").render();
    assert_eq!(rendered, "invalid pattern: pattern must start with '[' or '{'");
}
