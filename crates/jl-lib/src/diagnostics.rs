//! Rendering of pattern errors with source context.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::pattern::PatternError;

/// Builder for rendering a [`PatternError`] against the pattern source.
pub struct PatternErrorPrinter<'e, 's> {
    error: &'e PatternError,
    source: &'s str,
    colored: bool,
}

impl<'e, 's> PatternErrorPrinter<'e, 's> {
    pub fn new(error: &'e PatternError, source: &'s str) -> Self {
        Self {
            error,
            source,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        if self.source.is_empty() {
            return self.error.to_string();
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = adjust_range(&self.error.span, self.source.len());
        let snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(range)
                .label(&self.error.message),
        );
        let report = [Level::ERROR.primary_title("invalid pattern").element(snippet)];

        renderer.render(&report).to_string()
    }
}

/// Grows an empty span to one character so the caret is visible.
fn adjust_range(range: &std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    let start = range.start.min(limit);
    let end = range.end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
