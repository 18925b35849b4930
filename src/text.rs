//! Inline-styled text fragments for booklet paragraphs.
//!
//! A [`Span`] carries a slice of text plus the inline decorations the PDF
//! layer understands (bold, italic, color).  Paragraphs in the document model
//! are plain vectors of spans; the renderer converts them to
//! [`genpdf::style::StyledString`] values.

use genpdf::style::{Color, Style, StyledString};

/// Ink used for reference URLs throughout the booklets.
pub const LINK_COLOR: Color = Color::Rgb(36, 92, 160);

/// A text fragment with inline style attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    text: String,
    bold: bool,
    italic: bool,
    color: Option<Color>,
}

impl Span {
    /// Creates an unstyled span.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The raw text of the span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Marks the span bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Marks the span italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Assigns a color to the span.
    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Converts the span into a `genpdf` styled string.
    pub fn to_styled_string(&self) -> StyledString {
        let mut style = Style::new();
        if self.bold {
            style.set_bold();
        }
        if self.italic {
            style.set_italic();
        }
        if let Some(color) = self.color {
            style.set_color(color);
        }
        StyledString::new(self.text.clone(), style)
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<&Span> for StyledString {
    fn from(span: &Span) -> Self {
        span.to_styled_string()
    }
}

impl From<Span> for StyledString {
    fn from(span: Span) -> Self {
        span.to_styled_string()
    }
}

/// A bold lead-in, e.g. `Optimal:` before a range.
pub fn label(text: impl Into<String>) -> Span {
    Span::new(text).bold()
}

/// A link-colored URL fragment.
pub fn link(url: impl Into<String>) -> Span {
    Span::new(url).colored(LINK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_string_reflects_flags() {
        let span = Span::new("hello").bold().italic().colored(Color::Rgb(1, 2, 3));
        let styled = span.to_styled_string();
        assert_eq!(styled.s, "hello");
        assert!(styled.style.is_bold());
        assert!(styled.style.is_italic());
        assert_eq!(styled.style.color(), Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn plain_span_has_no_decorations() {
        let styled = Span::new("plain").to_styled_string();
        assert!(!styled.style.is_bold());
        assert!(!styled.style.is_italic());
        assert_eq!(styled.style.color(), None);
    }

    #[test]
    fn link_helper_uses_link_color() {
        let span = link("https://example.com");
        assert_eq!(span.to_styled_string().style.color(), Some(LINK_COLOR));
    }
}
