//! The styled-output collaborator.
//!
//! Help and diagnostics are written through an [`Emitter`], which receives
//! text together with an abstract [`Style`] hint. Mapping styles to terminal
//! colors is up to the implementation.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Abstract emphasis hint attached to emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Plain text.
    #[default]
    Normal,
    /// A parameter name in a listing.
    Parameter,
    /// Errors, warnings and missing required parameters.
    Warning,
    /// Section headers such as `Required:`.
    Header,
    /// Group separators.
    Separator,
    /// Inactive parameters and elision markers.
    Inactive,
    /// A parameter whose name matched a search filter.
    NameMatch,
    /// A parameter whose description matched a search filter.
    DescriptionMatch,
}

/// Receives styled text.
pub trait Emitter {
    fn emit(&mut self, text: &str, style: Style);
}

/// Writes text to an [`std::io::Write`] sink, ignoring styles.
#[derive(Debug)]
pub struct PlainEmitter<W: Write> {
    writer: W,
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PlainEmitter<std::io::Stdout> {
    /// An emitter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Emitter for PlainEmitter<W> {
    fn emit(&mut self, text: &str, _style: Style) {
        if let Err(e) = self.writer.write_all(text.as_bytes()) {
            tracing::debug!(error = %e, "Failed to write help output");
        }
    }
}

/// Records every emitted segment. Useful for tests and for callers that
/// render output themselves.
///
/// # Examples
///
/// ```
/// use paramkit_core::{Emitter, Style, Transcript};
///
/// let mut out = Transcript::default();
/// out.emit("Required:", Style::Header);
/// out.emit("\n", Style::Normal);
/// assert_eq!(out.text(), "Required:\n");
/// assert!(out.has_styled("Required", Style::Header));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    segments: Vec<(Style, String)>,
}

impl Transcript {
    /// Returns the recorded segments in emission order.
    pub fn segments(&self) -> &[(Style, String)] {
        &self.segments
    }

    /// Returns all recorded text concatenated, without styles.
    pub fn text(&self) -> String {
        self.segments.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Returns `true` if some segment with `style` contains `needle`.
    pub fn has_styled(&self, needle: &str, style: Style) -> bool {
        self.segments
            .iter()
            .any(|(s, text)| *s == style && text.contains(needle))
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }
}

impl Emitter for Transcript {
    fn emit(&mut self, text: &str, style: Style) {
        self.segments.push((style, text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_emitter_writes_text() {
        let mut out = PlainEmitter::new(Vec::new());
        out.emit("/pdec", Style::Parameter);
        out.emit(" <integer: dec>\n", Style::Normal);
        let written = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(written, "/pdec <integer: dec>\n");
    }

    #[test]
    fn test_transcript_keeps_styles() {
        let mut out = Transcript::default();
        out.emit("Invalid parameter: ", Style::Warning);
        out.emit("pdc\n", Style::Normal);
        assert_eq!(out.segments().len(), 2);
        assert!(out.has_styled("Invalid", Style::Warning));
        assert!(!out.has_styled("pdc", Style::Warning));
        out.clear();
        assert!(out.text().is_empty());
    }
}
