#![forbid(unsafe_code)]

//! Minimal HTML writer.
//!
//! Components write straight into a `String`. Text nodes and attribute values
//! are escaped with `v_htmlescape`; tag and attribute names are trusted
//! `'static` strings chosen by the component. Output is compact (no
//! whitespace between elements) so that identical inputs always produce
//! byte-identical markup.

use std::fmt::{self, Write as _};

/// Write `<tag a="v" ...>`.
pub fn open_tag(out: &mut String, tag: &'static str, attrs: &[(&'static str, &str)]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        // Writing into a String cannot fail.
        let _ = write!(out, " {name}=\"{}\"", v_htmlescape::escape(value));
    }
    out.push('>');
}

/// Write `</tag>`.
pub fn close_tag(out: &mut String, tag: &'static str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write escaped text content.
pub fn text(out: &mut String, value: &str) {
    let _ = write!(out, "{}", v_htmlescape::escape(value));
}

/// An inline `style` attribute value built from ordered declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `property: value` declaration.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// Whether no declarations were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}
