//! Type definitions for the mdast walker.

use chakra_markdown_core::Child;
use serde::Serialize;

/// Heading metadata extracted during rendering.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Visible heading text.
    pub text: String,
}

/// Result of rendering a Markdown document through a renderer table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    /// Top-level rendered content.
    pub children: Vec<Child>,
    /// Extracted heading metadata.
    pub headings: Vec<HeadingEntry>,
}

/// Destination of a link reference definition (`[id]: url "title"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    /// Link destination.
    pub url: String,
    /// Optional title.
    pub title: Option<String>,
}

/// Represents the type of block scope currently being rendered.
///
/// Used in the Context stack to decide whether paragraphs inside list
/// items keep their wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Inside a list; loose lists keep item paragraphs.
    List {
        /// Whether the list or any of its items is spread.
        loose: bool,
    },
    /// Inside a block quote.
    Blockquote,
    /// Inside a footnote definition.
    Footnote,
}
