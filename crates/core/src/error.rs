use thiserror::Error;

use crate::node::UnknownNodeKind;

/// Source location of a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while turning Markdown into elements.
///
/// Renderer functions themselves never fail; only parsing and key lookup do.
#[derive(Debug, Error)]
pub enum ChakraMarkdownError {
    /// markdown-rs parser error surfaced through the walker.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// A configuration named a slot key that does not exist.
    #[error(transparent)]
    UnknownNodeKind(#[from] UnknownNodeKind),
}

impl ChakraMarkdownError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }
}
