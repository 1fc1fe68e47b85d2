//! Markdown parsing into mdast.

use chakra_markdown_core::{ChakraMarkdownError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, task lists,
    /// strikethrough, autolink literals, footnotes).
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
    /// Enable indented code blocks.
    pub code_indented: bool,
}

impl ParseOptions {
    /// Markdown-friendly defaults.
    pub const fn markdown() -> Self {
        Self {
            gfm: true,
            frontmatter: true,
            code_indented: true,
        }
    }

    /// Plain CommonMark, no extensions.
    pub const fn commonmark() -> Self {
        Self {
            gfm: false,
            frontmatter: false,
            code_indented: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: self.code_indented,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Parse markdown into an mdast tree.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, ChakraMarkdownError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| {
        let location = message_location(&err);
        ChakraMarkdownError::parse_error(err.to_string(), location.line, location.column)
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
