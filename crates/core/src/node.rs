//! Node-type keys for renderer slots.

use std::str::FromStr;

/// Identifies a Markdown construct that has a renderer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// Paragraph (`p`).
    Paragraph,
    /// Emphasis (`em`).
    Emphasis,
    /// Block quote (`blockquote`).
    Blockquote,
    /// Inline or fenced code (`code`).
    Code,
    /// Strikethrough (`del`).
    Delete,
    /// Thematic break (`hr`).
    ThematicBreak,
    /// Link (`a`).
    Link,
    /// Image (`img`).
    Image,
    /// Plain text (`text`).
    Text,
    /// Unordered list (`ul`).
    UnorderedList,
    /// Ordered list (`ol`).
    OrderedList,
    /// List item (`li`).
    ListItem,
    /// Heading level 1 (`h1`).
    H1,
    /// Heading level 2 (`h2`).
    H2,
    /// Heading level 3 (`h3`).
    H3,
    /// Heading level 4 (`h4`).
    H4,
    /// Heading level 5 (`h5`).
    H5,
    /// Heading level 6 (`h6`).
    H6,
    /// Table (`table`).
    Table,
    /// Table head section (`thead`).
    TableHead,
    /// Table body section (`tbody`).
    TableBody,
    /// Table row (`tr`).
    TableRow,
    /// Table data cell (`td`).
    TableData,
    /// Table header cell (`th`).
    TableHeader,
}

impl NodeKind {
    /// Every key, in table order.
    pub const ALL: [NodeKind; 24] = [
        NodeKind::Paragraph,
        NodeKind::Emphasis,
        NodeKind::Blockquote,
        NodeKind::Code,
        NodeKind::Delete,
        NodeKind::ThematicBreak,
        NodeKind::Link,
        NodeKind::Image,
        NodeKind::Text,
        NodeKind::UnorderedList,
        NodeKind::OrderedList,
        NodeKind::ListItem,
        NodeKind::H1,
        NodeKind::H2,
        NodeKind::H3,
        NodeKind::H4,
        NodeKind::H5,
        NodeKind::H6,
        NodeKind::Table,
        NodeKind::TableHead,
        NodeKind::TableBody,
        NodeKind::TableRow,
        NodeKind::TableData,
        NodeKind::TableHeader,
    ];

    /// The slot key, which is also the intrinsic HTML tag name.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Paragraph => "p",
            NodeKind::Emphasis => "em",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Code => "code",
            NodeKind::Delete => "del",
            NodeKind::ThematicBreak => "hr",
            NodeKind::Link => "a",
            NodeKind::Image => "img",
            NodeKind::Text => "text",
            NodeKind::UnorderedList => "ul",
            NodeKind::OrderedList => "ol",
            NodeKind::ListItem => "li",
            NodeKind::H1 => "h1",
            NodeKind::H2 => "h2",
            NodeKind::H3 => "h3",
            NodeKind::H4 => "h4",
            NodeKind::H5 => "h5",
            NodeKind::H6 => "h6",
            NodeKind::Table => "table",
            NodeKind::TableHead => "thead",
            NodeKind::TableBody => "tbody",
            NodeKind::TableRow => "tr",
            NodeKind::TableData => "td",
            NodeKind::TableHeader => "th",
        }
    }

    /// Heading key for a depth in `1..=6`.
    pub fn heading(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(NodeKind::H1),
            2 => Some(NodeKind::H2),
            3 => Some(NodeKind::H3),
            4 => Some(NodeKind::H4),
            5 => Some(NodeKind::H5),
            6 => Some(NodeKind::H6),
            _ => None,
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known slot key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind: {0}")]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}
