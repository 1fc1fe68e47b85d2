//! Props handed to renderer functions, one shape per node kind.

use crate::element::{Child, Element, PropValue, Props};
use crate::node::NodeKind;

/// Attribute name carrying the source-position token.
pub const SOURCE_POSITION_ATTR: &str = "data-sourcepos";

/// Props shared by every node: rendered children and an optional
/// source-position token (`startLine:startCol-endLine:endCol`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProps {
    /// Already-rendered child content.
    pub children: Vec<Child>,
    /// Source-position token, when the walker tracks positions.
    pub source_position: Option<String>,
}

impl CoreProps {
    /// Creates props with the given children and no position.
    pub fn new(children: Vec<Child>) -> Self {
        Self {
            children,
            source_position: None,
        }
    }

    /// Sets the source-position token.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.source_position = Some(position.into());
        self
    }
}

/// CSS `display` value attached to code nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Inline code span.
    Inline,
    /// Fenced or indented block.
    Block,
}

/// Props for `code`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeProps {
    /// Children and position.
    pub core: CoreProps,
    /// Language class, e.g. `language-rust`.
    pub class_name: Option<String>,
    /// Display style signal.
    pub display: Option<Display>,
}

impl CodeProps {
    /// True when the node is inline code.
    pub fn is_inline(&self) -> bool {
        self.display == Some(Display::Inline)
    }
}

/// Props for `li`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemProps {
    /// Children and position.
    pub core: CoreProps,
    /// Task-list completion state; `None` for ordinary items.
    pub checked: Option<bool>,
}

/// Props for `a`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkProps {
    /// Children and position.
    pub core: CoreProps,
    /// Link destination.
    pub href: String,
    /// Optional title.
    pub title: Option<String>,
}

/// Props for `img`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageProps {
    /// Image source.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Optional title.
    pub title: Option<String>,
    /// Source-position token.
    pub source_position: Option<String>,
}

/// Column alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl Align {
    /// CSS `text-align` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// Props for `td` and `th`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellProps {
    /// Children and position.
    pub core: CoreProps,
    /// Column alignment.
    pub align: Option<Align>,
}

/// Access to the optional source-position token of any props shape.
pub trait SourcePosition {
    /// The token, if present.
    fn source_position(&self) -> Option<&str>;
}

impl SourcePosition for CoreProps {
    fn source_position(&self) -> Option<&str> {
        self.source_position.as_deref()
    }
}

impl SourcePosition for ImageProps {
    fn source_position(&self) -> Option<&str> {
        self.source_position.as_deref()
    }
}

macro_rules! source_position_via_core {
    ($($ty:ty),*) => {
        $(impl SourcePosition for $ty {
            fn source_position(&self) -> Option<&str> {
                self.core.source_position()
            }
        })*
    };
}

source_position_via_core!(CodeProps, ListItemProps, LinkProps, CellProps);

/// Returns `{"data-sourcepos": token}` when the props carry a non-empty
/// token, or an empty set otherwise.
pub fn position_attrs<P: SourcePosition + ?Sized>(props: &P) -> Props {
    let mut attrs = Props::new();
    if let Some(position) = props.source_position().filter(|p| !p.is_empty()) {
        attrs.insert(
            SOURCE_POSITION_ATTR.to_string(),
            PropValue::literal(position),
        );
    }
    attrs
}

/// Props for one node, tagged by slot key.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum NodeProps {
    P(CoreProps),
    Em(CoreProps),
    Blockquote(CoreProps),
    Code(CodeProps),
    Del(CoreProps),
    Hr(CoreProps),
    A(LinkProps),
    Img(ImageProps),
    Text(CoreProps),
    Ul(CoreProps),
    Ol(CoreProps),
    Li(ListItemProps),
    H1(CoreProps),
    H2(CoreProps),
    H3(CoreProps),
    H4(CoreProps),
    H5(CoreProps),
    H6(CoreProps),
    Table(CoreProps),
    Thead(CoreProps),
    Tbody(CoreProps),
    Tr(CoreProps),
    Td(CellProps),
    Th(CellProps),
}

impl NodeProps {
    /// Heading props for a depth in `1..=6`.
    pub fn heading(depth: u8, props: CoreProps) -> Option<Self> {
        let props = match NodeKind::heading(depth)? {
            NodeKind::H1 => NodeProps::H1(props),
            NodeKind::H2 => NodeProps::H2(props),
            NodeKind::H3 => NodeProps::H3(props),
            NodeKind::H4 => NodeProps::H4(props),
            NodeKind::H5 => NodeProps::H5(props),
            _ => NodeProps::H6(props),
        };
        Some(props)
    }

    /// The slot key these props belong to.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeProps::P(_) => NodeKind::Paragraph,
            NodeProps::Em(_) => NodeKind::Emphasis,
            NodeProps::Blockquote(_) => NodeKind::Blockquote,
            NodeProps::Code(_) => NodeKind::Code,
            NodeProps::Del(_) => NodeKind::Delete,
            NodeProps::Hr(_) => NodeKind::ThematicBreak,
            NodeProps::A(_) => NodeKind::Link,
            NodeProps::Img(_) => NodeKind::Image,
            NodeProps::Text(_) => NodeKind::Text,
            NodeProps::Ul(_) => NodeKind::UnorderedList,
            NodeProps::Ol(_) => NodeKind::OrderedList,
            NodeProps::Li(_) => NodeKind::ListItem,
            NodeProps::H1(_) => NodeKind::H1,
            NodeProps::H2(_) => NodeKind::H2,
            NodeProps::H3(_) => NodeKind::H3,
            NodeProps::H4(_) => NodeKind::H4,
            NodeProps::H5(_) => NodeKind::H5,
            NodeProps::H6(_) => NodeKind::H6,
            NodeProps::Table(_) => NodeKind::Table,
            NodeProps::Thead(_) => NodeKind::TableHead,
            NodeProps::Tbody(_) => NodeKind::TableBody,
            NodeProps::Tr(_) => NodeKind::TableRow,
            NodeProps::Td(_) => NodeKind::TableData,
            NodeProps::Th(_) => NodeKind::TableHeader,
        }
    }

    /// Builds the plain HTML element used when no renderer is installed
    /// for this node's slot.
    pub fn into_intrinsic(self) -> Element {
        let tag = self.kind().as_str();
        match self {
            NodeProps::Code(code) => {
                let attrs = position_attrs(&code);
                Element::intrinsic(tag)
                    .attr_opt("className", code.class_name.as_deref())
                    .props(attrs)
                    .children(code.core.children)
            }
            NodeProps::A(link) => {
                let attrs = position_attrs(&link);
                Element::intrinsic(tag)
                    .attr("href", link.href)
                    .attr_opt("title", link.title.as_deref())
                    .props(attrs)
                    .children(link.core.children)
            }
            NodeProps::Img(image) => {
                let attrs = position_attrs(&image);
                Element::intrinsic(tag)
                    .attr("src", image.src)
                    .attr("alt", image.alt)
                    .attr_opt("title", image.title.as_deref())
                    .props(attrs)
            }
            NodeProps::Li(item) => {
                let attrs = position_attrs(&item);
                let mut element = Element::intrinsic(tag).props(attrs);
                if let Some(checked) = item.checked {
                    element = element.child(
                        Element::intrinsic("input")
                            .attr("type", "checkbox")
                            .prop("checked", PropValue::boolean(checked))
                            .prop("disabled", PropValue::boolean(true)),
                    );
                }
                element.children(item.core.children)
            }
            NodeProps::Td(cell) | NodeProps::Th(cell) => {
                let attrs = position_attrs(&cell);
                let mut element = Element::intrinsic(tag).props(attrs);
                if let Some(align) = cell.align {
                    element = element.attr("align", align.as_str());
                }
                element.children(cell.core.children)
            }
            NodeProps::Hr(core) => Element::intrinsic(tag).props(position_attrs(&core)),
            NodeProps::Text(core) => {
                // `text` has no HTML counterpart; unwrap to a span.
                Element::intrinsic("span")
                    .props(position_attrs(&core))
                    .children(core.children)
            }
            NodeProps::P(core)
            | NodeProps::Em(core)
            | NodeProps::Blockquote(core)
            | NodeProps::Del(core)
            | NodeProps::Ul(core)
            | NodeProps::Ol(core)
            | NodeProps::H1(core)
            | NodeProps::H2(core)
            | NodeProps::H3(core)
            | NodeProps::H4(core)
            | NodeProps::H5(core)
            | NodeProps::H6(core)
            | NodeProps::Table(core)
            | NodeProps::Thead(core)
            | NodeProps::Tbody(core)
            | NodeProps::Tr(core) => Element::intrinsic(tag)
                .props(position_attrs(&core))
                .children(core.children),
        }
    }
}
