#![deny(missing_docs)]
//! chakra-markdown core: the renderer table mapping Markdown AST nodes onto
//! Chakra UI components, and its override merge.

/// The renderer table, the factory, and the merge trait.
pub mod components;
/// Default renderers for every node-type key.
pub mod defaults;
/// UI element values produced by renderers.
pub mod element;
/// Core error types.
pub mod error;
/// Node-type keys.
pub mod node;
/// Typed props per node kind and the source-position forwarder.
pub mod props;
/// Renderer function values.
pub mod renderer;

pub use components::{Components, Merge, build, defaults};
pub use element::{Child, Element, Primitive, PropValue, Props, Tag, plain_text};
pub use error::{ChakraMarkdownError, SourceLocation};
pub use node::{NodeKind, UnknownNodeKind};
pub use props::{
    Align, CellProps, CodeProps, CoreProps, Display, ImageProps, LinkProps, ListItemProps,
    NodeProps, SOURCE_POSITION_ATTR, SourcePosition, position_attrs,
};
pub use renderer::Renderer;
