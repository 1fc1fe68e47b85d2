#![deny(missing_docs)]
//! Markdown rendering through a Chakra UI renderer table: mdast walker,
//! component library registry, and JSX codegen.

/// JSX and ES module generation for rendered element trees.
pub mod codegen;
/// Markdown parsing into mdast.
pub mod parse;
/// Component library registry used to resolve imports.
pub mod registry;
/// Rendering layer (mdast walker over a renderer table).
pub mod renderer;

pub use codegen::{ModuleOptions, generate_chakra_module, generate_module, to_jsx};
pub use parse::{ParseOptions, parse_mdast};
pub use registry::{ComponentDefinition, ComponentLibrary, default_chakra_library};
pub use renderer::{
    BatchInput, BatchResult, HeadingEntry, Options, RenderResult, render_batch, to_elements,
};
