//! Default component library configuration.

use super::types::{ComponentDefinition, ComponentLibrary};
use chakra_markdown_core::Primitive;

/// Module the Chakra UI primitives are imported from.
pub const CHAKRA_MODULE: &str = "@chakra-ui/react";

/// Creates the default Chakra UI library: every primitive the default
/// renderers use, as named exports of `@chakra-ui/react`.
///
/// # Example
///
/// ```
/// use chakra_markdown_render::registry::defaults::default_chakra_library;
///
/// let library = default_chakra_library();
/// assert_eq!(library.get_component_module("Heading"), Some("@chakra-ui/react"));
/// ```
pub fn default_chakra_library() -> ComponentLibrary {
    ComponentLibrary {
        components: Primitive::ALL
            .iter()
            .map(|primitive| ComponentDefinition {
                name: primitive.as_str().to_string(),
                module_path: CHAKRA_MODULE.to_string(),
                export_type: "named".to_string(),
            })
            .collect(),
    }
}
