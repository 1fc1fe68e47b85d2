//! Registry type definitions for component library imports.

use serde::{Deserialize, Serialize};

/// Where the components referenced by rendered elements are imported from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLibrary {
    /// Available components.
    pub components: Vec<ComponentDefinition>,
}

/// A single component definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Component name (e.g., "Heading", "UnorderedList").
    pub name: String,
    /// Module path for import (e.g., "@chakra-ui/react").
    pub module_path: String,
    /// Export type: "named" or "default".
    pub export_type: String,
}

impl ComponentDefinition {
    /// Whether the component is the module's default export.
    pub fn is_default_export(&self) -> bool {
        self.export_type == "default"
    }
}

impl ComponentLibrary {
    /// Check if a component is known to the library.
    pub fn is_supported_component(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.name == name)
    }

    /// Get the module path for a component.
    pub fn get_component_module(&self, name: &str) -> Option<&str> {
        self.get_component(name).map(|c| c.module_path.as_str())
    }

    /// Get the full definition for a component.
    pub fn get_component(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Replaces or adds a component definition.
    pub fn register(&mut self, definition: ComponentDefinition) {
        match self
            .components
            .iter_mut()
            .find(|c| c.name == definition.name)
        {
            Some(existing) => *existing = definition,
            None => self.components.push(definition),
        }
    }
}
