/// Default library definitions.
pub mod defaults;
/// Registry types.
pub mod types;

pub use defaults::{CHAKRA_MODULE, default_chakra_library};
pub use types::{ComponentDefinition, ComponentLibrary};
