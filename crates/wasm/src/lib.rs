use chakra_markdown_core::{ChakraMarkdownError, Components, NodeKind, build};
use chakra_markdown_render::{Options, RenderResult, generate_chakra_module, to_elements, to_jsx};
use serde::Serialize;
use std::str::FromStr;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Render Config
// ============================================================================

/// Configuration accepted by the WASM render functions.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    #[serde(default, alias = "sourcePositions")]
    pub source_positions: Option<bool>,
    #[serde(default, alias = "wrapText")]
    pub wrap_text: Option<bool>,
    #[serde(default)]
    pub gfm: Option<bool>,
    /// Node kind keys whose default renderer is removed.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Absent config means defaults; a malformed one is rejected rather than
/// silently replaced.
fn parse_config(config: JsValue) -> Result<WasmRenderConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmRenderConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

fn build_options(cfg: &WasmRenderConfig) -> Options {
    let defaults = Options::default();
    Options {
        source_positions: cfg.source_positions.unwrap_or(defaults.source_positions),
        wrap_text: cfg.wrap_text.unwrap_or(defaults.wrap_text),
        gfm: cfg.gfm.unwrap_or(defaults.gfm),
    }
}

/// Builds the default table with the disabled slots emptied.
fn build_components(cfg: &WasmRenderConfig) -> Result<Components, ChakraMarkdownError> {
    let mut components = build(None, true);
    for key in &cfg.disabled {
        components.remove(NodeKind::from_str(key)?);
    }
    Ok(components)
}

fn render_with(markdown: &str, cfg: &WasmRenderConfig) -> Result<RenderResult, JsError> {
    build_components(cfg)
        .and_then(|components| to_elements(markdown, &components, &build_options(cfg)))
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Render API
// ============================================================================

/// Renders Markdown into an element tree.
///
/// # Returns
///
/// A `{ children, headings }` object. Elements serialize as
/// `{ type: "component" | "intrinsic", name, props, children }`; text
/// children are plain strings.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { render } from './chakra_markdown_wasm';
///
/// const { children } = render("# Hello", { sourcePositions: true });
/// // children[0] = {
/// //   type: "component",
/// //   name: "Heading",
/// //   props: { as: { type: "literal", value: "h1" }, "data-sourcepos": ... },
/// //   children: ["Hello"]
/// // }
/// ```
#[wasm_bindgen]
pub fn render(markdown: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config)?;
    let result = render_with(markdown, &cfg)?;
    // Plain objects rather than Maps for props.
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders Markdown into JSX text.
#[wasm_bindgen(js_name = renderJsx)]
pub fn render_jsx(markdown: &str, config: JsValue) -> Result<String, JsError> {
    let cfg = parse_config(config)?;
    let result = render_with(markdown, &cfg)?;
    Ok(to_jsx(&result.children))
}

/// Renders Markdown into an ES module whose default export is a
/// `MarkdownContent` component built from `@chakra-ui/react` primitives.
#[wasm_bindgen(js_name = renderModule)]
pub fn render_module(markdown: &str, config: JsValue) -> Result<String, JsError> {
    let cfg = parse_config(config)?;
    let result = render_with(markdown, &cfg)?;
    Ok(generate_chakra_module(&result.children))
}

/// Lists every node kind key of the renderer table.
#[wasm_bindgen(js_name = nodeKinds)]
pub fn node_kinds() -> js_sys::Array {
    NodeKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.as_str()))
        .collect()
}
