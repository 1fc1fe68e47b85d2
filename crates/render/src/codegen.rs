//! JSX code generation for rendered element trees.
//!
//! Turns the output of a renderer table into JSX text, and into a complete
//! ES module that imports the component library primitives it uses.

use crate::registry::{ComponentLibrary, default_chakra_library};
use chakra_markdown_core::{Child, Element, Primitive, PropValue, Tag};
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

/// Converts a Rust string to a JavaScript string literal.
///
/// Uses JSON serialization to properly escape special characters.
///
/// # Examples
///
/// ```
/// use chakra_markdown_render::codegen::js_string_literal;
///
/// assert_eq!(js_string_literal("hello"), "\"hello\"");
/// assert_eq!(js_string_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
/// ```
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Escapes JSX text content: HTML-significant characters become entities
/// and braces are neutralized so they are not read as expressions.
pub(crate) fn escape_jsx_text(s: &str) -> String {
    let encoded = html_escape::encode_text(s);
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

fn emit_props(element: &Element, out: &mut String) {
    for (key, value) in &element.props {
        out.push(' ');
        out.push_str(key);
        match value {
            PropValue::Literal { value } => {
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
            PropValue::Expression { value } => {
                out.push_str("={");
                out.push_str(value);
                out.push('}');
            }
        }
    }
}

fn emit_child(child: &Child, out: &mut String) {
    match child {
        Child::Element(element) => emit_element(element, out),
        // JSX collapses whitespace around line breaks; keep multi-line text
        // verbatim as a string expression.
        Child::Text(text) if text.contains('\n') => {
            out.push('{');
            out.push_str(&js_string_literal(text));
            out.push('}');
        }
        Child::Text(text) => out.push_str(&escape_jsx_text(text)),
    }
}

fn emit_element(element: &Element, out: &mut String) {
    let name = element.tag.name();
    out.push('<');
    out.push_str(name);
    emit_props(element, out);

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        emit_child(child, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Renders an element forest as JSX, one top-level child per line.
///
/// # Examples
///
/// ```
/// use chakra_markdown_core::{Child, Element, Primitive};
/// use chakra_markdown_render::codegen::to_jsx;
///
/// let hr = Child::Element(Element::component(Primitive::Divider));
/// assert_eq!(to_jsx(&[hr]), "<Divider />");
/// ```
pub fn to_jsx(children: &[Child]) -> String {
    let mut lines = Vec::with_capacity(children.len());
    for child in children {
        let mut line = String::new();
        emit_child(child, &mut line);
        lines.push(line);
    }
    lines.join("\n")
}

fn collect_components(children: &[Child], primitives: &mut Vec<Primitive>) {
    for child in children {
        if let Child::Element(element) = child {
            if let Tag::Component(primitive) = &element.tag
                && !primitives.contains(primitive)
            {
                primitives.push(*primitive);
            }
            collect_components(&element.children, primitives);
        }
    }
}

/// Names of every library component used in the forest, sorted.
pub fn used_components(children: &[Child]) -> Vec<&'static str> {
    let mut primitives = Vec::new();
    collect_components(children, &mut primitives);
    let mut names: Vec<&'static str> = primitives.into_iter().map(Primitive::as_str).collect();
    names.sort_unstable();
    names
}

/// Options for module generation.
#[derive(Debug, Clone)]
pub struct ModuleOptions<'a> {
    /// Library the imports resolve against.
    pub library: &'a ComponentLibrary,
    /// Name of the exported component.
    pub component_name: &'a str,
}

/// Emits one import statement per module: named imports grouped, default
/// imports on their own line.
fn emit_imports(code: &mut String, names: &[&str], library: &ComponentLibrary) {
    let mut named: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for name in names {
        match library.get_component(name) {
            Some(def) if def.is_default_export() => {
                let _ = writeln!(
                    code,
                    "import {} from {};",
                    name,
                    js_string_literal(&def.module_path)
                );
            }
            Some(def) => named.entry(def.module_path.as_str()).or_default().push(name),
            None => {
                log::warn!("Component {} is not registered; no import emitted", name);
            }
        }
    }

    for (module, names) in named {
        let _ = writeln!(
            code,
            "import {{ {} }} from {};",
            names.join(", "),
            js_string_literal(module)
        );
    }
}

/// Generates an ES module exporting a component that renders the forest.
pub fn generate_module(children: &[Child], options: &ModuleOptions<'_>) -> String {
    let mut code = String::new();
    emit_imports(&mut code, &used_components(children), options.library);
    if !code.is_empty() {
        code.push('\n');
    }

    let _ = writeln!(
        code,
        "export default function {}() {{",
        options.component_name
    );
    let _ = writeln!(code, "  return (");
    let _ = writeln!(code, "    <>");
    for line in to_jsx(children).lines() {
        let _ = writeln!(code, "      {}", line);
    }
    let _ = writeln!(code, "    </>");
    let _ = writeln!(code, "  );");
    let _ = writeln!(code, "}}");
    code
}

/// Generates a module against the default Chakra UI library.
pub fn generate_chakra_module(children: &[Child]) -> String {
    let library = default_chakra_library();
    generate_module(
        children,
        &ModuleOptions {
            library: &library,
            component_name: "MarkdownContent",
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ComponentDefinition;
    use crate::renderer::{Options, to_elements};
    use chakra_markdown_core::{Components, build};
    use once_cell::sync::Lazy;

    static TABLE: Lazy<Components> = Lazy::new(|| build(None, true));

    fn render(input: &str) -> Vec<Child> {
        to_elements(input, &TABLE, &Options::default())
            .unwrap()
            .children
    }

    fn jsx(input: &str) -> String {
        to_jsx(&render(input))
    }

    #[test]
    fn test_js_string_literal() {
        assert_eq!(js_string_literal("hello"), "\"hello\"");
        assert_eq!(js_string_literal("line1\nline2"), "\"line1\\nline2\"");
        assert_eq!(js_string_literal("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn test_escape_jsx_text() {
        assert_eq!(escape_jsx_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_jsx_text("{x}"), "&#123;x&#125;");
        assert_eq!(escape_jsx_text("中文"), "中文");
    }

    #[test]
    fn test_paragraph_jsx() {
        insta::assert_snapshot!(jsx("Hello *world*"), @r#"<Text mb={2}>Hello <Text as="em">world</Text></Text>"#);
    }

    #[test]
    fn test_heading_and_divider_jsx() {
        insta::assert_snapshot!(jsx("## Title\n\n---"), @r#"
        <Heading as="h2">Title</Heading>
        <Divider />
        "#);
    }

    #[test]
    fn test_task_list_jsx() {
        insta::assert_snapshot!(jsx("- [x] done\n- todo"), @r#"<UnorderedList pl={4} spacing={2} styleType="disc"><ListItem listStyleType="none"><Checkbox isChecked={true} isReadOnly={true}>done</Checkbox></ListItem><ListItem listStyleType="inherit">todo</ListItem></UnorderedList>"#);
    }

    #[test]
    fn test_block_code_keeps_newlines() {
        insta::assert_snapshot!(jsx("```js\nlet a = {};\n```"), @r#"<pre><Code className="language-js" display="block" p={2} w="full" whiteSpace="break-spaces">{"let a = {};\n"}</Code></pre>"#);
    }

    #[test]
    fn test_attribute_escaping() {
        let out = jsx(r#"[x](https://example.com/?a=1&b=2 "say \"hi\"")"#);
        assert!(out.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
        assert!(out.contains(r#"title="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_used_components_sorted_and_unique() {
        let children = render("# A\n\nText *em*\n\n- one\n- two");
        assert_eq!(
            used_components(&children),
            vec!["Heading", "ListItem", "Text", "UnorderedList"]
        );
    }

    #[test]
    fn test_generate_chakra_module() {
        insta::assert_snapshot!(generate_chakra_module(&render("# Hi\n\n---")), @r#"
        import { Divider, Heading } from "@chakra-ui/react";

        export default function MarkdownContent() {
          return (
            <>
              <Heading as="h1">Hi</Heading>
              <Divider />
            </>
          );
        }
        "#);
    }

    #[test]
    fn test_generate_module_with_default_export_override() {
        let mut library = default_chakra_library();
        library.register(ComponentDefinition {
            name: "Code".to_string(),
            module_path: "./Code".to_string(),
            export_type: "default".to_string(),
        });
        let children = vec![Child::Element(
            Element::component(Primitive::Text).child(Element::component(Primitive::Code)),
        )];

        let code = generate_module(
            &children,
            &ModuleOptions {
                library: &library,
                component_name: "Doc",
            },
        );
        assert!(code.starts_with("import Code from \"./Code\";\nimport { Text } from \"@chakra-ui/react\";\n"));
        assert!(code.contains("export default function Doc() {"));
        assert!(code.contains("      <Text><Code /></Text>\n"));
    }

    #[test]
    fn test_intrinsic_only_module_has_no_imports() {
        let children = vec![Child::Element(Element::intrinsic("strong").child(Child::text("b")))];
        let code = generate_chakra_module(&children);
        assert!(code.starts_with("export default function MarkdownContent() {"));
        assert!(code.contains("<strong>b</strong>"));
    }
}
