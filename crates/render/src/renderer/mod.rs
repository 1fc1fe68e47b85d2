//! mdast walker that drives a renderer table.
//!
//! Parses Markdown with markdown-rs, converts each node into its typed props,
//! and dispatches to the installed renderer for its slot. Empty slots render
//! the intrinsic HTML element instead.
//!
//! # Module Structure
//!
//! - `types` - Result types (RenderResult, HeadingEntry, Scope)
//! - `context` - Traversal state
//! - `render` - AST node rendering functions

mod context;
pub mod render;
mod types;

pub use context::{Context, format_position};
pub use types::{HeadingEntry, LinkDefinition, RenderResult, Scope};

use crate::parse::{ParseOptions, parse_mdast};
use chakra_markdown_core::{ChakraMarkdownError, Components};
use rayon::prelude::*;
use render::{collect_definitions, render_node};

/// Rendering options for the walker.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Options {
    /// Attach `data-sourcepos` tokens to nodes that forward them.
    #[serde(default)]
    pub source_positions: bool,
    /// Route text nodes through the `text` slot instead of emitting them
    /// as bare strings.
    #[serde(default)]
    pub wrap_text: bool,
    /// Enable GitHub Flavored Markdown (tables, task lists, strikethrough).
    #[serde(default = "default_gfm")]
    pub gfm: bool,
}

fn default_gfm() -> bool {
    true
}

impl Options {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            gfm: self.gfm,
            ..ParseOptions::markdown()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source_positions: false,
            wrap_text: false,
            gfm: default_gfm(),
        }
    }
}

/// Renders Markdown input through a renderer table (entry point).
///
/// # Examples
///
/// ```
/// use chakra_markdown_core::{Primitive, build};
/// use chakra_markdown_render::renderer::{Options, to_elements};
///
/// let table = build(None, true);
/// let result = to_elements("# Hello", &table, &Options::default()).unwrap();
/// let heading = result.children[0].as_element().unwrap();
/// assert_eq!(heading.primitive(), Some(Primitive::Heading));
/// ```
pub fn to_elements(
    input: &str,
    components: &Components,
    options: &Options,
) -> Result<RenderResult, ChakraMarkdownError> {
    let tree = parse_mdast(input, &options.parse_options())?;

    let mut ctx = Context::new(components, options);
    collect_definitions(&tree, &mut ctx);
    let children = render_node(&tree, &mut ctx);
    Ok(ctx.finish(children))
}

/// Input for batch rendering.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// Markdown source.
    pub source: String,
}

/// Result for a single document in a batch.
#[derive(Debug)]
pub struct BatchResult {
    /// Identifier matching the input.
    pub id: String,
    /// Rendering outcome.
    pub result: Result<RenderResult, ChakraMarkdownError>,
}

/// Renders many documents in parallel, sharing one table.
///
/// Results keep the input order.
pub fn render_batch(
    inputs: &[BatchInput],
    components: &Components,
    options: &Options,
) -> Vec<BatchResult> {
    log::debug!("rendering batch of {} documents", inputs.len());
    inputs
        .par_iter()
        .map(|input| BatchResult {
            id: input.id.clone(),
            result: to_elements(&input.source, components, options),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chakra_markdown_core::{
        Child, CodeProps, Element, NodeKind, Primitive, Renderer, SOURCE_POSITION_ATTR, build,
        plain_text,
    };

    fn render(input: &str) -> RenderResult {
        to_elements(input, &build(None, true), &Options::default()).unwrap()
    }

    fn first(result: &RenderResult) -> &Element {
        result.children[0].as_element().unwrap()
    }

    #[test]
    fn test_paragraph() {
        let result = render("This is a paragraph.");
        assert_eq!(result.children.len(), 1);
        let p = first(&result);
        assert_eq!(p.primitive(), Some(Primitive::Text));
        assert_eq!(p.prop_value("mb"), Some("2"));
        assert_eq!(p.children, vec![Child::text("This is a paragraph.")]);
    }

    #[test]
    fn test_headings_by_level() {
        let result = render("# One\n\n## Two\n\n###### Six");
        let levels: Vec<_> = result
            .children
            .iter()
            .filter_map(Child::as_element)
            .map(|h| h.prop_value("as").unwrap().to_string())
            .collect();
        assert_eq!(levels, vec!["h1", "h2", "h6"]);

        assert_eq!(result.headings.len(), 3);
        assert_eq!(result.headings[0].depth, 1);
        assert_eq!(result.headings[0].text, "One");
        assert_eq!(result.headings[2].depth, 6);
    }

    #[test]
    fn test_inline_and_block_code() {
        let result = render("Use `cargo`.\n\n```rust\nfn main() {}\n```");

        let p = first(&result);
        let inline = p.children[1].as_element().unwrap();
        assert_eq!(inline.primitive(), Some(Primitive::Code));
        assert_eq!(inline.children, vec![Child::text("cargo")]);
        assert!(!inline.props.contains_key("display"));

        let pre = result.children[1].as_element().unwrap();
        assert_eq!(pre.tag.name(), "pre");
        let block = pre.children[0].as_element().unwrap();
        assert_eq!(block.prop_value("className"), Some("language-rust"));
        assert_eq!(block.prop_value("display"), Some("block"));
        assert_eq!(plain_text(&block.children), "fn main() {}\n");
    }

    #[test]
    fn test_task_list() {
        let result = render("- [ ] Unchecked task\n- [x] Checked task\n- Plain\n");
        let list = first(&result);
        assert_eq!(list.primitive(), Some(Primitive::UnorderedList));

        let items: Vec<&Element> = list.children.iter().filter_map(Child::as_element).collect();
        assert_eq!(items.len(), 3);

        let unchecked = items[0].children[0].as_element().unwrap();
        assert_eq!(unchecked.primitive(), Some(Primitive::Checkbox));
        assert_eq!(unchecked.prop_value("isChecked"), Some("false"));
        assert_eq!(plain_text(&unchecked.children), "Unchecked task");

        let checked = items[1].children[0].as_element().unwrap();
        assert_eq!(checked.prop_value("isChecked"), Some("true"));

        assert_eq!(items[2].prop_value("listStyleType"), Some("inherit"));
        assert_eq!(items[2].children, vec![Child::text("Plain")]);
    }

    #[test]
    fn test_loose_list_keeps_paragraphs() {
        let result = render("1. First\n\n2. Second\n");
        let list = first(&result);
        assert_eq!(list.primitive(), Some(Primitive::OrderedList));
        let item = list.children[0].as_element().unwrap();
        let p = item.children[0].as_element().unwrap();
        assert_eq!(p.primitive(), Some(Primitive::Text));
        assert_eq!(p.prop_value("mb"), Some("2"));
    }

    #[test]
    fn test_blockquote_in_tight_list_keeps_paragraph() {
        let result = render("- > quoted\n");
        let item = first(&result).children[0].as_element().unwrap();
        let quote = item.children[0].as_element().unwrap();
        assert_eq!(quote.prop_value("as"), Some("blockquote"));
        let p = quote.children[0].as_element().unwrap();
        assert_eq!(p.prop_value("mb"), Some("2"));
    }

    #[test]
    fn test_table() {
        let input = "| Name | Age |\n| :--- | ---: |\n| Alice | 30 |\n| Bob | 25 |";
        let result = render(input);
        let table = first(&result);
        assert_eq!(table.primitive(), Some(Primitive::Table));

        let thead = table.children[0].as_element().unwrap();
        let tbody = table.children[1].as_element().unwrap();
        assert_eq!(thead.primitive(), Some(Primitive::Thead));
        assert_eq!(tbody.primitive(), Some(Primitive::Tbody));
        assert_eq!(tbody.children.len(), 2);

        let header_row = thead.children[0].as_element().unwrap();
        let th = header_row.children[0].as_element().unwrap();
        assert_eq!(th.primitive(), Some(Primitive::Th));
        assert_eq!(plain_text(&th.children), "Name");

        let body_row = tbody.children[1].as_element().unwrap();
        let td = body_row.children[1].as_element().unwrap();
        assert_eq!(td.primitive(), Some(Primitive::Td));
        assert_eq!(plain_text(&td.children), "25");
    }

    #[test]
    fn test_links_images_and_rules() {
        let result = render("[Rust](https://www.rust-lang.org/ \"Home\") ![Logo](logo.png)\n\n---");
        let p = first(&result);
        let link = p.children[0].as_element().unwrap();
        assert_eq!(link.primitive(), Some(Primitive::Link));
        assert_eq!(link.prop_value("href"), Some("https://www.rust-lang.org/"));
        assert_eq!(link.prop_value("title"), Some("Home"));

        let image = p.children[2].as_element().unwrap();
        assert_eq!(image.primitive(), Some(Primitive::Image));
        assert_eq!(image.prop_value("alt"), Some("Logo"));

        let hr = result.children[1].as_element().unwrap();
        assert_eq!(hr.primitive(), Some(Primitive::Divider));
    }

    #[test]
    fn test_reference_links_and_images() {
        let input = "See [the docs][d] and ![logo][l].\n\n[d]: https://x.test \"Docs\"\n[l]: logo.png\n";
        let result = render(input);
        assert_eq!(result.children.len(), 1);

        let p = first(&result);
        assert_eq!(plain_text(&p.children), "See the docs and .");

        let link = p.children[1].as_element().unwrap();
        assert_eq!(link.primitive(), Some(Primitive::Link));
        assert_eq!(link.prop_value("href"), Some("https://x.test"));
        assert_eq!(link.prop_value("title"), Some("Docs"));
        assert_eq!(plain_text(&link.children), "the docs");

        let image = p.children[3].as_element().unwrap();
        assert_eq!(image.primitive(), Some(Primitive::Image));
        assert_eq!(image.prop_value("src"), Some("logo.png"));
        assert_eq!(image.prop_value("alt"), Some("logo"));
    }

    #[test]
    fn test_definition_inside_blockquote_resolves() {
        let result = render("[home]\n\n> [home]: https://home.test\n");
        let link = first(&result).children[0].as_element().unwrap();
        assert_eq!(link.prop_value("href"), Some("https://home.test"));
    }

    #[test]
    fn test_unresolved_reference_keeps_source_text() {
        use markdown::mdast::{self, Node, ReferenceKind};

        let table = build(None, true);
        let options = Options::default();
        let mut ctx = Context::new(&table, &options);

        let link = Node::LinkReference(mdast::LinkReference {
            children: vec![Node::Text(mdast::Text {
                value: "x".to_string(),
                position: None,
            })],
            position: None,
            reference_kind: ReferenceKind::Full,
            identifier: "missing".to_string(),
            label: Some("Missing".to_string()),
        });
        let out = render::render_node(&link, &mut ctx);
        assert_eq!(plain_text(&out), "[x][Missing]");

        let image = Node::ImageReference(mdast::ImageReference {
            alt: "pic".to_string(),
            position: None,
            reference_kind: ReferenceKind::Shortcut,
            identifier: "pic".to_string(),
            label: Some("pic".to_string()),
        });
        let out = render::render_node(&image, &mut ctx);
        assert_eq!(out, vec![Child::text("![pic]")]);
    }

    #[test]
    fn test_footnotes_render_reference_and_section() {
        let result = render("Claim[^1].\n\n[^1]: Source text.\n");
        assert_eq!(result.children.len(), 2);

        let p = first(&result);
        let sup = p.children[1].as_element().unwrap();
        assert_eq!(sup.tag.name(), "sup");
        let anchor = sup.children[0].as_element().unwrap();
        assert_eq!(anchor.prop_value("href"), Some("#user-content-fn-1"));
        assert_eq!(anchor.prop_value("id"), Some("user-content-fnref-1"));
        assert_eq!(plain_text(&p.children), "Claim1.");

        let section = result.children[1].as_element().unwrap();
        assert_eq!(section.tag.name(), "section");
        assert_eq!(section.prop_value("className"), Some("footnotes"));
        let list = section.children[1].as_element().unwrap();
        assert_eq!(list.tag.name(), "ol");
        let item = list.children[0].as_element().unwrap();
        assert_eq!(item.prop_value("id"), Some("user-content-fn-1"));
        let body = item.children[0].as_element().unwrap();
        assert_eq!(body.primitive(), Some(Primitive::Text));
        assert_eq!(plain_text(&body.children), "Source text.");
    }

    #[test]
    fn test_footnotes_follow_first_reference_order() {
        let result = render("A[^b] B[^a] C[^b]\n\n[^a]: first\n\n[^b]: second\n");

        let p = first(&result);
        let ids: Vec<String> = p
            .children
            .iter()
            .filter_map(Child::as_element)
            .map(|sup| {
                let anchor = sup.children[0].as_element().unwrap();
                format!(
                    "{}={}",
                    anchor.prop_value("id").unwrap(),
                    plain_text(&anchor.children)
                )
            })
            .collect();
        assert_eq!(
            ids,
            vec![
                "user-content-fnref-b=1",
                "user-content-fnref-a=2",
                "user-content-fnref-b-2=1"
            ]
        );

        let section = result.children[1].as_element().unwrap();
        let list = section.children[1].as_element().unwrap();
        let order: Vec<&str> = list
            .children
            .iter()
            .filter_map(Child::as_element)
            .filter_map(|li| li.prop_value("id"))
            .collect();
        assert_eq!(order, vec!["user-content-fn-b", "user-content-fn-a"]);
    }

    #[test]
    fn test_strong_and_strikethrough() {
        let result = render("**bold** and ~~gone~~");
        let p = first(&result);
        let strong = p.children[0].as_element().unwrap();
        assert_eq!(strong.tag.name(), "strong");
        assert_eq!(strong.primitive(), None);

        let del = p.children[2].as_element().unwrap();
        assert_eq!(del.prop_value("as"), Some("del"));
    }

    #[test]
    fn test_source_positions_opt_in() {
        let options = Options {
            source_positions: true,
            ..Default::default()
        };
        let result = to_elements("# Title\n\n- a\n", &build(None, true), &options).unwrap();

        let heading = first(&result);
        assert_eq!(heading.prop_value(SOURCE_POSITION_ATTR), Some("1:1-1:8"));

        let list = result.children[1].as_element().unwrap();
        assert_eq!(list.prop_value(SOURCE_POSITION_ATTR), Some("3:1-3:4"));

        // Paragraphs do not forward positions.
        let result = to_elements("text", &build(None, true), &options).unwrap();
        assert!(!first(&result).props.contains_key(SOURCE_POSITION_ATTR));
    }

    #[test]
    fn test_wrap_text_uses_text_slot() {
        let options = Options {
            wrap_text: true,
            ..Default::default()
        };
        let result = to_elements("hello", &build(None, true), &options).unwrap();
        let span = first(&result).children[0].as_element().unwrap();
        assert_eq!(span.primitive(), Some(Primitive::Text));
        assert_eq!(span.prop_value("as"), Some("span"));
    }

    #[test]
    fn test_custom_code_renderer() {
        let overrides = chakra_markdown_core::Components {
            code: Some(Renderer::new(|props: &CodeProps| {
                Element::intrinsic("kbd").children(props.core.children.clone())
            })),
            ..chakra_markdown_core::Components::empty()
        };
        let table = build(Some(overrides), true);
        let result = to_elements("Press `q`", &table, &Options::default()).unwrap();

        let p = first(&result);
        assert_eq!(p.primitive(), Some(Primitive::Text));
        let kbd = p.children[1].as_element().unwrap();
        assert_eq!(kbd.tag.name(), "kbd");
    }

    #[test]
    fn test_unmerged_table_falls_back_to_intrinsic() {
        let table = build(Some(chakra_markdown_core::Components::empty()), false);
        let result = to_elements("# Hi\n\ntext", &table, &Options::default()).unwrap();
        assert_eq!(first(&result).tag.name(), "h1");
        assert_eq!(result.children[1].as_element().unwrap().tag.name(), "p");
    }

    #[test]
    fn test_removed_slot_falls_back() {
        let mut table = build(None, true);
        table.remove(NodeKind::ThematicBreak);
        let result = to_elements("---", &table, &Options::default()).unwrap();
        assert_eq!(first(&result).tag.name(), "hr");
    }

    #[test]
    fn test_frontmatter_is_ignored() {
        let result = render("---\ntitle: Doc\n---\n\nBody");
        assert_eq!(result.children.len(), 1);
        assert_eq!(plain_text(&result.children), "Body");
    }

    #[test]
    fn test_raw_html_kept_as_text() {
        let result = render("<div>hi</div>");
        assert_eq!(result.children, vec![Child::text("<div>hi</div>")]);
    }

    #[test]
    fn test_gfm_disabled() {
        let options = Options {
            gfm: false,
            ..Default::default()
        };
        let result = to_elements("~~x~~", &build(None, true), &options).unwrap();
        assert_eq!(plain_text(&result.children), "~~x~~");
    }

    #[test]
    fn test_render_batch_keeps_order() {
        let inputs: Vec<BatchInput> = (0..8)
            .map(|i| BatchInput {
                id: format!("doc-{}.md", i),
                source: format!("# Doc {}", i),
            })
            .collect();
        let table = build(None, true);

        let results = render_batch(&inputs, &table, &Options::default());
        assert_eq!(results.len(), 8);
        for (i, batch) in results.iter().enumerate() {
            assert_eq!(batch.id, format!("doc-{}.md", i));
            let rendered = batch.result.as_ref().unwrap();
            assert_eq!(rendered.headings[0].text, format!("Doc {}", i));
        }
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: Options = serde_json::from_str(r#"{"source_positions": true}"#).unwrap();
        assert!(options.source_positions);
        assert!(!options.wrap_text);
        assert!(options.gfm);
    }
}
