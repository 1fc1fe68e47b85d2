//! Rendering context for the mdast walker.

use super::Options;
use super::types::{HeadingEntry, LinkDefinition, RenderResult, Scope};
use chakra_markdown_core::{Child, Components, Element, NodeProps, PropValue};
use markdown::unist::Position;
use std::collections::HashMap;

/// State carried through a single traversal.
///
/// Borrows the renderer table; the table itself is never mutated.
pub struct Context<'a> {
    components: &'a Components,
    options: &'a Options,
    /// Enclosing block scopes, innermost last.
    scopes: Vec<Scope>,
    headings: Vec<HeadingEntry>,
    /// Link reference definitions keyed by normalized identifier.
    definitions: HashMap<String, LinkDefinition>,
    /// Footnote identifiers in order of first reference.
    footnote_order: Vec<String>,
    /// Reference count per footnote identifier.
    footnote_refs: HashMap<String, usize>,
    /// Rendered footnote definitions, in document order until `finish`.
    footnotes: Vec<(String, Vec<Child>)>,
}

impl<'a> Context<'a> {
    /// Creates a context over a renderer table.
    pub fn new(components: &'a Components, options: &'a Options) -> Self {
        Self {
            components,
            options,
            scopes: Vec::new(),
            headings: Vec::new(),
            definitions: HashMap::new(),
            footnote_order: Vec::new(),
            footnote_refs: HashMap::new(),
            footnotes: Vec::new(),
        }
    }

    /// Registers a link reference definition. The first definition of an
    /// identifier wins.
    pub fn define(&mut self, identifier: &str, definition: LinkDefinition) {
        self.definitions
            .entry(identifier.to_string())
            .or_insert(definition);
    }

    /// Looks up a link reference definition.
    pub fn definition(&self, identifier: &str) -> Option<&LinkDefinition> {
        self.definitions.get(identifier)
    }

    /// Records a reference to a footnote and returns its ordinal (1-based,
    /// by first reference) and how many times it has been referenced so far.
    pub fn reference_footnote(&mut self, identifier: &str) -> (usize, usize) {
        let ordinal = match self.footnote_order.iter().position(|id| id == identifier) {
            Some(index) => index + 1,
            None => {
                self.footnote_order.push(identifier.to_string());
                self.footnote_order.len()
            }
        };
        let count = self.footnote_refs.entry(identifier.to_string()).or_insert(0);
        *count += 1;
        (ordinal, *count)
    }

    /// Stores a rendered footnote definition for the trailing section.
    pub fn push_footnote(&mut self, identifier: &str, children: Vec<Child>) {
        self.footnotes.push((identifier.to_string(), children));
    }

    /// Dispatches props to the table and wraps the result as a child.
    pub fn emit(&self, props: NodeProps) -> Child {
        Child::Element(self.components.render(props))
    }

    /// Whether text nodes go through the `text` slot.
    pub fn wrap_text(&self) -> bool {
        self.options.wrap_text
    }

    /// Formats a node position as a source-position token, when enabled.
    pub fn source_position(&self, position: Option<&Position>) -> Option<String> {
        if !self.options.source_positions {
            return None;
        }
        position.map(format_position)
    }

    /// Enters a block scope.
    pub fn enter(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    /// Leaves the innermost block scope.
    pub fn exit(&mut self) {
        self.scopes.pop();
    }

    /// True directly inside an item of a tight list.
    pub fn in_tight_list(&self) -> bool {
        matches!(self.scopes.last(), Some(Scope::List { loose: false }))
    }

    /// Records a heading for the outline.
    pub fn push_heading(&mut self, depth: u8, text: String) {
        self.headings.push(HeadingEntry { depth, text });
    }

    /// Finishes the traversal, appending a single footnotes section when
    /// any footnote definitions were collected.
    pub fn finish(self, mut children: Vec<Child>) -> RenderResult {
        if !self.footnotes.is_empty() {
            // List definitions in first-reference order, unreferenced last.
            let order = self.footnote_order;
            let mut footnotes = self.footnotes;
            footnotes.sort_by_key(|(id, _)| {
                order.iter().position(|o| o == id).unwrap_or(usize::MAX)
            });
            let items = footnotes.into_iter().map(|(id, content)| {
                Child::Element(
                    Element::intrinsic("li")
                        .attr("id", format!("user-content-fn-{}", footnote_slug(&id)))
                        .children(content),
                )
            });
            let section = Element::intrinsic("section")
                .prop("data-footnotes", PropValue::boolean(true))
                .attr("className", "footnotes")
                .child(
                    Element::intrinsic("h2")
                        .attr("className", "sr-only")
                        .attr("id", "footnote-label")
                        .child(Child::text("Footnotes")),
                )
                .child(Element::intrinsic("ol").children(items));
            children.push(Child::Element(section));
        }

        RenderResult {
            children,
            headings: self.headings,
        }
    }

    /// Renders an intrinsic element that has no slot in the table.
    pub fn intrinsic(&self, name: &str, position: Option<&Position>, children: Vec<Child>) -> Child {
        let mut element = Element::intrinsic(name);
        if let Some(token) = self.source_position(position) {
            element = element.attr(chakra_markdown_core::SOURCE_POSITION_ATTR, token);
        }
        Child::Element(element.children(children))
    }
}

/// Makes a footnote identifier safe for use in an element id.
pub fn footnote_slug(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Formats a position as `startLine:startCol-endLine:endCol`.
pub fn format_position(position: &Position) -> String {
    format!(
        "{}:{}-{}:{}",
        position.start.line, position.start.column, position.end.line, position.end.column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown::unist::Point;

    #[test]
    fn test_format_position() {
        let position = Position {
            start: Point {
                line: 1,
                column: 1,
                offset: 0,
            },
            end: Point {
                line: 2,
                column: 4,
                offset: 10,
            },
        };
        assert_eq!(format_position(&position), "1:1-2:4");
    }

    #[test]
    fn test_list_tightness_stack() {
        let components = Components::empty();
        let options = Options::default();
        let mut ctx = Context::new(&components, &options);

        assert!(!ctx.in_tight_list());
        ctx.enter(Scope::List { loose: true });
        assert!(!ctx.in_tight_list());
        ctx.enter(Scope::List { loose: false });
        assert!(ctx.in_tight_list());
        ctx.enter(Scope::Blockquote);
        assert!(!ctx.in_tight_list());
        ctx.exit();
        ctx.exit();
        assert!(!ctx.in_tight_list());
    }

    #[test]
    fn test_footnote_ordinals_follow_first_reference() {
        let components = Components::empty();
        let options = Options::default();
        let mut ctx = Context::new(&components, &options);

        assert_eq!(ctx.reference_footnote("b"), (1, 1));
        assert_eq!(ctx.reference_footnote("a"), (2, 1));
        assert_eq!(ctx.reference_footnote("b"), (1, 2));
    }

    #[test]
    fn test_first_definition_wins() {
        let components = Components::empty();
        let options = Options::default();
        let mut ctx = Context::new(&components, &options);

        let first = LinkDefinition {
            url: "https://a.test".to_string(),
            title: None,
        };
        ctx.define("x", first.clone());
        ctx.define(
            "x",
            LinkDefinition {
                url: "https://b.test".to_string(),
                title: None,
            },
        );
        assert_eq!(ctx.definition("x"), Some(&first));
        assert_eq!(ctx.definition("y"), None);
    }

    #[test]
    fn test_footnote_slug() {
        assert_eq!(footnote_slug("Note 1"), "note-1");
        assert_eq!(footnote_slug("a_b"), "a_b");
    }

    #[test]
    fn test_positions_disabled_by_default() {
        let components = Components::empty();
        let options = Options::default();
        let ctx = Context::new(&components, &options);
        let position = Position::new(1, 1, 0, 1, 5, 4);
        assert_eq!(ctx.source_position(Some(&position)), None);
    }
}
