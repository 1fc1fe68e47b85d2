//! Node rendering functions for the mdast walker.

use super::context::{Context, footnote_slug};
use super::types::{LinkDefinition, Scope};
use chakra_markdown_core::{
    Align, CellProps, Child, CodeProps, CoreProps, Display, Element, ImageProps, LinkProps,
    ListItemProps, NodeProps, PropValue,
};
use markdown::mdast::{self, AlignKind, Node, ReferenceKind};

/// Extracts plain text from a list of AST nodes (for heading text).
pub fn extract_text_from_nodes(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        extract_text_from_node(node, &mut text);
    }
    text.trim().to_string()
}

fn extract_text_from_node(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Strong(strong) => {
            for child in &strong.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Emphasis(emphasis) => {
            for child in &emphasis.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Link(link) => {
            for child in &link.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::LinkReference(link) => {
            for child in &link.children {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Delete(del) => {
            for child in &del.children {
                extract_text_from_node(child, buffer);
            }
        }
        _ => {}
    }
}

/// Renders every node in order, concatenating their output.
pub fn render_children(nodes: &[Node], ctx: &mut Context<'_>) -> Vec<Child> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        out.extend(render_node(node, ctx));
    }
    out
}

fn core(children: Vec<Child>, node: &Node, ctx: &Context<'_>) -> CoreProps {
    CoreProps {
        children,
        source_position: ctx.source_position(node.position()),
    }
}

fn render_text(text: &mdast::Text, node: &Node, ctx: &Context<'_>) -> Child {
    let value = Child::text(text.value.clone());
    if ctx.wrap_text() {
        ctx.emit(NodeProps::Text(core(vec![value], node, ctx)))
    } else {
        value
    }
}

/// Renders a paragraph, or only its content directly inside a tight list item.
fn render_paragraph(para: &mdast::Paragraph, node: &Node, ctx: &mut Context<'_>) -> Vec<Child> {
    let children = render_children(&para.children, ctx);
    if ctx.in_tight_list() {
        return children;
    }
    vec![ctx.emit(NodeProps::P(core(children, node, ctx)))]
}

fn render_heading(heading: &mdast::Heading, node: &Node, ctx: &mut Context<'_>) -> Vec<Child> {
    ctx.push_heading(heading.depth, extract_text_from_nodes(&heading.children));
    let children = render_children(&heading.children, ctx);
    match NodeProps::heading(heading.depth, core(children, node, ctx)) {
        Some(props) => vec![ctx.emit(props)],
        None => {
            log::warn!("Heading depth out of range: {}", heading.depth);
            Vec::new()
        }
    }
}

/// Renders fenced code as `pre` wrapping the `code` slot.
fn render_code(code: &mdast::Code, node: &Node, ctx: &Context<'_>) -> Child {
    let props = CodeProps {
        core: core(vec![Child::text(format!("{}\n", code.value))], node, ctx),
        class_name: code.lang.as_ref().map(|lang| format!("language-{}", lang)),
        display: Some(Display::Block),
    };
    let inner = ctx.emit(NodeProps::Code(props));
    ctx.intrinsic("pre", node.position(), vec![inner])
}

fn render_inline_code(code: &mdast::InlineCode, node: &Node, ctx: &Context<'_>) -> Child {
    ctx.emit(NodeProps::Code(CodeProps {
        core: core(vec![Child::text(code.value.clone())], node, ctx),
        class_name: None,
        display: Some(Display::Inline),
    }))
}

/// Renders a list as `ul`/`ol`, tracking looseness for its items.
fn render_list(list: &mdast::List, node: &Node, ctx: &mut Context<'_>) -> Child {
    let loose = list.spread
        || list
            .children
            .iter()
            .any(|item| matches!(item, Node::ListItem(li) if li.spread));

    ctx.enter(Scope::List { loose });
    let children = render_children(&list.children, ctx);
    ctx.exit();

    let props = core(children, node, ctx);
    if list.ordered {
        ctx.emit(NodeProps::Ol(props))
    } else {
        ctx.emit(NodeProps::Ul(props))
    }
}

fn render_list_item(item: &mdast::ListItem, node: &Node, ctx: &mut Context<'_>) -> Child {
    let children = render_children(&item.children, ctx);
    ctx.emit(NodeProps::Li(ListItemProps {
        core: core(children, node, ctx),
        checked: item.checked,
    }))
}

fn render_link(link: &mdast::Link, node: &Node, ctx: &mut Context<'_>) -> Child {
    let children = render_children(&link.children, ctx);
    ctx.emit(NodeProps::A(LinkProps {
        core: core(children, node, ctx),
        href: link.url.clone(),
        title: link.title.clone(),
    }))
}

fn render_image(img: &mdast::Image, node: &Node, ctx: &Context<'_>) -> Child {
    ctx.emit(NodeProps::Img(ImageProps {
        src: img.url.clone(),
        alt: img.alt.clone(),
        title: img.title.clone(),
        source_position: ctx.source_position(node.position()),
    }))
}

/// Registers every link reference definition in the tree, so references
/// resolve regardless of where their definition appears.
pub fn collect_definitions(node: &Node, ctx: &mut Context<'_>) {
    if let Node::Definition(def) = node {
        ctx.define(
            &def.identifier,
            LinkDefinition {
                url: def.url.clone(),
                title: def.title.clone(),
            },
        );
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, ctx);
        }
    }
}

/// Source text of an unresolved reference's trailing label part.
fn reference_suffix(kind: &ReferenceKind, label: Option<&str>, identifier: &str) -> String {
    match kind {
        ReferenceKind::Full => format!("][{}]", label.unwrap_or(identifier)),
        ReferenceKind::Collapsed => "][]".to_string(),
        ReferenceKind::Shortcut => "]".to_string(),
    }
}

/// Renders `[text][id]` through the `a` slot, or as its bracket text when
/// no definition matches.
fn render_link_reference(
    link: &mdast::LinkReference,
    node: &Node,
    ctx: &mut Context<'_>,
) -> Vec<Child> {
    let children = render_children(&link.children, ctx);
    match ctx.definition(&link.identifier).cloned() {
        Some(def) => vec![ctx.emit(NodeProps::A(LinkProps {
            core: core(children, node, ctx),
            href: def.url,
            title: def.title,
        }))],
        None => {
            let mut out = Vec::with_capacity(children.len() + 2);
            out.push(Child::text("["));
            out.extend(children);
            out.push(Child::text(reference_suffix(
                &link.reference_kind,
                link.label.as_deref(),
                &link.identifier,
            )));
            out
        }
    }
}

/// Renders `![alt][id]` through the `img` slot, or as its bracket text when
/// no definition matches.
fn render_image_reference(img: &mdast::ImageReference, node: &Node, ctx: &Context<'_>) -> Child {
    match ctx.definition(&img.identifier) {
        Some(def) => ctx.emit(NodeProps::Img(ImageProps {
            src: def.url.clone(),
            alt: img.alt.clone(),
            title: def.title.clone(),
            source_position: ctx.source_position(node.position()),
        })),
        None => Child::text(format!(
            "![{}{}",
            img.alt,
            reference_suffix(&img.reference_kind, img.label.as_deref(), &img.identifier)
        )),
    }
}

/// Renders a footnote reference as `sup` wrapping a link to its definition.
///
/// Repeated references get suffixed ids (`fnref-id`, `fnref-id-2`, ...).
fn render_footnote_reference(
    fnref: &mdast::FootnoteReference,
    node: &Node,
    ctx: &mut Context<'_>,
) -> Child {
    let slug = footnote_slug(&fnref.identifier);
    let (ordinal, count) = ctx.reference_footnote(&fnref.identifier);
    let suffix = if count == 1 {
        String::new()
    } else {
        format!("-{}", count)
    };

    let anchor = Element::intrinsic("a")
        .attr("href", format!("#user-content-fn-{}", slug))
        .attr("id", format!("user-content-fnref-{}{}", slug, suffix))
        .prop("data-footnote-ref", PropValue::boolean(true))
        .attr("aria-describedby", "footnote-label")
        .child(Child::text(ordinal.to_string()));
    ctx.intrinsic("sup", node.position(), vec![Child::Element(anchor)])
}

/// Renders a footnote definition's content and defers it to the trailing
/// footnotes section.
fn render_footnote_definition(fndef: &mdast::FootnoteDefinition, ctx: &mut Context<'_>) {
    ctx.enter(Scope::Footnote);
    let children = render_children(&fndef.children, ctx);
    ctx.exit();
    ctx.push_footnote(&fndef.identifier, children);
}

fn align(kind: Option<&AlignKind>) -> Option<Align> {
    match kind? {
        AlignKind::Left => Some(Align::Left),
        AlignKind::Right => Some(Align::Right),
        AlignKind::Center => Some(Align::Center),
        AlignKind::None => None,
    }
}

fn render_table_row(
    row: &mdast::TableRow,
    node: &Node,
    ctx: &mut Context<'_>,
    is_header: bool,
    aligns: &[AlignKind],
) -> Child {
    let mut cells = Vec::with_capacity(row.children.len());
    for (i, cell) in row.children.iter().enumerate() {
        if let Node::TableCell(c) = cell {
            let children = render_children(&c.children, ctx);
            let props = CellProps {
                core: core(children, cell, ctx),
                align: align(aligns.get(i)),
            };
            cells.push(if is_header {
                ctx.emit(NodeProps::Th(props))
            } else {
                ctx.emit(NodeProps::Td(props))
            });
        }
    }
    ctx.emit(NodeProps::Tr(core(cells, node, ctx)))
}

/// Renders a table; the first row becomes `thead`, the rest `tbody`.
fn render_table(table: &mdast::Table, node: &Node, ctx: &mut Context<'_>) -> Child {
    let mut sections = Vec::with_capacity(2);

    if let Some(head) = table.children.first()
        && let Node::TableRow(row) = head
    {
        let row = render_table_row(row, head, ctx, true, &table.align);
        sections.push(ctx.emit(NodeProps::Thead(CoreProps::new(vec![row]))));
    }

    if table.children.len() > 1 {
        let mut rows = Vec::with_capacity(table.children.len() - 1);
        for child in table.children.iter().skip(1) {
            if let Node::TableRow(row) = child {
                rows.push(render_table_row(row, child, ctx, false, &table.align));
            }
        }
        sections.push(ctx.emit(NodeProps::Tbody(CoreProps::new(rows))));
    }

    ctx.emit(NodeProps::Table(core(sections, node, ctx)))
}

/// Recursively renders an AST node through the renderer table.
pub fn render_node(node: &Node, ctx: &mut Context<'_>) -> Vec<Child> {
    match node {
        Node::Root(root) => render_children(&root.children, ctx),
        Node::Text(text) => vec![render_text(text, node, ctx)],
        Node::Paragraph(para) => render_paragraph(para, node, ctx),
        Node::Heading(heading) => render_heading(heading, node, ctx),
        Node::Emphasis(emphasis) => {
            let children = render_children(&emphasis.children, ctx);
            vec![ctx.emit(NodeProps::Em(core(children, node, ctx)))]
        }
        Node::Delete(delete) => {
            let children = render_children(&delete.children, ctx);
            vec![ctx.emit(NodeProps::Del(core(children, node, ctx)))]
        }
        Node::Blockquote(quote) => {
            ctx.enter(Scope::Blockquote);
            let children = render_children(&quote.children, ctx);
            ctx.exit();
            vec![ctx.emit(NodeProps::Blockquote(core(children, node, ctx)))]
        }
        Node::Strong(strong) => {
            let children = render_children(&strong.children, ctx);
            vec![ctx.intrinsic("strong", node.position(), children)]
        }
        Node::InlineCode(code) => vec![render_inline_code(code, node, ctx)],
        Node::Code(code) => vec![render_code(code, node, ctx)],
        Node::ThematicBreak(_) => vec![ctx.emit(NodeProps::Hr(core(Vec::new(), node, ctx)))],
        Node::Link(link) => vec![render_link(link, node, ctx)],
        Node::Image(img) => vec![render_image(img, node, ctx)],
        Node::LinkReference(link) => render_link_reference(link, node, ctx),
        Node::ImageReference(img) => vec![render_image_reference(img, node, ctx)],
        Node::FootnoteReference(fnref) => vec![render_footnote_reference(fnref, node, ctx)],
        Node::FootnoteDefinition(fndef) => {
            render_footnote_definition(fndef, ctx);
            Vec::new()
        }
        Node::List(list) => vec![render_list(list, node, ctx)],
        Node::ListItem(item) => vec![render_list_item(item, node, ctx)],
        Node::Table(table) => vec![render_table(table, node, ctx)],
        Node::Break(_) => vec![ctx.intrinsic("br", node.position(), Vec::new())],
        Node::Html(html) => {
            log::debug!("Raw HTML in markdown is kept as text: {}", html.value);
            vec![Child::text(html.value.clone())]
        }
        // Definitions are collected before the walk; frontmatter is metadata.
        Node::Yaml(_) | Node::Toml(_) | Node::Definition(_) => Vec::new(),
        Node::TableRow(_) | Node::TableCell(_) => Vec::new(),
        _ => {
            log::warn!("Unhandled markdown node type: {:?}", node);
            Vec::new()
        }
    }
}
