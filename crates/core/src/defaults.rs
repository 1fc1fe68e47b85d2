//! Default renderers mapping Markdown nodes onto Chakra UI primitives.
//!
//! Props are written in Chakra's style-prop notation (`mb`, `pl`, `w`, ...),
//! with spacing values on the theme scale as numeric expressions.

use crate::components::Components;
use crate::element::{Element, Primitive, PropValue};
use crate::props::{
    CellProps, CodeProps, CoreProps, ImageProps, LinkProps, ListItemProps, position_attrs,
};
use crate::renderer::Renderer;

/// Creates the default Chakra UI table.
///
/// # Example
///
/// ```
/// use chakra_markdown_core::defaults::default_components;
///
/// let table = default_components();
/// assert!(table.is_complete());
/// ```
pub fn default_components() -> Components {
    Components {
        p: Some(Renderer::new(paragraph)),
        em: Some(Renderer::new(emphasis)),
        blockquote: Some(Renderer::new(blockquote)),
        code: Some(Renderer::new(code)),
        del: Some(Renderer::new(delete)),
        hr: Some(Renderer::new(divider)),
        a: Some(Renderer::new(link)),
        img: Some(Renderer::new(image)),
        text: Some(Renderer::new(text)),
        ul: Some(Renderer::new(unordered_list)),
        ol: Some(Renderer::new(ordered_list)),
        li: Some(Renderer::new(list_item)),
        h1: Some(Renderer::new(|props: &CoreProps| heading("h1", props))),
        h2: Some(Renderer::new(|props: &CoreProps| heading("h2", props))),
        h3: Some(Renderer::new(|props: &CoreProps| heading("h3", props))),
        h4: Some(Renderer::new(|props: &CoreProps| heading("h4", props))),
        h5: Some(Renderer::new(|props: &CoreProps| heading("h5", props))),
        h6: Some(Renderer::new(|props: &CoreProps| heading("h6", props))),
        table: Some(Renderer::new(|props: &CoreProps| {
            passthrough(Primitive::Table, props)
        })),
        thead: Some(Renderer::new(|props: &CoreProps| {
            passthrough(Primitive::Thead, props)
        })),
        tbody: Some(Renderer::new(|props: &CoreProps| {
            passthrough(Primitive::Tbody, props)
        })),
        tr: Some(Renderer::new(|props: &CoreProps| {
            Element::component(Primitive::Tr).children(props.children.clone())
        })),
        td: Some(Renderer::new(|props: &CellProps| {
            Element::component(Primitive::Td).children(props.core.children.clone())
        })),
        th: Some(Renderer::new(|props: &CellProps| {
            Element::component(Primitive::Th).children(props.core.children.clone())
        })),
    }
}

fn styled_text(as_tag: &str, props: &CoreProps) -> Element {
    Element::component(Primitive::Text)
        .attr("as", as_tag)
        .children(props.children.clone())
}

fn paragraph(props: &CoreProps) -> Element {
    Element::component(Primitive::Text)
        .prop("mb", PropValue::number(2))
        .children(props.children.clone())
}

fn emphasis(props: &CoreProps) -> Element {
    styled_text("em", props)
}

fn delete(props: &CoreProps) -> Element {
    styled_text("del", props)
}

fn text(props: &CoreProps) -> Element {
    styled_text("span", props)
}

fn blockquote(props: &CoreProps) -> Element {
    Element::component(Primitive::Code)
        .attr("as", "blockquote")
        .prop("p", PropValue::number(2))
        .children(props.children.clone())
}

fn code(props: &CodeProps) -> Element {
    let children = props.core.children.clone();
    if props.is_inline() {
        return Element::component(Primitive::Code)
            .prop("p", PropValue::number(2))
            .children(children);
    }

    Element::component(Primitive::Code)
        .attr_opt("className", props.class_name.as_deref())
        .attr("whiteSpace", "break-spaces")
        .attr("display", "block")
        .attr("w", "full")
        .prop("p", PropValue::number(2))
        .children(children)
}

fn divider(_props: &CoreProps) -> Element {
    Element::component(Primitive::Divider)
}

fn link(props: &LinkProps) -> Element {
    Element::component(Primitive::Link)
        .attr("href", props.href.as_str())
        .attr_opt("title", props.title.as_deref())
        .props(position_attrs(props))
        .children(props.core.children.clone())
}

fn image(props: &ImageProps) -> Element {
    Element::component(Primitive::Image)
        .attr("src", props.src.as_str())
        .attr("alt", props.alt.as_str())
        .attr_opt("title", props.title.as_deref())
        .props(position_attrs(props))
}

/// Shared list container configuration: spacing, indent, and bullet style.
fn list(primitive: Primitive, props: &CoreProps) -> Element {
    Element::component(primitive)
        .prop("spacing", PropValue::number(2))
        .attr("styleType", "disc")
        .prop("pl", PropValue::number(4))
        .props(position_attrs(props))
        .children(props.children.clone())
}

fn unordered_list(props: &CoreProps) -> Element {
    list(Primitive::UnorderedList, props)
}

fn ordered_list(props: &CoreProps) -> Element {
    list(Primitive::OrderedList, props)
}

fn list_item(props: &ListItemProps) -> Element {
    let children = props.core.children.clone();
    let item = Element::component(Primitive::ListItem).props(position_attrs(props));

    match props.checked {
        Some(checked) => item.attr("listStyleType", "none").child(
            Element::component(Primitive::Checkbox)
                .prop("isChecked", PropValue::boolean(checked))
                .prop("isReadOnly", PropValue::boolean(true))
                .children(children),
        ),
        None => item.attr("listStyleType", "inherit").children(children),
    }
}

fn heading(level: &str, props: &CoreProps) -> Element {
    Element::component(Primitive::Heading)
        .attr("as", level)
        .props(position_attrs(props))
        .children(props.children.clone())
}

fn passthrough(primitive: Primitive, props: &CoreProps) -> Element {
    Element::component(primitive)
        .props(position_attrs(props))
        .children(props.children.clone())
}
