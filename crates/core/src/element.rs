//! UI element values produced by renderer functions.

use serde::Serialize;
use std::collections::BTreeMap;

/// Element props keyed by prop name.
pub type Props = BTreeMap<String, PropValue>;

/// A component prop value - either a literal string or a JS expression.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropValue {
    /// A literal string value (emitted as key="value").
    Literal {
        /// The string value.
        value: String,
    },
    /// A JS expression (emitted as key={expression}).
    Expression {
        /// The expression source.
        value: String,
    },
}

impl PropValue {
    /// Creates a literal string prop value.
    pub fn literal(value: impl Into<String>) -> Self {
        PropValue::Literal {
            value: value.into(),
        }
    }

    /// Creates an expression prop value.
    pub fn expression(value: impl Into<String>) -> Self {
        PropValue::Expression {
            value: value.into(),
        }
    }

    /// Creates a numeric expression (e.g. Chakra spacing scale values).
    pub fn number(value: i64) -> Self {
        PropValue::expression(value.to_string())
    }

    /// Creates a boolean expression.
    pub fn boolean(value: bool) -> Self {
        PropValue::expression(if value { "true" } else { "false" })
    }

    /// Returns the raw value regardless of type.
    pub fn value(&self) -> &str {
        match self {
            PropValue::Literal { value } | PropValue::Expression { value } => value,
        }
    }

    /// Returns true if this is an expression.
    pub fn is_expression(&self) -> bool {
        matches!(self, PropValue::Expression { .. })
    }
}

/// Chakra UI primitives the default table renders into.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Primitive {
    Checkbox,
    Code,
    Divider,
    Heading,
    Image,
    Link,
    ListItem,
    OrderedList,
    Text,
    Table,
    Tbody,
    Td,
    Th,
    Thead,
    Tr,
    UnorderedList,
}

impl Primitive {
    /// Every primitive, in import order.
    pub const ALL: [Primitive; 16] = [
        Primitive::Checkbox,
        Primitive::Code,
        Primitive::Divider,
        Primitive::Heading,
        Primitive::Image,
        Primitive::Link,
        Primitive::ListItem,
        Primitive::OrderedList,
        Primitive::Text,
        Primitive::Table,
        Primitive::Tbody,
        Primitive::Td,
        Primitive::Th,
        Primitive::Thead,
        Primitive::Tr,
        Primitive::UnorderedList,
    ];

    /// Exported component name.
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Checkbox => "Checkbox",
            Primitive::Code => "Code",
            Primitive::Divider => "Divider",
            Primitive::Heading => "Heading",
            Primitive::Image => "Image",
            Primitive::Link => "Link",
            Primitive::ListItem => "ListItem",
            Primitive::OrderedList => "OrderedList",
            Primitive::Text => "Text",
            Primitive::Table => "Table",
            Primitive::Tbody => "Tbody",
            Primitive::Td => "Td",
            Primitive::Th => "Th",
            Primitive::Thead => "Thead",
            Primitive::Tr => "Tr",
            Primitive::UnorderedList => "UnorderedList",
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an element instantiates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "camelCase")]
pub enum Tag {
    /// A component from the component library.
    Component(Primitive),
    /// A plain HTML element (e.g. `strong`, `pre`).
    Intrinsic(String),
}

impl Tag {
    /// The name used when emitting JSX.
    pub fn name(&self) -> &str {
        match self {
            Tag::Component(primitive) => primitive.as_str(),
            Tag::Intrinsic(name) => name,
        }
    }
}

/// A child of an element: either a nested element or text.
///
/// Serializes untagged: elements as objects, text as plain strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    /// A nested element.
    Element(Element),
    /// Text content.
    Text(String),
}

impl Child {
    /// Creates a text child.
    pub fn text(value: impl Into<String>) -> Self {
        Child::Text(value.into())
    }

    /// Returns the nested element, if any.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Child::Element(element) => Some(element),
            Child::Text(_) => None,
        }
    }

    /// Returns the text content, if this is a text child.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            Child::Element(_) => None,
        }
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Element(element)
    }
}

/// A rendered UI element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Component or intrinsic tag.
    #[serde(flatten)]
    pub tag: Tag,
    /// Props passed to the element.
    pub props: Props,
    /// Child content.
    pub children: Vec<Child>,
}

impl Element {
    /// Creates an element for a component library primitive.
    pub fn component(primitive: Primitive) -> Self {
        Self {
            tag: Tag::Component(primitive),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Creates a plain HTML element.
    pub fn intrinsic(name: impl Into<String>) -> Self {
        Self {
            tag: Tag::Intrinsic(name.into()),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Sets a literal prop.
    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.props.insert(key.to_string(), PropValue::literal(value));
        self
    }

    /// Sets a prop to an arbitrary value.
    pub fn prop(mut self, key: &str, value: PropValue) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    /// Sets a literal prop when the value is present.
    pub fn attr_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Spreads a prop set over the element's props.
    pub fn props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    /// Appends children.
    pub fn children(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a single child.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the primitive if this element is a library component.
    pub fn primitive(&self) -> Option<Primitive> {
        match self.tag {
            Tag::Component(primitive) => Some(primitive),
            Tag::Intrinsic(_) => None,
        }
    }

    /// Looks up a prop's raw value.
    pub fn prop_value(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(PropValue::value)
    }
}

/// Concatenated text of a child forest.
pub fn plain_text(children: &[Child]) -> String {
    let mut out = String::new();
    for child in children {
        match child {
            Child::Text(text) => out.push_str(text),
            Child::Element(element) => out.push_str(&plain_text(&element.children)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_props_and_children() {
        let element = Element::component(Primitive::Text)
            .prop("mb", PropValue::number(2))
            .attr("as", "em")
            .child(Child::text("hi"));

        assert_eq!(element.primitive(), Some(Primitive::Text));
        assert_eq!(element.prop_value("mb"), Some("2"));
        assert!(element.props["mb"].is_expression());
        assert_eq!(element.props["as"], PropValue::literal("em"));
        assert_eq!(element.children, vec![Child::text("hi")]);
    }

    #[test]
    fn test_attr_opt_skips_missing_values() {
        let element = Element::intrinsic("a").attr_opt("title", None);
        assert!(element.props.is_empty());
        assert_eq!(element.tag.name(), "a");
    }

    #[test]
    fn test_element_serializes_with_tag_fields() {
        let element = Element::component(Primitive::Divider);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "component");
        assert_eq!(json["name"], "Divider");
        assert!(json["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_text_children_serialize_as_strings() {
        let element = Element::intrinsic("strong").child(Child::text("bold"));
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "intrinsic");
        assert_eq!(json["name"], "strong");
        assert_eq!(json["children"][0], "bold");
    }
}
