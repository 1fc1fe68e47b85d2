//! The renderer table and its override merge.

use crate::defaults::default_components;
use crate::element::Element;
use crate::node::NodeKind;
use crate::props::{CellProps, CodeProps, CoreProps, ImageProps, LinkProps, ListItemProps, NodeProps};
use crate::renderer::Renderer;
use once_cell::sync::Lazy;
use std::fmt;

/// Recursive structural merge over a closed schema.
///
/// Composite values merge field by field; atomic values present in
/// `overrides` replace the base value, absent ones keep it.
pub trait Merge {
    /// Merges `overrides` over `self`.
    fn merge(self, overrides: Self) -> Self;
}

impl<P> Merge for Option<Renderer<P>> {
    fn merge(self, overrides: Self) -> Self {
        overrides.or(self)
    }
}

macro_rules! components {
    ($($field:ident: $props:ty => $kind:ident / $variant:ident),* $(,)?) => {
        /// Mapping from node-type key to renderer function.
        ///
        /// An empty slot means the key is not mapped; callers rendering
        /// through [`Components::render`] then get the intrinsic HTML element.
        /// The same type doubles as a partial override table.
        #[derive(Clone, Default)]
        pub struct Components {
            $(
                #[allow(missing_docs)]
                pub $field: Option<Renderer<$props>>,
            )*
        }

        impl Components {
            /// A table with every slot empty.
            pub fn empty() -> Self {
                Self::default()
            }

            /// Whether a renderer is installed for `kind`.
            pub fn contains(&self, kind: NodeKind) -> bool {
                match kind {
                    $(NodeKind::$kind => self.$field.is_some(),)*
                }
            }

            /// Empties the slot for `kind`.
            pub fn remove(&mut self, kind: NodeKind) {
                match kind {
                    $(NodeKind::$kind => self.$field = None,)*
                }
            }

            /// Renders one node through its slot, or as an intrinsic
            /// element when the slot is empty.
            pub fn render(&self, props: NodeProps) -> Element {
                match props {
                    $(NodeProps::$variant(props) => match &self.$field {
                        Some(renderer) => renderer.render(&props),
                        None => NodeProps::$variant(props).into_intrinsic(),
                    },)*
                }
            }

            /// True when both tables hold the same renderer (by identity)
            /// or both leave the slot empty.
            pub fn same_entry(&self, other: &Self, kind: NodeKind) -> bool {
                match kind {
                    $(NodeKind::$kind => match (&self.$field, &other.$field) {
                        (Some(a), Some(b)) => a.ptr_eq(b),
                        (None, None) => true,
                        _ => false,
                    },)*
                }
            }
        }

        impl Merge for Components {
            fn merge(self, overrides: Self) -> Self {
                Self {
                    $($field: self.$field.merge(overrides.$field),)*
                }
            }
        }
    };
}

components! {
    p: CoreProps => Paragraph / P,
    em: CoreProps => Emphasis / Em,
    blockquote: CoreProps => Blockquote / Blockquote,
    code: CodeProps => Code / Code,
    del: CoreProps => Delete / Del,
    hr: CoreProps => ThematicBreak / Hr,
    a: LinkProps => Link / A,
    img: ImageProps => Image / Img,
    text: CoreProps => Text / Text,
    ul: CoreProps => UnorderedList / Ul,
    ol: CoreProps => OrderedList / Ol,
    li: ListItemProps => ListItem / Li,
    h1: CoreProps => H1 / H1,
    h2: CoreProps => H2 / H2,
    h3: CoreProps => H3 / H3,
    h4: CoreProps => H4 / H4,
    h5: CoreProps => H5 / H5,
    h6: CoreProps => H6 / H6,
    table: CoreProps => Table / Table,
    thead: CoreProps => TableHead / Thead,
    tbody: CoreProps => TableBody / Tbody,
    tr: CoreProps => TableRow / Tr,
    td: CellProps => TableData / Td,
    th: CellProps => TableHeader / Th,
}

impl Components {
    /// Keys with an installed renderer, in table order.
    pub fn keys(&self) -> Vec<NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    /// True when every key has a renderer.
    pub fn is_complete(&self) -> bool {
        NodeKind::ALL.iter().all(|kind| self.contains(*kind))
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.keys().iter().map(|kind| kind.as_str()))
            .finish()
    }
}

static DEFAULTS: Lazy<Components> = Lazy::new(default_components);

/// Returns the default table.
///
/// Every call hands out the same renderer functions, so entries of two
/// default tables compare equal under [`Components::same_entry`].
pub fn defaults() -> Components {
    DEFAULTS.clone()
}

/// Builds a renderer table.
///
/// - No overrides: the unmodified defaults.
/// - `merge == true`: overrides merged over the defaults; missing keys fall
///   back to the defaults.
/// - `merge == false`: the overrides exactly as given. An incomplete
///   override table stays incomplete.
///
/// # Examples
///
/// ```
/// use chakra_markdown_core::{Components, Element, NodeKind, Renderer, build, defaults};
///
/// let custom = Renderer::new(|_: &chakra_markdown_core::CodeProps| Element::intrinsic("pre"));
/// let overrides = Components {
///     code: Some(custom.clone()),
///     ..Components::empty()
/// };
///
/// let table = build(Some(overrides), true);
/// assert!(table.code.as_ref().unwrap().ptr_eq(&custom));
/// assert!(table.same_entry(&defaults(), NodeKind::Paragraph));
/// ```
pub fn build(overrides: Option<Components>, merge: bool) -> Components {
    match overrides {
        None => defaults(),
        Some(overrides) if merge => {
            log::debug!("merging renderer overrides: {:?}", overrides);
            defaults().merge(overrides)
        }
        Some(overrides) => overrides,
    }
}
