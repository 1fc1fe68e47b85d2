//! Renderer function values.

use crate::element::Element;
use std::fmt;
use std::sync::Arc;

/// A pure rendering function from node props to one element.
///
/// Cheap to clone and shareable across threads. Two renderers are the
/// same renderer only if they share the same allocation (see [`Renderer::ptr_eq`]).
pub struct Renderer<P>(Arc<dyn Fn(&P) -> Element + Send + Sync>);

impl<P> Renderer<P> {
    /// Wraps a function as a renderer.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&P) -> Element + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Invokes the renderer.
    pub fn render(&self, props: &P) -> Element {
        (self.0)(props)
    }

    /// Identity comparison.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<P> Clone for Renderer<P> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<P> fmt::Debug for Renderer<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Renderer({:p})", Arc::as_ptr(&self.0))
    }
}
