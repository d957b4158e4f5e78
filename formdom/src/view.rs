//! Mount slot for one component's render unit.

use crate::element::Element;

/// Holds the render unit a component currently has mounted.
///
/// A component replaces its unit on every render and drops it on removal.
/// Removal is idempotent.
#[derive(Debug, Clone, Default)]
pub struct View {
    element: Option<Element>,
    removed: bool,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `element` as this view's render unit, replacing any previous one.
    pub fn set_element(&mut self, element: Element) -> &Element {
        self.removed = false;
        self.element.insert(element)
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn element_mut(&mut self) -> Option<&mut Element> {
        self.element.as_mut()
    }

    /// Detach the render unit. Returns it if one was mounted.
    pub fn remove(&mut self) -> Option<Element> {
        let element = self.element.take();
        if let Some(el) = &element {
            log::trace!("view removed: {}", el.id);
        }
        self.removed = true;
        element
    }

    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    /// True once `remove` has run and nothing was mounted since.
    pub fn is_removed(&self) -> bool {
        self.removed
    }
}
