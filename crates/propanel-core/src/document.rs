//! Retained element tree backing a panel's layout.
//!
//! Elements carry a tag, text, classes and inline style. A panel and its
//! controllers build their scaffolding here; egui rendering reads it back.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::error::{PanelError, PanelResult};

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// A single element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name (`li`, `span`, `div`, ...)
    pub tag: String,
    text: String,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    children: Vec<ElementId>,
    parent: Option<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            classes: Vec::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Class list in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Child ids in order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Parent id, if attached.
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// Arena of elements.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element.
    pub fn create(&mut self, tag: &str) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.insert(id, Element::new(tag));
        id
    }

    /// Look up an element.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Check if an element exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn get_mut(&mut self, id: ElementId) -> PanelResult<&mut Element> {
        self.elements
            .get_mut(&id)
            .ok_or(PanelError::UnknownElement(id))
    }

    /// Append `child` to `parent`, detaching it from its previous parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> PanelResult<()> {
        if !self.contains(parent) {
            return Err(PanelError::UnknownElement(parent));
        }
        if !self.contains(child) {
            return Err(PanelError::UnknownElement(child));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(PanelError::InvalidHierarchy { parent, child });
        }
        let old_parent = self.get_mut(child)?.parent.replace(parent);
        if let Some(old) = old_parent {
            if let Some(element) = self.elements.get_mut(&old) {
                element.children.retain(|c| *c != child);
            }
        }
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Check if `ancestor` is `id` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(element) = current {
            if element == ancestor {
                return true;
            }
            current = self.elements.get(&element).and_then(|e| e.parent);
        }
        false
    }

    /// Detach `child` from `parent`. The child stays in the document.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) -> PanelResult<()> {
        let element = self.get_mut(parent)?;
        let before = element.children.len();
        element.children.retain(|c| *c != child);
        if element.children.len() == before {
            return Err(PanelError::UnknownElement(child));
        }
        self.get_mut(child)?.parent = None;
        Ok(())
    }

    /// Remove an element and its whole subtree.
    pub fn remove(&mut self, id: ElementId) -> PanelResult<()> {
        let parent = self.get_mut(id)?.parent;
        if let Some(parent) = parent {
            if let Some(element) = self.elements.get_mut(&parent) {
                element.children.retain(|c| *c != id);
            }
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(element) = self.elements.remove(&next) {
                stack.extend(element.children);
            }
        }
        Ok(())
    }

    /// Set the text content.
    pub fn set_text(&mut self, id: ElementId, text: &str) -> PanelResult<()> {
        self.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Text content of an element.
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(Element::text)
    }

    /// Set an inline style property.
    pub fn set_style(&mut self, id: ElementId, key: &str, value: &str) -> PanelResult<()> {
        self.get_mut(id)?
            .style
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Read an inline style property.
    pub fn style(&self, id: ElementId, key: &str) -> Option<&str> {
        self.get(id)?.style.get(key).map(String::as_str)
    }

    /// Add a class (no duplicates).
    pub fn add_class(&mut self, id: ElementId, class: &str) -> PanelResult<()> {
        let element = self.get_mut(id)?;
        if !element.classes.iter().any(|c| c == class) {
            element.classes.push(class.to_string());
        }
        Ok(())
    }

    /// Check for a class.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    /// Children of an element (empty if unknown).
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.get(id).map(Element::children).unwrap_or(&[])
    }

    /// Parent of an element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.get(id)?.parent
    }
}

/// Parse a pixel length such as `65px`.
pub fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
