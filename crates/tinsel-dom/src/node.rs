//! Arena storage for element nodes.
//!
//! Nodes live in a flat `Vec` and refer to each other by index. Removing a
//! subtree frees its slots for reuse; every reuse bumps the slot generation,
//! so a handle held past a `clear_children` call resolves to
//! [`DomError::UnknownNode`] instead of the node now living in its slot.

use std::fmt;

use crate::DomError;

/// Handle to a node in a [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub(crate) tag: String,
    pub(crate) class: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// Element arena.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dom {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let element = Element {
            tag: tag.to_string(),
            class: None,
            text: None,
            style: Vec::new(),
            parent: None,
            children: Vec::new(),
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.element = Some(element);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    element: Some(element),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of allocated slots, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_ok()
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Element, DomError> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_ref())
            .ok_or(DomError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.element.as_mut())
            .ok_or(DomError::UnknownNode(id))
    }

    /// Empty a live slot and queue it for reuse.
    fn release(&mut self, id: NodeId) -> Option<Element> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let element = slot.element.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(element)
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.get(parent)?;
        self.get(child)?;

        // Walk up from the new parent; meeting `child` means a cycle.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DomError::CycleDetected { parent, child });
            }
            cursor = self.get(id)?.parent;
        }

        if let Some(old_parent) = self.get(child)?.parent {
            self.get_mut(old_parent)?.children.retain(|&c| c != child);
        }
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Remove every descendant of `id`. The node itself stays.
    pub fn clear_children(&mut self, id: NodeId) -> Result<(), DomError> {
        let mut pending = std::mem::take(&mut self.get_mut(id)?.children);
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.release(child) {
                pending.extend(removed.children);
            }
        }
        Ok(())
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.get(id)?.children)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.get(id)?.parent)
    }

    /// Descendants of `root` carrying `class`, in document order. The root
    /// itself is not matched.
    pub fn query_class(&self, root: NodeId, class: &str) -> Result<Vec<NodeId>, DomError> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.get(root)?.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let el = self.get(id)?;
            if el
                .class
                .as_deref()
                .is_some_and(|c| c.split_whitespace().any(|name| name == class))
            {
                found.push(id);
            }
            stack.extend(el.children.iter().rev());
        }
        Ok(found)
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn tag(&self, id: NodeId) -> Result<&str, DomError> {
        Ok(&self.get(id)?.tag)
    }

    pub fn set_class(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.get_mut(id)?.class = Some(class.to_string());
        Ok(())
    }

    pub fn class_name(&self, id: NodeId) -> Result<Option<&str>, DomError> {
        Ok(self.get(id)?.class.as_deref())
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        self.get_mut(id)?.text = Some(text.to_string());
        Ok(())
    }

    pub fn text(&self, id: NodeId) -> Result<Option<&str>, DomError> {
        Ok(self.get(id)?.text.as_deref())
    }

    /// Set an inline style property, replacing an existing value in place.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> Result<(), DomError> {
        let style = &mut self.get_mut(id)?.style;
        match style.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn style(&self, id: NodeId, property: &str) -> Result<Option<&str>, DomError> {
        Ok(self
            .get(id)?
            .style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str()))
    }

    /// Concatenated text of `id` and all its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.collect_text(id, &mut out)?;
        Ok(out)
    }

    fn collect_text(&self, id: NodeId, out: &mut String) -> Result<(), DomError> {
        let el = self.get(id)?;
        if let Some(ref text) = el.text {
            out.push_str(text);
        }
        for &child in &el.children {
            self.collect_text(child, out)?;
        }
        Ok(())
    }
}
