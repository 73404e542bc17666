use std::collections::HashMap;

use log::trace;

use crate::event::EventKind;

/// Listener registry.
///
/// Listeners are plain values (usually an enum naming the behaviour to run),
/// attached either to an element id or to the document. Resolution follows
/// bubbling order: listeners on the target, then on each ancestor, then on
/// the document. Within one element, registration order is kept.
#[derive(Debug)]
pub struct Listeners<L> {
    elements: HashMap<(String, EventKind), Vec<L>>,
    document: HashMap<EventKind, Vec<L>>,
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            document: HashMap::new(),
        }
    }
}

impl<L> Listeners<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener to an element.
    pub fn on(&mut self, element_id: impl Into<String>, kind: EventKind, listener: L) {
        self.elements
            .entry((element_id.into(), kind))
            .or_default()
            .push(listener);
    }

    /// Attach a listener to the document.
    pub fn on_document(&mut self, kind: EventKind, listener: L) {
        self.document.entry(kind).or_default().push(listener);
    }

    /// Whether the element has any listener of this kind.
    pub fn has(&self, element_id: &str, kind: EventKind) -> bool {
        self.elements
            .get(&(element_id.to_string(), kind))
            .is_some_and(|l| !l.is_empty())
    }

    /// Total number of registered listeners.
    pub fn len(&self) -> usize {
        self.elements.values().map(Vec::len).sum::<usize>()
            + self.document.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listeners to run for an event of `kind` travelling along `path`
    /// (target first), followed by document listeners.
    pub fn resolve(&self, path: &[String], kind: EventKind) -> Vec<&L> {
        let mut out = Vec::new();
        for id in path {
            if let Some(listeners) = self.elements.get(&(id.clone(), kind)) {
                trace!("{} {:?} listener(s) on {}", listeners.len(), kind, id);
                out.extend(listeners);
            }
        }
        if let Some(listeners) = self.document.get(&kind) {
            out.extend(listeners);
        }
        out
    }
}
