use crate::element::{find_by_class, find_by_data, find_element, find_element_mut, Element};
use crate::path::event_path;

/// A page: the `body` element and everything under it.
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn by_class(&self, class: &str) -> Vec<String> {
        find_by_class(&self.body, class)
    }

    pub fn by_data(&self, key: &str) -> Vec<String> {
        find_by_data(&self.body, key)
    }

    /// Target-first propagation path, see [`event_path`].
    pub fn path(&self, id: &str) -> Option<Vec<String>> {
        event_path(&self.body, id)
    }
}
