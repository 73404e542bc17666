mod content;
mod html;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs of every element (root included) matching `pred`, in document order.
pub fn find_all(root: &Element, pred: impl Fn(&Element) -> bool) -> Vec<String> {
    let mut ids = Vec::new();
    collect_matching(root, &pred, &mut ids);
    ids
}

fn collect_matching(element: &Element, pred: &impl Fn(&Element) -> bool, ids: &mut Vec<String>) {
    if pred(element) {
        ids.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_matching(child, pred, ids);
    }
}

/// First descendant (root excluded) matching `pred`, depth-first.
pub fn find_descendant<'a>(
    root: &'a Element,
    pred: &impl Fn(&Element) -> bool,
) -> Option<&'a Element> {
    for child in root.child_elements() {
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

/// IDs of elements carrying `class`, in document order.
pub fn find_by_class(root: &Element, class: &str) -> Vec<String> {
    find_all(root, |el| el.has_class(class))
}

/// IDs of elements carrying the `data-*` attribute `key`, in document order.
pub fn find_by_data(root: &Element, key: &str) -> Vec<String> {
    find_all(root, |el| el.has_data(key))
}
