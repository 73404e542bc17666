use crate::element::Element;

/// Propagation path for an event aimed at `target`: the target first,
/// then each ancestor up to and including `root`.
/// Returns None if `target` is not in the tree.
pub fn event_path(root: &Element, target: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, target, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, target: &str, path: &mut Vec<String>) -> bool {
    if element.id == target {
        path.push(element.id.clone());
        return true;
    }

    for child in element.child_elements() {
        if collect_path(child, target, path) {
            // Unwinding pushes ancestors after the target
            path.push(element.id.clone());
            return true;
        }
    }

    false
}

/// Whether `id` is `ancestor` or lies inside it.
pub fn is_within(root: &Element, ancestor: &str, id: &str) -> bool {
    event_path(root, id).is_some_and(|path| path.iter().any(|p| p == ancestor))
}
