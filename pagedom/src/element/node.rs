use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// True when the id came from markup rather than `generate_id`.
    /// Only explicit ids are written back out by the serializer.
    pub explicit_id: bool,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup attributes
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed without the `data-` prefix
    /// (`data-sort-type` is stored as `sort-type`).
    pub data: HashMap<String, String>,
    /// Inline style declarations.
    pub style: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            explicit_id: false,
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            data: HashMap::new(),
            style: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// A `span` holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::span().inner_text(content)
    }

    // Tables
    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    pub fn th(label: impl Into<String>) -> Self {
        Self::new("th").inner_text(label)
    }

    pub fn td(value: impl Into<String>) -> Self {
        Self::new("td").inner_text(value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self.explicit_id = true;
        self
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was not already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Data attributes
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove_data(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    // Inline style
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Setting an empty value removes the declaration, as assigning `""`
    /// to a style property does in a browser.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        if value.is_empty() {
            self.style.remove(&property);
        } else {
            self.style.insert(property, value);
        }
    }

    // Content
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn markup(mut self, html: impl Into<String>) -> Self {
        self.content = Content::Markup(html.into());
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.content = Content::Markup(html.into());
    }

    /// Concatenated text of this element and all descendants.
    /// Tags inside raw markup are dropped and character references decoded.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// First direct child with the given tag.
    pub fn first_child_tagged(&self, tag: &str) -> Option<&Element> {
        self.child_elements().iter().find(|c| c.is(tag))
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Markup(html) => strip_tags(html, out),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}

fn strip_tags(html: &str, out: &mut String) {
    let mut text = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    decode_entities(&text, out);
}

/// Decode named (`&amp;` `&lt;` `&gt;` `&quot;` `&apos;` `&nbsp;`) and
/// numeric (`&#38;` `&#x26;`) references. Anything else is kept as written.
fn decode_entities(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let decoded = rest.find(';').and_then(|end| {
            let ch = match &rest[1..end] {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                name => numeric_reference(name),
            }?;
            Some((ch, end + 1))
        });

        match decoded {
            Some((ch, len)) => {
                out.push(ch);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
}

fn numeric_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
