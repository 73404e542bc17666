use super::{Content, Element};

impl Element {
    /// Serialized markup of this element's content.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        write_content(&self.content, &mut out);
        out
    }

    /// Serialized markup of this element, including its own tag.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => escape_into(text, false, out),
        Content::Markup(html) => out.push_str(html),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if element.explicit_id {
        write_attr("id", &element.id, out);
    }
    if !element.classes.is_empty() {
        write_attr("class", &element.classes.join(" "), out);
    }

    // HashMap order is unstable; sort for deterministic output.
    let mut keys: Vec<&String> = element.data.keys().collect();
    keys.sort();
    for key in keys {
        write_attr(&format!("data-{key}"), &element.data[key], out);
    }

    if !element.style.is_empty() {
        let style = element
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        write_attr("style", &style, out);
    }

    out.push('>');
    write_content(&element.content, out);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, true, out);
    out.push('"');
}

fn escape_into(text: &str, attr: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
