#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Raw inner markup, as assigned through `set_inner_html`.
    /// Not parsed; serialized verbatim.
    Markup(String),
    Children(Vec<super::Element>),
}

