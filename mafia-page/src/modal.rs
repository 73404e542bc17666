//! Description popups. Clicking a card copies its title and full text into
//! a shared overlay; the overlay closes on its close button, a click on the
//! backdrop itself, or Escape.

use log::debug;
use pagedom::element::find_descendant;
use pagedom::{Document, Element};

use crate::config::ModalMarkup;

#[derive(Debug, Clone)]
pub struct Modal {
    markup: ModalMarkup,
    cards: Vec<String>,
    close_id: Option<String>,
    open: bool,
}

impl Modal {
    /// Returns None unless the backdrop, title and text elements exist.
    /// The close button is optional.
    pub fn mount(doc: &Document, markup: &ModalMarkup) -> Option<Self> {
        let required = [&markup.backdrop_id, &markup.title_id, &markup.text_id];
        if let Some(missing) = required.iter().find(|id| !doc.contains(id)) {
            debug!("Modal {} not mounted: #{missing} missing", markup.name);
            return None;
        }

        let close_id = doc
            .contains(&markup.close_id)
            .then(|| markup.close_id.clone());
        let cards = doc.by_data(&markup.card_key);
        debug!("Mounted modal {} with {} card(s)", markup.name, cards.len());

        Some(Self {
            markup: markup.clone(),
            cards,
            close_id,
            open: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.markup.name
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn backdrop_id(&self) -> &str {
        &self.markup.backdrop_id
    }

    pub fn close_id(&self) -> Option<&str> {
        self.close_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self, doc: &mut Document, title: &str, html: &str) {
        if let Some(el) = doc.get_mut(&self.markup.title_id) {
            el.set_text(title);
        }
        if let Some(el) = doc.get_mut(&self.markup.text_id) {
            el.set_inner_html(html);
        }
        if let Some(el) = doc.get_mut(&self.markup.backdrop_id) {
            el.add_class(&self.markup.open_class);
        }
        doc.body_mut().set_style("overflow", "hidden");
        self.open = true;
        debug!("Opened modal {}: {title}", self.markup.name);
    }

    /// Closing also restores page scrolling, even if another modal is
    /// still open.
    pub fn close(&mut self, doc: &mut Document) {
        if let Some(el) = doc.get_mut(&self.markup.backdrop_id) {
            el.remove_class(&self.markup.open_class);
        }
        doc.body_mut().set_style("overflow", "");
        if self.open {
            debug!("Closed modal {}", self.markup.name);
        }
        self.open = false;
    }

    /// Open with the title and full text of a card. Missing parts are empty.
    pub fn open_card(&mut self, doc: &mut Document, card_id: &str) {
        let Some(card) = doc.get(card_id) else {
            return;
        };
        let title_class = &self.markup.card_title_class;
        let body_class = &self.markup.card_body_class;

        let title = find_descendant(card, &|el: &Element| el.has_class(title_class))
            .map(|el| el.text_content().trim().to_string())
            .unwrap_or_default();
        let html = find_descendant(card, &|el: &Element| el.has_class(body_class))
            .map(Element::inner_html)
            .unwrap_or_default();

        self.open(doc, &title, &html);
    }

    /// Close only when the click landed on the backdrop itself.
    pub fn on_backdrop_click(&mut self, doc: &mut Document, target: &str) -> bool {
        if target != self.markup.backdrop_id {
            return false;
        }
        self.close(doc);
        true
    }
}
