//! Hero banner slider: one slide visible at a time, picked by clicking
//! its indicator dot.

use log::{debug, warn};
use pagedom::Document;

use crate::config::CarouselMarkup;

#[derive(Debug, Clone)]
pub struct Carousel {
    markup: CarouselMarkup,
    slides: Vec<String>,
    dots: Vec<String>,
    current: usize,
}

impl Carousel {
    /// Collect slides and dots in document order. Returns None unless
    /// both are present. The first slide is assumed active in the markup.
    pub fn mount(doc: &Document, markup: &CarouselMarkup) -> Option<Self> {
        let slides = doc.by_class(&markup.slide_class);
        let dots = doc.by_class(&markup.dot_class);
        if slides.is_empty() || dots.is_empty() {
            return None;
        }
        debug!("Mounted carousel: {} slides, {} dots", slides.len(), dots.len());
        Some(Self {
            markup: markup.clone(),
            slides,
            dots,
            current: 0,
        })
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn dots(&self) -> &[String] {
        &self.dots
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move the active markers to slide `index`.
    /// An index without both a slide and a dot is ignored.
    pub fn go_to(&mut self, doc: &mut Document, index: usize) -> bool {
        if index >= self.slides.len() || index >= self.dots.len() {
            warn!(
                "Carousel index {index} out of range ({} slides, {} dots)",
                self.slides.len(),
                self.dots.len()
            );
            return false;
        }

        self.set_active(doc, self.current, false);
        self.current = index;
        self.set_active(doc, index, true);
        true
    }

    fn set_active(&self, doc: &mut Document, index: usize, active: bool) {
        let targets = [
            (&self.slides[index], &self.markup.slide_active_class),
            (&self.dots[index], &self.markup.dot_active_class),
        ];
        for (id, class) in targets {
            if let Some(el) = doc.get_mut(id) {
                if active {
                    el.add_class(class);
                } else {
                    el.remove_class(class);
                }
            }
        }
    }
}
