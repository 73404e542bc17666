use log::{debug, trace};
use pagedom::{Document, Event, EventKind, Key, Listeners, MouseButton};

use crate::carousel::Carousel;
use crate::config::PageConfig;
use crate::countdown::Countdown;
use crate::effect::Effect;
use crate::modal::Modal;
use crate::sort::TableSorter;

/// What to run when a listener fires. Indices point into the page's
/// `modals`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Listener {
    SortHeader(String),
    CarouselDot(usize),
    ModalCard { modal: usize, card: String },
    ModalClose(usize),
    ModalBackdrop(usize),
    ModalEscape(usize),
    CountdownStart,
}

/// A mounted page: the document plus every behaviour bound to it.
#[derive(Debug)]
pub struct Page {
    document: Document,
    sorter: TableSorter,
    carousel: Option<Carousel>,
    modals: Vec<Modal>,
    countdown: Option<Countdown>,
    listeners: Listeners<Listener>,
}

impl Page {
    /// Mount every behaviour whose markup is present and register its
    /// listeners.
    pub fn mount(mut document: Document, config: &PageConfig) -> Self {
        let mut listeners = Listeners::new();

        let sorter = TableSorter::mount(&mut document, &config.table);
        for binding in sorter.bindings() {
            listeners.on(
                binding.header_id.clone(),
                EventKind::Click,
                Listener::SortHeader(binding.header_id.clone()),
            );
        }

        let carousel = Carousel::mount(&document, &config.carousel);
        if let Some(carousel) = &carousel {
            for (index, dot) in carousel.dots().iter().enumerate() {
                listeners.on(dot.clone(), EventKind::Click, Listener::CarouselDot(index));
            }
        }

        let modals: Vec<Modal> = config
            .modals
            .iter()
            .filter_map(|markup| Modal::mount(&document, markup))
            .collect();
        for (index, modal) in modals.iter().enumerate() {
            if let Some(close) = modal.close_id() {
                listeners.on(close, EventKind::Click, Listener::ModalClose(index));
            }
            listeners.on(
                modal.backdrop_id(),
                EventKind::Click,
                Listener::ModalBackdrop(index),
            );
            listeners.on_document(EventKind::Key, Listener::ModalEscape(index));
            for card in modal.cards() {
                listeners.on(
                    card.clone(),
                    EventKind::Click,
                    Listener::ModalCard {
                        modal: index,
                        card: card.clone(),
                    },
                );
            }
        }

        let countdown = Countdown::mount(&document, &config.countdown);
        if let Some(countdown) = &countdown {
            listeners.on(
                countdown.button_id(),
                EventKind::Click,
                Listener::CountdownStart,
            );
        }

        debug!("Page mounted with {} listener(s)", listeners.len());
        Self {
            document,
            sorter,
            carousel,
            modals,
            countdown,
            listeners,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn sorter(&self) -> &TableSorter {
        &self.sorter
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn modal(&self, name: &str) -> Option<&Modal> {
        self.modals.iter().find(|m| m.name() == name)
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    /// Run one event to completion and return the effects it requested.
    ///
    /// Clicks bubble from the target up to the body; only primary-button
    /// clicks count. Key events reach document listeners. Events aimed at
    /// elements that are not in the document are ignored.
    pub fn dispatch(&mut self, event: &Event) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            Event::Click { target, button } => {
                if *button != MouseButton::Left {
                    return effects;
                }
                let Some(target) = target.as_deref() else {
                    return effects;
                };
                let Some(path) = self.document.path(target) else {
                    trace!("Click on unknown element {target}");
                    return effects;
                };
                for listener in self.resolve(&path, EventKind::Click) {
                    self.run_click(&listener, target, &mut effects);
                }
            }
            Event::Key { target, key, .. } => {
                if *key != Key::Escape {
                    return effects;
                }
                let path = target
                    .as_deref()
                    .and_then(|t| self.document.path(t))
                    .unwrap_or_default();
                for listener in self.resolve(&path, EventKind::Key) {
                    if let Listener::ModalEscape(index) = listener {
                        self.modals[index].close(&mut self.document);
                    }
                }
            }
            Event::Tick { timer } => {
                if timer == Countdown::TIMER {
                    if let Some(countdown) = &mut self.countdown {
                        effects.extend(countdown.tick(&mut self.document));
                    }
                }
            }
        }

        effects
    }

    fn resolve(&self, path: &[String], kind: EventKind) -> Vec<Listener> {
        self.listeners
            .resolve(path, kind)
            .into_iter()
            .cloned()
            .collect()
    }

    fn run_click(&mut self, listener: &Listener, target: &str, effects: &mut Vec<Effect>) {
        trace!("Click on {target} runs {listener:?}");
        match listener {
            Listener::SortHeader(header) => {
                self.sorter.on_header_click(&mut self.document, header);
            }
            Listener::CarouselDot(index) => {
                if let Some(carousel) = &mut self.carousel {
                    carousel.go_to(&mut self.document, *index);
                }
            }
            Listener::ModalCard { modal, card } => {
                self.modals[*modal].open_card(&mut self.document, card);
            }
            Listener::ModalClose(modal) => {
                self.modals[*modal].close(&mut self.document);
            }
            Listener::ModalBackdrop(modal) => {
                self.modals[*modal].on_backdrop_click(&mut self.document, target);
            }
            Listener::CountdownStart => {
                if let Some(countdown) = &mut self.countdown {
                    effects.push(countdown.start(&mut self.document));
                }
            }
            Listener::ModalEscape(_) => {}
        }
    }
}
