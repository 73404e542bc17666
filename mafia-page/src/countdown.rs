//! One-shot discussion timer shown as `MM:SS`.

use log::debug;
use pagedom::Document;

use crate::config::CountdownConfig;
use crate::effect::Effect;

#[derive(Debug, Clone)]
pub struct Countdown {
    config: CountdownConfig,
    remaining: u32,
    running: bool,
    finished: bool,
}

impl Countdown {
    /// Timer name carried by the countdown's tick events.
    pub const TIMER: &'static str = "countdown";

    /// Returns None unless both the start button and display exist.
    pub fn mount(doc: &Document, config: &CountdownConfig) -> Option<Self> {
        if !doc.contains(&config.button_id) || !doc.contains(&config.display_id) {
            return None;
        }
        Some(Self {
            config: config.clone(),
            remaining: config.seconds,
            running: false,
            finished: false,
        })
    }

    pub fn button_id(&self) -> &str {
        &self.config.button_id
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start from the full length, discarding any run in progress.
    pub fn start(&mut self, doc: &mut Document) -> Effect {
        self.remaining = self.config.seconds;
        self.running = true;
        self.finished = false;
        if let Some(el) = doc.get_mut(&self.config.display_id) {
            el.remove_class(&self.config.finished_class);
        }
        self.render(doc);
        debug!("Countdown started: {}s", self.remaining);

        Effect::StartTicker {
            timer: Self::TIMER.to_string(),
            period: self.config.tick_period(),
        }
    }

    /// Advance one second. Returns the stop request when the countdown
    /// reaches zero. Ticks while stopped are ignored.
    pub fn tick(&mut self, doc: &mut Document) -> Option<Effect> {
        if !self.running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        self.render(doc);
        if self.remaining > 0 {
            return None;
        }

        self.running = false;
        self.finished = true;
        if let Some(el) = doc.get_mut(&self.config.display_id) {
            el.add_class(&self.config.finished_class);
        }
        debug!("Countdown finished");
        Some(Effect::StopTicker {
            timer: Self::TIMER.to_string(),
        })
    }

    fn render(&self, doc: &mut Document) {
        if let Some(el) = doc.get_mut(&self.config.display_id) {
            el.set_text(format_clock(self.remaining));
        }
    }
}

/// `MM:SS`, minutes not capped at 59.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
