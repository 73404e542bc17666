//! Page configuration: the markup names each behaviour looks for and the
//! countdown length.
//!
//! Every section has `#[serde(default)]`, so a config file only needs the
//! keys it changes:
//!
//! ```json
//! { "countdown": { "seconds": 60 } }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub table: TableMarkup,
    pub carousel: CarouselMarkup,
    pub modals: Vec<ModalMarkup>,
    pub countdown: CountdownConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            table: TableMarkup::default(),
            carousel: CarouselMarkup::default(),
            modals: vec![ModalMarkup::named("role"), ModalMarkup::named("mode")],
            countdown: CountdownConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.countdown.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(config)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Read a config file, falling back to defaults when there is no path
    /// or the file does not exist. A file that exists but is unreadable or
    /// malformed is still an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// Markup contract of sortable tables.
///
/// Attribute keys are `data-*` names without the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableMarkup {
    /// Class marking a table as sortable.
    pub table_class: String,
    /// Header attribute declaring the column's value type.
    pub type_key: String,
    /// Value of `type_key` selecting numeric comparison.
    /// Any other declared value compares as text.
    pub numeric_type: String,
    /// Header attribute recording the current direction.
    pub direction_key: String,
    pub ascending_value: String,
    pub descending_value: String,
    /// Cell attribute overriding the cell text as its sort value.
    pub value_key: String,
    /// Header markers.
    pub sortable_class: String,
    pub ascending_class: String,
    pub descending_class: String,
}

impl Default for TableMarkup {
    fn default() -> Self {
        Self {
            table_class: "sortable-table".into(),
            type_key: "sort-type".into(),
            numeric_type: "number".into(),
            direction_key: "sort-dir".into(),
            ascending_value: "asc".into(),
            descending_value: "desc".into(),
            value_key: "sort-value".into(),
            sortable_class: "sortable".into(),
            ascending_class: "sort-asc".into(),
            descending_class: "sort-desc".into(),
        }
    }
}

/// Markup contract of the hero slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselMarkup {
    pub slide_class: String,
    pub dot_class: String,
    pub slide_active_class: String,
    pub dot_active_class: String,
}

impl Default for CarouselMarkup {
    fn default() -> Self {
        Self {
            slide_class: "hero-slide".into(),
            dot_class: "hero-dot".into(),
            slide_active_class: "hero-slide-active".into(),
            dot_active_class: "dot-active".into(),
        }
    }
}

/// Markup contract of one modal instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalMarkup {
    pub name: String,
    /// Attribute marking a clickable card.
    pub card_key: String,
    pub card_title_class: String,
    pub card_body_class: String,
    pub backdrop_id: String,
    pub title_id: String,
    pub text_id: String,
    pub close_id: String,
    pub open_class: String,
}

impl Default for ModalMarkup {
    fn default() -> Self {
        Self::named("role")
    }
}

impl ModalMarkup {
    /// Markup following the `<name>-card` / `<name>-modal` naming scheme.
    /// Every instance shares the `role-modal-backdrop-open` class.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            card_key: format!("{name}-card"),
            card_title_class: format!("{name}-card-title"),
            card_body_class: format!("{name}-card-full"),
            backdrop_id: format!("{name}-modal"),
            title_id: format!("{name}-modal-title"),
            text_id: format!("{name}-modal-text"),
            close_id: format!("{name}-modal-close"),
            open_class: "role-modal-backdrop-open".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub button_id: String,
    pub display_id: String,
    pub finished_class: String,
    /// Length of one countdown.
    pub seconds: u32,
    /// Tick period in milliseconds. Must be non-zero in a config file.
    pub tick_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            button_id: "timer-start".into(),
            display_id: "timer-display".into(),
            finished_class: "timer-finished".into(),
            seconds: 90,
            tick_ms: 1000,
        }
    }
}

impl CountdownConfig {
    /// Never shorter than 1ms, even for a config built in code with
    /// `tick_ms: 0`.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
