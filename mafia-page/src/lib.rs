//! Page behaviours for the mafia assistant site.
//!
//! Each behaviour mounts onto a [`pagedom::Document`] and reacts to
//! [`pagedom::Event`]s dispatched through a [`Page`]:
//!
//! - [`sort`] - click-to-sort tables
//! - [`carousel`] - hero banner slider
//! - [`modal`] - role and mode description popups
//! - [`countdown`] - the 90 second discussion timer
//!
//! [`PageRuntime`] adds the tokio ticker the countdown needs.

pub mod carousel;
pub mod config;
pub mod countdown;
pub mod effect;
pub mod error;
pub mod modal;
pub mod page;
pub mod paths;
pub mod runtime;
pub mod sort;

pub use carousel::Carousel;
pub use config::{CarouselMarkup, CountdownConfig, ModalMarkup, PageConfig, TableMarkup};
pub use countdown::Countdown;
pub use effect::Effect;
pub use error::ConfigError;
pub use modal::Modal;
pub use page::Page;
pub use runtime::PageRuntime;
pub use sort::{SortDirection, SortType, TableSorter};
