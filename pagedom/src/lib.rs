pub mod document;
pub mod element;
pub mod event;
pub mod listeners;
pub mod path;

pub use document::Document;
pub use element::{Content, Element};
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use listeners::Listeners;
pub use path::{event_path, is_within};
