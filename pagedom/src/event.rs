/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click, targeted at the deepest element under the pointer
    Click {
        target: Option<String>,
        button: MouseButton,
    },
    /// Key press, targeted at the focused element (document if none)
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// A repeating timer fired
    Tick { timer: String },
}

impl Event {
    /// Primary-button click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    /// Key press with no focused element and no modifiers.
    pub fn key(key: Key) -> Self {
        Self::Key {
            target: None,
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn tick(timer: impl Into<String>) -> Self {
        Self::Tick {
            timer: timer.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::Key { .. } => EventKind::Key,
            Self::Tick { .. } => EventKind::Tick,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } | Self::Key { target, .. } => target.as_deref(),
            Self::Tick { .. } => None,
        }
    }
}

/// Event discriminant, used to key listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Key,
    Tick,
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
