use std::time::Duration;

/// Work a behaviour asks the runtime to do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start (or restart) a repeating ticker that dispatches
    /// `Event::Tick { timer }` every `period`.
    StartTicker { timer: String, period: Duration },
    /// Stop the named ticker.
    StopTicker { timer: String },
}
