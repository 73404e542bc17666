//! Async driver for a [`Page`].
//!
//! Page behaviours are synchronous; the only thing they cannot do alone is
//! wait. `PageRuntime` dispatches events under a single lock and turns
//! [`Effect`]s into tokio ticker tasks that feed `Tick` events back through
//! the same lock, so clicks and ticks never interleave mid-event.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, trace};
use pagedom::Event;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;

use crate::effect::Effect;
use crate::page::Page;

#[derive(Debug)]
struct Shared {
    page: Page,
    tickers: HashMap<String, CancellationToken>,
}

#[derive(Debug, Clone)]
pub struct PageRuntime {
    shared: Arc<Mutex<Shared>>,
}

impl PageRuntime {
    pub fn new(page: Page) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                page,
                tickers: HashMap::new(),
            })),
        }
    }

    /// Dispatch an event and apply its effects.
    ///
    /// Must be called from within a tokio runtime, since starting a ticker
    /// spawns a task.
    pub fn dispatch(&self, event: &Event) {
        let mut shared = lock(&self.shared);
        let effects = shared.page.dispatch(event);
        apply(&self.shared, &mut shared, effects);
    }

    /// Read page state.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&lock(&self.shared).page)
    }

    /// Names of the tickers currently running.
    pub fn active_tickers(&self) -> Vec<String> {
        let shared = lock(&self.shared);
        let mut names: Vec<String> = shared
            .tickers
            .iter()
            .filter(|(_, token)| !token.is_cancelled())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Stop every ticker.
    pub fn shutdown(&self) {
        let mut shared = lock(&self.shared);
        for (name, token) in shared.tickers.drain() {
            debug!("Stopping ticker {name}");
            token.cancel();
        }
    }
}

// A panic while dispatching leaves the page in whatever state the event
// reached; keep serving rather than poisoning every later event.
fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn apply(handle: &Arc<Mutex<Shared>>, shared: &mut Shared, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::StartTicker { timer, period } => {
                if let Some(previous) = shared.tickers.remove(&timer) {
                    previous.cancel();
                }
                let token = CancellationToken::new();
                shared.tickers.insert(timer.clone(), token.clone());
                spawn_ticker(Arc::clone(handle), timer, period, token);
            }
            Effect::StopTicker { timer } => {
                if let Some(token) = shared.tickers.remove(&timer) {
                    token.cancel();
                }
            }
        }
    }
}

fn spawn_ticker(
    handle: Arc<Mutex<Shared>>,
    timer: String,
    period: Duration,
    token: CancellationToken,
) {
    debug!("Starting ticker {timer} every {period:?}");
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => break,
                _ = interval.tick() => {
                    let mut shared = lock(&handle);
                    // Restarted or stopped while waiting for the lock
                    if token.is_cancelled() {
                        break;
                    }
                    trace!("Tick {timer}");
                    let effects = shared.page.dispatch(&Event::tick(timer.clone()));
                    apply(&handle, &mut shared, effects);
                }
            }
        }
        trace!("Ticker {timer} stopped");
    });
}
