//! Keyed remote-resource lifecycle.
//!
//! [`FetchController`] tracks what the view should show for a resource
//! identified by an optional key. It performs no I/O: every time a request
//! has to be issued it hands back a [`Ticket`], and the driver (a Yew hook in
//! the browser, a tokio task natively) feeds the outcome back through
//! [`FetchController::resolve`]. Each key change bumps the epoch so results
//! from superseded requests are dropped on arrival, whatever order the
//! network completes them in.

use std::fmt::Debug;

use tracing::{debug, trace};

use crate::error::FetchError;

/// Monotonic request counter.
pub type Epoch = u64;

/// What a view renders for a remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// No key observed yet, or the key was cleared
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// A request the driver must issue on behalf of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub epoch: Epoch,
    pub key: K,
}

/// Outcome of feeding a settled request back into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    /// The request was superseded (or already settled) and its result dropped
    Stale,
}

/// State machine for a single keyed resource.
#[derive(Debug)]
pub struct FetchController<K, T> {
    key: Option<K>,
    epoch: Epoch,
    state: FetchState<T>,
}

impl<K, T> Default for FetchController<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            epoch: 0,
            state: FetchState::Idle,
        }
    }
}

impl<K, T> FetchController<K, T>
where
    K: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Processes a key observation.
    ///
    /// Returns the ticket to fetch when the key changed to a new present
    /// value. Re-observing the current key is a no-op.
    pub fn observe(&mut self, key: Option<K>) -> Option<Ticket<K>> {
        if key == self.key {
            trace!(?key, epoch = self.epoch, "Key unchanged, nothing to do");
            return None;
        }

        self.epoch += 1;
        self.key = key.clone();

        match key {
            None => {
                debug!(epoch = self.epoch, "Key cleared, resource is idle");
                self.state = FetchState::Idle;
                None
            }
            Some(key) => {
                debug!(?key, epoch = self.epoch, "Key changed, starting fetch");
                self.state = FetchState::Loading;
                Some(Ticket {
                    epoch: self.epoch,
                    key,
                })
            }
        }
    }

    /// Re-issues the request for the current key. Does nothing while idle.
    pub fn refresh(&mut self) -> Option<Ticket<K>> {
        let key = self.key.clone()?;
        self.epoch += 1;
        debug!(?key, epoch = self.epoch, "Refreshing resource");
        self.state = FetchState::Loading;
        Some(Ticket {
            epoch: self.epoch,
            key,
        })
    }

    /// Applies the result of the request started for `epoch`.
    pub fn resolve(&mut self, epoch: Epoch, result: Result<T, FetchError>) -> Settlement {
        if epoch != self.epoch || !self.state.is_loading() {
            trace!(
                epoch,
                current = self.epoch,
                state = self.state.label(),
                "Dropping stale result"
            );
            return Settlement::Stale;
        }

        self.state = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(err) => {
                debug!(epoch, error = %err, "Fetch failed");
                FetchState::Failed(err.message())
            }
        };
        trace!(epoch, state = self.state.label(), "Result applied");
        Settlement::Applied
    }
}
