//! Tokio driver for [`FetchController`].
//!
//! Fetches run as spawned tasks and report back through a channel; the owner
//! applies them with [`Resource::settle_next`] so every state change happens
//! on the owner's side, in epoch order.

use common::{Epoch, FetchController, FetchError, FetchState, Settlement, Ticket};
use std::fmt::Debug;
use std::future::Future;
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace, warn};

type Completion<T> = (Epoch, Result<T, FetchError>);

pub struct Resource<K, T, F> {
    controller: FetchController<K, T>,
    fetcher: F,
    completions_tx: mpsc::UnboundedSender<Completion<T>>,
    completions_rx: mpsc::UnboundedReceiver<Completion<T>>,
    state_tx: watch::Sender<FetchState<T>>,
    in_flight: usize,
    calls: usize,
}

impl<K, T, F, Fut> Resource<K, T, F>
where
    K: Clone + PartialEq + Debug,
    T: Clone + Send + 'static,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    pub fn new(fetcher: F) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(FetchState::Idle);
        Self {
            controller: FetchController::new(),
            fetcher,
            completions_tx,
            completions_rx,
            state_tx,
            in_flight: 0,
            calls: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        self.controller.state()
    }

    /// Number of times the fetcher has been invoked.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Receives every state the resource moves through from now on.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state_tx.subscribe()
    }

    pub fn observe(&mut self, key: Option<K>) {
        let epoch = self.controller.epoch();
        let ticket = self.controller.observe(key);
        if self.controller.epoch() != epoch {
            self.publish();
        }
        if let Some(ticket) = ticket {
            self.spawn(ticket);
        }
    }

    /// Fetches the current key again; ignored while idle.
    pub fn refresh(&mut self) {
        if let Some(ticket) = self.controller.refresh() {
            self.publish();
            self.spawn(ticket);
        }
    }

    /// Waits for the next request to finish and applies it.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn settle_next(&mut self) -> Option<Settlement> {
        if self.in_flight == 0 {
            return None;
        }
        let (epoch, result) = self.completions_rx.recv().await?;
        self.in_flight -= 1;

        let settlement = self.controller.resolve(epoch, result);
        match settlement {
            Settlement::Applied => self.publish(),
            Settlement::Stale => trace!(epoch, "Ignored completion of superseded request"),
        }
        Some(settlement)
    }

    /// Drives completions until the resource stops loading.
    pub async fn settled(&mut self) -> &FetchState<T> {
        while self.controller.state().is_loading() {
            if self.settle_next().await.is_none() {
                break;
            }
        }
        self.controller.state()
    }

    fn spawn(&mut self, ticket: Ticket<K>) {
        debug!(key = ?ticket.key, epoch = ticket.epoch, "Issuing fetch");
        self.calls += 1;
        self.in_flight += 1;

        let epoch = ticket.epoch;
        let request = (self.fetcher)(ticket.key);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            // A panicking fetcher must still settle its epoch.
            let result = match tokio::spawn(request).await {
                Ok(result) => result,
                Err(e) => {
                    warn!(epoch, "Fetch task did not complete: {}", e);
                    Err(FetchError::network(format!("fetch task did not complete: {}", e)))
                }
            };
            // The receiver lives as long as the resource; a send error only
            // means the owner is gone.
            let _ = completions.send((epoch, result));
        });
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.controller.state().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::FALLBACK_ERROR_MESSAGE;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    struct Listing {
        id: String,
        name: String,
    }

    fn listing(id: &str, name: &str) -> Listing {
        Listing {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    type Reply = Result<Listing, FetchError>;

    /// Holds each issued request open until the test answers it.
    #[derive(Default)]
    struct Gate {
        pending: Mutex<HashMap<String, Vec<oneshot::Sender<Reply>>>>,
    }

    impl Gate {
        fn answer(&self, key: &str, reply: Reply) {
            let sender = self
                .pending
                .lock()
                .unwrap()
                .get_mut(key)
                .and_then(|senders| (!senders.is_empty()).then(|| senders.remove(0)))
                .expect("no request pending for key");
            sender.send(reply).unwrap();
        }
    }

    fn gated(
        gate: Arc<Gate>,
    ) -> impl Fn(String) -> std::pin::Pin<Box<dyn Future<Output = Reply> + Send>> {
        move |key: String| {
            let (tx, rx) = oneshot::channel();
            gate.pending.lock().unwrap().entry(key).or_default().push(tx);
            Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(FetchError::network("request abandoned")))
            })
        }
    }

    #[tokio::test]
    async fn loads_data_for_present_key() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));
        let states = resource.subscribe();
        assert!(resource.state().is_idle());

        resource.observe(Some("p1".to_string()));
        assert!(resource.state().is_loading());
        assert!(states.borrow().is_loading());

        gate.answer("p1", Ok(listing("p1", "Cabin")));
        let state = resource.settled().await;
        assert_eq!(state, &FetchState::Loaded(listing("p1", "Cabin")));
        assert_eq!(*states.borrow(), FetchState::Loaded(listing("p1", "Cabin")));
    }

    #[tokio::test]
    async fn failure_is_reported_with_its_message() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p2".to_string()));
        gate.answer("p2", Err(FetchError::status(404, "not found")));

        assert_eq!(
            resource.settled().await,
            &FetchState::Failed("not found".to_string())
        );
    }

    #[tokio::test]
    async fn blank_error_uses_fallback_message() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p3".to_string()));
        gate.answer("p3", Err(FetchError::network("")));

        assert_eq!(
            resource.settled().await,
            &FetchState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn absent_key_never_fetches() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate));

        resource.observe(None);
        assert_eq!(resource.calls(), 0);
        assert!(resource.state().is_idle());
        assert_eq!(resource.settle_next().await, None);
    }

    #[tokio::test]
    async fn same_key_fetches_once() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p1".to_string()));
        resource.observe(Some("p1".to_string()));
        assert_eq!(resource.calls(), 1);

        gate.answer("p1", Ok(listing("p1", "Cabin")));
        resource.settled().await;
        resource.observe(Some("p1".to_string()));
        assert_eq!(resource.calls(), 1);
        assert!(resource.state().is_loaded());
    }

    #[tokio::test]
    async fn older_request_finishing_last_cannot_win() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p1".to_string()));
        resource.observe(Some("p2".to_string()));
        assert_eq!(resource.calls(), 2);

        gate.answer("p2", Ok(listing("p2", "Villa")));
        assert_eq!(resource.settle_next().await, Some(Settlement::Applied));

        gate.answer("p1", Ok(listing("p1", "Cabin")));
        assert_eq!(resource.settle_next().await, Some(Settlement::Stale));

        assert_eq!(resource.state(), &FetchState::Loaded(listing("p2", "Villa")));
    }

    #[tokio::test]
    async fn older_request_finishing_first_is_dropped() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p1".to_string()));
        resource.observe(Some("p2".to_string()));

        gate.answer("p1", Err(FetchError::network("timeout")));
        assert_eq!(resource.settle_next().await, Some(Settlement::Stale));
        assert!(resource.state().is_loading());

        gate.answer("p2", Ok(listing("p2", "Villa")));
        assert_eq!(resource.settled().await, &FetchState::Loaded(listing("p2", "Villa")));
    }

    #[tokio::test]
    async fn clearing_key_discards_pending_result() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.observe(Some("p1".to_string()));
        resource.observe(None);
        assert!(resource.state().is_idle());

        gate.answer("p1", Ok(listing("p1", "Cabin")));
        assert_eq!(resource.settle_next().await, Some(Settlement::Stale));
        assert!(resource.state().is_idle());
    }

    #[tokio::test]
    async fn refresh_fetches_current_key_again() {
        let gate = Arc::new(Gate::default());
        let mut resource = Resource::new(gated(gate.clone()));

        resource.refresh();
        assert_eq!(resource.calls(), 0);

        resource.observe(Some("p1".to_string()));
        gate.answer("p1", Ok(listing("p1", "Cabin")));
        resource.settled().await;

        resource.refresh();
        assert_eq!(resource.calls(), 2);
        assert!(resource.state().is_loading());

        gate.answer("p1", Ok(listing("p1", "Cabin, renovated")));
        assert_eq!(
            resource.settled().await,
            &FetchState::Loaded(listing("p1", "Cabin, renovated"))
        );
    }

    #[tokio::test]
    async fn panicking_fetcher_settles_as_failed() {
        let mut resource = Resource::new(|key: String| async move {
            let reply: Reply = if key == "boom" {
                panic!("fetcher blew up");
            } else {
                Ok(listing(&key, "Cabin"))
            };
            reply
        });

        resource.observe(Some("boom".to_string()));
        let state = tokio::time::timeout(std::time::Duration::from_secs(5), resource.settled())
            .await
            .expect("resource never settled")
            .clone();

        let FetchState::Failed(message) = &state else {
            panic!("expected failed state, got {:?}", state);
        };
        assert!(message.starts_with("Request failed: fetch task did not complete"));
        assert_eq!(resource.settle_next().await, None);

        resource.observe(Some("p1".to_string()));
        assert_eq!(resource.settled().await, &FetchState::Loaded(listing("p1", "Cabin")));
    }
}
