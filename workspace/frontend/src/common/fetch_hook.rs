use yew::prelude::*;
use std::cell::RefCell;
use std::fmt::Debug;
use std::future::Future;
use std::rc::Rc;
use common::{FetchController, Settlement, Ticket};
use crate::hooks::{FetchError, FetchState};
use crate::common::toast::ToastContext;

type SharedController<K, T> = Rc<RefCell<FetchController<K, T>>>;

/// Runs `ticket` on the browser event loop and feeds the result back.
fn spawn_fetch<K, T, F, Fut>(
    ticket: Ticket<K>,
    controller: SharedController<K, T>,
    state: UseStateHandle<FetchState<T>>,
    fetch_fn: Rc<F>,
    toast_ctx: Option<ToastContext>,
) where
    K: Clone + PartialEq + Debug + 'static,
    T: Clone + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let Ticket { epoch, key } = ticket;
        let result = (*fetch_fn)(key).await;

        // Release the borrow before `set`, which may re-render synchronously.
        let applied = {
            let mut controller = controller.borrow_mut();
            match controller.resolve(epoch, result) {
                Settlement::Applied => Some(controller.state().clone()),
                Settlement::Stale => None,
            }
        };

        match applied {
            Some(next) => {
                if let (FetchState::Failed(message), Some(toast_ctx)) = (&next, &toast_ctx) {
                    toast_ctx.show_error(message.clone());
                }
                state.set(next);
            }
            None => log::trace!("Discarding result of superseded request (epoch {})", epoch),
        }
    });
}

/// Fetches the resource identified by `key`, re-fetching whenever the key
/// changes. A `None` key keeps the resource idle and never calls `fetch_fn`.
///
/// Returns the current state and a callback that re-fetches the current key.
#[hook]
pub fn use_resource<K, T, F, Fut>(
    key: Option<K>,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    K: Clone + PartialEq + Debug + 'static,
    T: Clone + 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let controller: SharedController<K, T> = use_mut_ref(FetchController::new);
    let fetch_state = use_state(|| FetchState::Idle);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let controller = controller.clone();
        let fetch_state = fetch_state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let ticket = controller.borrow_mut().refresh();
            let Some(ticket) = ticket else {
                log::debug!("Refresh requested while idle, ignoring");
                return;
            };
            fetch_state.set(FetchState::Loading);
            spawn_fetch(
                ticket,
                controller.clone(),
                fetch_state.clone(),
                (*fetch_fn).clone(),
                toast_ctx.clone(),
            );
        })
    };

    // Re-observe whenever the key changes
    {
        let controller = controller.clone();
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_effect_with(key, move |key| {
            let (ticket, changed, next) = {
                let mut controller = controller.borrow_mut();
                let before = controller.epoch();
                let ticket = controller.observe(key.clone());
                (ticket, controller.epoch() != before, controller.state().clone())
            };

            if changed {
                fetch_state.set(next);
            }
            if let Some(ticket) = ticket {
                spawn_fetch(ticket, controller, fetch_state, (*fetch_fn).clone(), toast_ctx);
            }
            || ()
        });
    }

    (fetch_state, refetch)
}

/// Unkeyed variant: fetches once on mount.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    use_resource(Some(()), move |()| fetch_fn())
}
