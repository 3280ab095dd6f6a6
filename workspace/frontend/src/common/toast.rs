use std::rc::Rc;
use yew::prelude::*;
use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn colors(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600 text-white",
            ToastKind::Error => "bg-red-600 text-white",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

/// Transient notifications, shared through context.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<(String, ToastKind)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Success));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Error));
    }
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList(Vec<Toast>);

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList(toasts))
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| toasts.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = {
        let toasts = toasts.clone();
        let remove_toast = remove_toast.clone();

        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };

            toasts.dispatch(ToastAction::Add(Toast { id, message, kind }));

            let remove_toast = remove_toast.clone();
            let duration_ms = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration_ms, move || remove_toast.emit(id))
                .forget();
        })
    };

    let context = ToastContext {
        toasts: toasts.0.clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
                {for toasts.0.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("flex", "items-center", "gap-3", "px-4", "py-3", "rounded-lg", "shadow-lg", toast.kind.colors())}>
                            <span>{&toast.message}</span>
                            <button class="ml-auto" aria-label="Dismiss" onclick={on_close}>{"×"}</button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
