use common::{BookingField, BookingRequest, BookingValidator, BOOKING_CONFIRMED_MESSAGE};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::api_client::booking::create_booking;
use crate::common::toast::ToastContext;

/// Outcome banner under the submit button.
#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Editing,
    Submitting,
    Failed(String),
    Confirmed,
}

fn input_type(field: BookingField) -> &'static str {
    match field {
        BookingField::Email => "email",
        BookingField::PhoneNumber => "tel",
        _ => "text",
    }
}

#[derive(Properties, PartialEq)]
struct BookingInputProps {
    field: BookingField,
    value: AttrValue,
    on_change: Callback<(BookingField, String)>,
}

#[function_component(BookingInput)]
fn booking_input(props: &BookingInputProps) -> Html {
    let field = props.field;
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div>
            <label for={field.wire_name()} class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                {field.title()}
            </label>
            <input
                type={input_type(field)}
                name={field.wire_name()}
                id={field.wire_name()}
                value={props.value.clone()}
                {oninput}
                required={true}
                class="mt-1 block w-full px-3 py-2 bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
            />
        </div>
    }
}

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    let form = use_state(BookingRequest::default);
    let status = use_state(|| SubmitStatus::Editing);
    let toast_ctx = use_context::<ToastContext>();

    let on_change = {
        let form = form.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            let mut updated = (*form).clone();
            updated.set(field, value);
            form.set(updated);
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = (*form).clone();

            if let Err(err) = BookingValidator::default().validate(&request) {
                log::debug!("Booking form rejected: {}", err);
                status.set(SubmitStatus::Failed(err.to_string()));
                return;
            }

            status.set(SubmitStatus::Submitting);
            let form = form.clone();
            let status = status.clone();
            let toast_ctx = toast_ctx.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match create_booking(&request).await {
                    Ok(()) => {
                        form.set(BookingRequest::default());
                        status.set(SubmitStatus::Confirmed);
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_success(BOOKING_CONFIRMED_MESSAGE.to_string());
                        }
                    }
                    Err(err) => status.set(SubmitStatus::Failed(err.to_string())),
                }
            });
        })
    };

    let submitting = *status == SubmitStatus::Submitting;
    let inputs = |payment: bool| -> Html {
        BookingField::ALL
            .into_iter()
            .filter(|field| field.is_payment() == payment)
            .map(|field| html! {
                <BookingInput
                    key={field.wire_name()}
                    field={field}
                    value={form.get(field).to_string()}
                    on_change={on_change.clone()}
                />
            })
            .collect()
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-black flex items-center justify-center p-4">
            <div class="w-full max-w-lg p-8 space-y-6 bg-white dark:bg-gray-900 rounded-xl shadow-lg">
                <h1 class="text-3xl font-bold text-center text-gray-900 dark:text-white">{"Confirm Your Booking"}</h1>
                <form onsubmit={on_submit} class="space-y-4">
                    { inputs(false) }

                    <div class="border-t border-gray-200 dark:border-gray-700 pt-4">
                        <h2 class="text-xl font-semibold text-gray-800 dark:text-white">{"Payment Information"}</h2>
                    </div>
                    { inputs(true) }

                    <button
                        type="submit"
                        disabled={submitting}
                        class="w-full flex justify-center py-3 px-4 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-400"
                    >
                        { if submitting { "Processing..." } else { "Confirm & Pay" } }
                    </button>

                    { match &*status {
                        SubmitStatus::Failed(message) => html! {
                            <p class="text-sm text-center text-red-500">{message}</p>
                        },
                        SubmitStatus::Confirmed => html! {
                            <p class="text-sm text-center text-green-500">{BOOKING_CONFIRMED_MESSAGE}</p>
                        },
                        _ => html! {},
                    } }
                </form>
            </div>
        </div>
    }
}
