use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::Loading;
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub loading_text: AttrValue,
    #[prop_or_default]
    pub full_screen: bool,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.full_screen == other.full_screen
    }
}

/// Component that handles rendering based on FetchState
/// - Idle: renders nothing
/// - Loading: shows the loading text
/// - Failed: shows the error with optional retry
/// - Loaded: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Idle => html! {},
        FetchState::Loading => html! {
            <Loading text={props.loading_text.clone()} full_screen={props.full_screen} />
        },
        FetchState::Failed(message) => html! {
            <ErrorDisplay message={message.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Loaded(data) => props.render.emit(data.clone()),
    }
}

/// Helper for rendering lists with empty state handling
#[derive(Properties)]
pub struct FetchRenderListProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<Vec<T>>,
    pub render_item: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub loading_text: AttrValue,
    #[prop_or(AttrValue::Static("No items found."))]
    pub empty_message: AttrValue,
    #[prop_or(AttrValue::Static("space-y-4"))]
    pub container_class: AttrValue,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderListProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.empty_message == other.empty_message
            && self.container_class == other.container_class
    }
}

#[function_component(FetchRenderList)]
pub fn fetch_render_list<T>(props: &FetchRenderListProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let render = {
        let render_item = props.render_item.clone();
        let empty_message = props.empty_message.clone();
        let container_class = props.container_class.clone();

        Callback::from(move |items: Vec<T>| {
            if items.is_empty() {
                html! {
                    <p class="text-gray-600 dark:text-gray-400">{empty_message.clone()}</p>
                }
            } else {
                html! {
                    <div class={container_class.clone()}>
                        { for items.iter().map(|item| render_item.emit(item.clone())) }
                    </div>
                }
            }
        })
    };

    html! {
        <FetchRender<Vec<T>>
            state={props.state.clone()}
            render={render}
            on_retry={props.on_retry.clone()}
            loading_text={props.loading_text.clone()}
        />
    }
}
