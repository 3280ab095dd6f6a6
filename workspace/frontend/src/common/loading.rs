use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub text: AttrValue,
    /// Fill the viewport instead of the surrounding block
    #[prop_or_default]
    pub full_screen: bool,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let container = if props.full_screen {
        "flex justify-center items-center min-h-screen"
    } else {
        "mt-8 text-center"
    };

    html! {
        <div class={container}>
            <p class="text-gray-500">{props.text.clone()}</p>
        </div>
    }
}
