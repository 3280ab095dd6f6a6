use yew::prelude::*;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-black">
            <Header />
            <main>
                { for props.children.iter() }
            </main>
        </div>
    }
}
