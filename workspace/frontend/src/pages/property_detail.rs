use common::PropertyDetail;
use yew::prelude::*;
use crate::api_client::property::get_property;
use crate::hooks::use_resource;
use crate::common::fetch_render::FetchRender;
use crate::components::property::property_detail::PropertyDetailView;

#[derive(Properties, PartialEq)]
pub struct PropertyDetailPageProps {
    /// Path parameter; an empty id never triggers a fetch
    pub id: AttrValue,
}

#[function_component(PropertyDetailPage)]
pub fn property_detail_page(props: &PropertyDetailPageProps) -> Html {
    let key = (!props.id.is_empty()).then(|| props.id.to_string());
    let (property_state, property_refetch) = use_resource(key, get_property);

    let render = Callback::from(|property: PropertyDetail| {
        html! { <PropertyDetailView property={property} /> }
    });

    html! {
        <FetchRender<PropertyDetail>
            state={(*property_state).clone()}
            render={render}
            on_retry={Some(property_refetch)}
            full_screen={true}
        />
    }
}
