use common::PropertySummary;
use yew::prelude::*;
use crate::api_client::property::get_properties;
use crate::hooks::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRenderList;
use crate::components::property::property_card::PropertyCard;

/// Listing of every available property.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (properties_state, properties_refetch) = use_fetch_with_refetch(get_properties);

    let render_item = Callback::from(|property: PropertySummary| {
        let key = property.id.clone();
        html! { <PropertyCard key={key} property={property} /> }
    });

    html! {
        <>
            <header class="p-4 sm:p-6 border-b border-gray-200 dark:border-gray-800">
                <h1 class="text-2xl sm:text-3xl font-bold text-center text-gray-900 dark:text-white">
                    {"Available Properties"}
                </h1>
                <p class="text-sm sm:text-base text-center text-gray-600 dark:text-gray-400 mt-1">
                    {"Find your next home"}
                </p>
            </header>

            <section class="p-4 sm:p-8">
                <FetchRenderList<PropertySummary>
                    state={(*properties_state).clone()}
                    render_item={render_item}
                    on_retry={Some(properties_refetch)}
                    loading_text="Loading properties..."
                    empty_message="No properties available."
                    container_class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6"
                />
            </section>
        </>
    }
}
