use common::PropertySummary;
use common::format::price_per_night;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct PropertyCardProps {
    pub property: PropertySummary,
}

#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let property = &props.property;

    html! {
        <Link<Route>
            to={Route::Property { id: property.id.clone() }}
            classes="block border rounded-lg overflow-hidden shadow-lg bg-white dark:bg-gray-900 dark:border-gray-700 hover:shadow-xl transition-shadow duration-300"
        >
            <div class="relative w-full h-48">
                <img
                    src={property.image_url.clone()}
                    alt={format!("Image of {}", property.name)}
                    class="w-full h-full object-cover"
                />
            </div>
            <div class="p-4">
                <h2 class="text-lg font-semibold text-gray-800 dark:text-white">{&property.name}</h2>
                <p class="text-gray-600 dark:text-gray-400 mt-1">{&property.location}</p>
                <p class="text-xl font-bold text-gray-900 dark:text-white mt-2">
                    {price_per_night(property.price)}
                </p>
            </div>
        </Link<Route>>
    }
}
