use common::PropertyDetail;
use common::format::price_per_night;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;
use super::review_section::ReviewSection;

#[derive(Properties, PartialEq)]
pub struct PropertyDetailViewProps {
    pub property: PropertyDetail,
}

#[function_component(PropertyDetailView)]
pub fn property_detail_view(props: &PropertyDetailViewProps) -> Html {
    let property = &props.property;

    html! {
        <div class="max-w-4xl mx-auto p-4 sm:p-6">
            <div class="relative w-full h-64 sm:h-96 rounded-lg overflow-hidden mb-6 bg-gray-200">
                <img
                    src={property.image_url.clone()}
                    alt={format!("Image of {}", property.name)}
                    class="w-full h-full object-cover"
                />
            </div>
            <h1 class="text-3xl sm:text-4xl font-bold text-gray-900 dark:text-white">{&property.name}</h1>
            <p class="text-lg text-gray-600 dark:text-gray-400 mt-1">{&property.location}</p>
            <p class="text-2xl font-bold text-gray-800 dark:text-white mt-4">{price_per_night(property.price)}</p>
            <p class="mt-4 text-gray-700 dark:text-gray-300">{&property.description}</p>

            <div class="mt-6">
                <h2 class="text-2xl font-bold text-gray-800 dark:text-white mb-3">{"Amenities"}</h2>
                <ul class="grid grid-cols-2 sm:grid-cols-3 gap-2">
                    { for property.amenities.iter().map(|amenity| html! {
                        <li key={amenity.clone()} class="text-gray-700 dark:text-gray-300">{amenity}</li>
                    }) }
                </ul>
            </div>

            <div class="mt-6">
                <Link<Route> to={Route::Booking} classes="inline-block px-6 py-3 bg-indigo-600 text-white rounded-md hover:bg-indigo-700">
                    {"Book this property"}
                </Link<Route>>
            </div>

            <ReviewSection property_id={property.id.clone()} />
        </div>
    }
}
