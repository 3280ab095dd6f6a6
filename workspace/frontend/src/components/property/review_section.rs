use common::Review;
use common::format::rating_label;
use yew::prelude::*;
use crate::api_client::review::get_reviews;
use crate::hooks::use_resource;
use crate::common::fetch_render::FetchRenderList;

#[derive(Properties, PartialEq)]
pub struct ReviewSectionProps {
    /// Reviews are only fetched once this is non-empty
    pub property_id: AttrValue,
}

/// Fetches and lists guest reviews for one property.
#[function_component(ReviewSection)]
pub fn review_section(props: &ReviewSectionProps) -> Html {
    let key = (!props.property_id.is_empty()).then(|| props.property_id.to_string());
    let (reviews_state, reviews_refetch) = use_resource(key, get_reviews);

    let render_item = Callback::from(|review: Review| {
        html! {
            <div key={review.id.clone()} class="p-4 border rounded-lg bg-gray-50 dark:bg-gray-800 dark:border-gray-700 shadow-sm">
                <div class="flex items-center mb-2">
                    <p class="font-semibold text-gray-900 dark:text-white mr-3">{&review.author}</p>
                    <p class="text-yellow-500" aria-label={rating_label(review.rating)}>{review.stars()}</p>
                </div>
                <p class="text-gray-700 dark:text-gray-300">{&review.comment}</p>
            </div>
        }
    });

    html! {
        <div class="mt-8">
            <h3 class="text-2xl font-bold text-gray-800 dark:text-white mb-4">{"Guest Reviews"}</h3>
            <FetchRenderList<Review>
                state={(*reviews_state).clone()}
                render_item={render_item}
                on_retry={Some(reviews_refetch)}
                loading_text="Loading reviews..."
                empty_message="There are no reviews for this property yet."
                container_class="space-y-6"
            />
        </div>
    }
}
