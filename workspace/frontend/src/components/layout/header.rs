use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

/// Accommodation categories shown under the search bar.
pub const ACCOMMODATION_TYPES: [&str; 8] = [
    "Rooms",
    "Mansions",
    "Countryside",
    "Beachfront",
    "Cabins",
    "Luxury",
    "Tiny homes",
    "Treehouses",
];

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="sticky top-0 z-50 bg-white shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between py-4">
                    <Link<Route> to={Route::Home} classes="flex items-center">
                        <svg class="h-8 w-8 text-rose-500" viewBox="0 0 24 24" fill="currentColor">
                            <path d="M12 2L2 7v10l10 5 10-5V7L12 2z" />
                        </svg>
                        <span class="ml-2 text-xl font-bold text-gray-800">{"StayEase"}</span>
                    </Link<Route>>

                    <div class="hidden md:flex items-center relative flex-1 mx-8">
                        <input
                            type="text"
                            placeholder="Search destinations, properties..."
                            class="w-full py-2 px-4 border border-gray-300 rounded-full focus:outline-none focus:ring-2 focus:ring-rose-500"
                        />
                    </div>

                    <div class="flex items-center space-x-4">
                        <Link<Route> to={Route::Booking} classes="px-4 py-2 bg-rose-500 text-white rounded-full hover:bg-rose-600 transition">
                            {"Book a stay"}
                        </Link<Route>>
                    </div>
                </div>

                <nav class="flex overflow-x-auto py-3">
                    { for ACCOMMODATION_TYPES.iter().map(|kind| html! {
                        <button
                            key={*kind}
                            class="px-4 py-2 whitespace-nowrap text-gray-600 hover:text-rose-500 hover:bg-rose-50 rounded-full transition mx-1"
                        >
                            {*kind}
                        </button>
                    }) }
                </nav>
            </div>
        </header>
    }
}
