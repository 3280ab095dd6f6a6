use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::booking::BookingPage;
use crate::pages::home::HomePage;
use crate::pages::property_detail::PropertyDetailPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/property/:id")]
    Property { id: String },
    #[at("/booking")]
    Booking,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering property listing");
            html! { <Layout><HomePage /></Layout> }
        }
        Route::Property { id } => {
            log::trace!("Rendering property detail page for ID: {}", id);
            html! { <Layout><PropertyDetailPage id={id} /></Layout> }
        }
        Route::Booking => {
            log::trace!("Rendering booking form");
            html! { <Layout><BookingPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <Layout>
                    <div class="flex justify-center items-center min-h-screen">
                        <p class="text-lg">{"Page not found."}</p>
                    </div>
                </Layout>
            }
        }
    }
}
