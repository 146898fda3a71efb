use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod behavior {
    pub mod controller;
    pub mod counter;
    pub mod debounce;
    pub mod dom;
    pub mod form;
    pub mod lazy_image;
    pub mod menu;
    pub mod nav;
    pub mod oneshot;
    pub mod parallax;
    pub mod registry;
    pub mod reveal;
    pub mod skip_link;
    pub mod smooth_scroll;
    pub mod visibility;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
