use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod lead_form;
    pub mod quick_pick;
    pub mod sections;
    pub mod tariffs;
}
mod utils {
    pub mod browser;
    pub mod scroll_reveal;
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

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
