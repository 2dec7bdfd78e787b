use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found">
            <div class="container">
                <h1>{"Страница не найдена"}</h1>
                <p>{"Такой страницы нет, но авто для такси у нас есть."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"На главную"}
                </Link<Route>>
            </div>
        </div>
    }
}
