use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-left">
                    <span>{format!("© {} A2. Аренда авто для такси.", year)}</span>
                    <span>{"Все права защищены."}</span>
                </div>
                <div class="footer-right">
                    <a href="#top">{"Наверх"}</a>
                </div>
            </div>
        </footer>
    }
}
