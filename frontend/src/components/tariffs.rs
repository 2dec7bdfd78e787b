use a2_core::tariff::{format_tenge, Tariff};
use a2_core::whatsapp;
use yew::prelude::*;

use crate::config;

#[function_component(Tariffs)]
pub fn tariffs() -> Html {
    let reveal = ["fade-in-left", "scale-in", "fade-in-right"];
    html! {
        <section class="section" id="tariffs">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"Тарифы аренды"}</h2>
                <p class="section-subtitle animate-on-scroll fade-in-up">
                    {"Выбери комфортный класс — мы подберём подходящее авто и поможем выйти на линию."}
                </p>
                <div class="grid tariffs-grid">
                    { for Tariff::OFFERED.into_iter().zip(reveal).map(|(tariff, animation)| html! {
                        <TariffCard tariff={tariff} animation={animation} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TariffCardProps {
    tariff: Tariff,
    animation: &'static str,
}

#[function_component(TariffCard)]
fn tariff_card(props: &TariffCardProps) -> Html {
    let tariff = props.tariff;
    let link = whatsapp::chat_url_with_text(config::business_number(), &tariff.inquiry_message());
    let price = tariff
        .price_per_day()
        .map(|amount| format!("{} / день", format_tenge(amount)))
        .unwrap_or_default();

    html! {
        <div class={classes!("card", "tariff-card", "animate-on-scroll", props.animation)}>
            <div class="tariff-header">
                <span class="tariff-badge">{tariff.as_str()}</span>
                <h3>{tariff.headline()}</h3>
            </div>
            <div class="tariff-cars">
                { for tariff.cars().iter().map(|car| html! {
                    <div class="tariff-car-item">
                        <div class="tariff-image-placeholder">
                            <img src={car.image} alt={car.name} class="tariff-image" loading="lazy" />
                        </div>
                        <span class="tariff-car-name">{car.name}</span>
                    </div>
                }) }
            </div>
            <ul class="tariff-list">
                { for tariff.features().iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <div class="tariff-footer">
                <div class="tariff-price">
                    <span class="label">{"от"}</span>
                    <span class="value">{price}</span>
                </div>
                <a href={link} target="_blank" rel="noreferrer" class="btn btn-primary btn-full">
                    {format!("Выбрать {}", tariff.as_str())}
                </a>
            </div>
        </div>
    }
}
