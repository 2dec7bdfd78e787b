use a2_core::count_up::CountUp;
use a2_core::whatsapp;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

const FLEET_STAT: &str = "250+";
const COUNT_DELAY_MS: u32 = 500;
const COUNT_STEP_MS: u32 = 50;
const COUNT_STEPS: u32 = 30;

#[function_component(Hero)]
pub fn hero() -> Html {
    let fleet = use_state(|| FLEET_STAT.to_string());

    // Count the fleet size up from zero shortly after the page appears.
    {
        let fleet = fleet.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                let task_cancelled = cancelled.clone();
                if let Some(target) = CountUp::parse_target(FLEET_STAT) {
                    spawn_local(async move {
                        TimeoutFuture::new(COUNT_DELAY_MS).await;
                        let mut count = CountUp::new(target, COUNT_STEPS);
                        while let Some(value) = count.tick() {
                            if task_cancelled.get() {
                                return;
                            }
                            fleet.set(format!("{}+", value));
                            TimeoutFuture::new(COUNT_STEP_MS).await;
                        }
                    });
                }
                move || cancelled.set(true)
            },
            (),
        );
    }

    html! {
        <section class="hero" id="top">
            <div class="container hero-inner">
                <div class="hero-content">
                    <h1>
                        {"Аренда АВТО под ТАКСИ "}<span class="accent">{"без депозита"}</span>{" и вложений"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Переходи на Comfort / Comfort+ / Business, зарабатывай больше. Более 250 авто в парке, выдача от 24 часов, прозрачные условия."}
                    </p>
                    <div class="hero-actions">
                        <a
                            href={whatsapp::chat_url(config::business_number())}
                            target="_blank"
                            rel="noreferrer"
                            class="btn btn-primary btn-lg"
                        >
                            {"Оставить заявку в WhatsApp"}
                        </a>
                        <a href="#tariffs" class="btn btn-ghost">{"Смотреть тарифы"}</a>
                    </div>
                    <div class="hero-badges">
                        <span>{"Без залога"}</span>
                        <span>{"Без первоначального взноса"}</span>
                        <span>{"Минимальный срок — 10 дней"}</span>
                    </div>
                </div>
                <div class="hero-highlight animate-on-scroll scale-in">
                    <Stat label="Авто в парке" value={(*fleet).clone()} />
                    <Stat label="Выход на линию" value="от 24 часов" />
                    <Stat label="Средний доход" value="от 300 000 ₸/мес" />
                    <Stat label="Опыт на рынке" value="7 лет" />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(Stat)]
fn stat(props: &StatProps) -> Html {
    html! {
        <div class="hero-stat">
            <span class="hero-stat-label">{props.label.clone()}</span>
            <span class="hero-stat-value">{props.value.clone()}</span>
        </div>
    }
}
