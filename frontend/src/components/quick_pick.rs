use a2_core::quick_pick::{toggle, Experience, QuickPick, WorkMode};
use a2_core::Tariff;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::utils::browser::open_in_new_tab;

fn chips<T>(
    title: &str,
    options: &[T],
    selected: Option<T>,
    label: fn(&T) -> &'static str,
    on_pick: Callback<T>,
) -> Html
where
    T: Copy + PartialEq + 'static,
{
    html! {
        <div class="field">
            <label>{title.to_string()}</label>
            <div class="chips">
                { for options.iter().copied().map(|option| {
                    let onclick = on_pick.reform(move |_: MouseEvent| option);
                    html! {
                        <button
                            type="button"
                            class={classes!("chip", (selected == Some(option)).then_some("chip-active"))}
                            onclick={onclick}
                        >
                            {label(&option)}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

/// Three-question vehicle pick. Answers are optional and travel with the
/// contact in the WhatsApp message.
#[function_component(QuickPickForm)]
pub fn quick_pick_form() -> Html {
    let pick = use_state(QuickPick::default);

    let on_contact = {
        let pick = pick.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pick.set(QuickPick {
                contact: input.value(),
                ..(*pick).clone()
            });
        })
    };
    let on_experience = {
        let pick = pick.clone();
        Callback::from(move |experience: Experience| {
            pick.set(QuickPick {
                experience: toggle(pick.experience, experience),
                ..(*pick).clone()
            });
        })
    };
    let on_work_mode = {
        let pick = pick.clone();
        Callback::from(move |mode: WorkMode| {
            pick.set(QuickPick {
                work_mode: toggle(pick.work_mode, mode),
                ..(*pick).clone()
            });
        })
    };
    let on_class = {
        let pick = pick.clone();
        Callback::from(move |class: Tariff| {
            pick.set(QuickPick {
                class: toggle(pick.class, class),
                ..(*pick).clone()
            });
        })
    };
    let onsubmit = {
        let pick = pick.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            open_in_new_tab(&pick.deep_link(config::business_number()));
        })
    };

    html! {
        <section class="section section-alt" id="fleet">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"Быстрый подбор авто"}</h2>
                <p class="section-subtitle animate-on-scroll fade-in-up">
                    {"Ответь на 3 вопроса — менеджер подберёт авто под твой опыт, режим и бюджет."}
                </p>
                <div class="quick-form animate-on-scroll scale-in">
                    <div class="quick-form-grid">
                        { chips("Опыт в такси", &Experience::ALL, pick.experience, Experience::label, on_experience) }
                        { chips("Режим работы", &WorkMode::ALL, pick.work_mode, WorkMode::label, on_work_mode) }
                        { chips("Предпочтительный класс", &Tariff::OFFERED, pick.class, Tariff::as_str, on_class) }
                    </div>
                    <div class="quick-form-cta">
                        <p>{"Оставь WhatsApp или телефон — мы перезвоним в течение 15 минут."}</p>
                        <form class="inline-form" onsubmit={onsubmit}>
                            <input
                                name="contact"
                                type="text"
                                placeholder="WhatsApp или номер телефона"
                                required=true
                                value={pick.contact.clone()}
                                oninput={on_contact}
                            />
                            <button type="submit" class="btn btn-primary">{"Подобрать авто"}</button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
