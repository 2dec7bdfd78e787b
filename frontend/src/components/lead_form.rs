use a2_core::phone::{PhoneInput, PLACEHOLDER};
use a2_core::{whatsapp, LeadForm, Tariff};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config;
use crate::utils::browser::{alert, open_in_new_tab};

/// Contacts block with the lead form. The phone field is masked as
/// `+7 (ddd) - ddd - dd - dd` and must hold a full number to submit.
#[function_component(LeadSection)]
pub fn lead_section() -> Html {
    let phone = use_state(PhoneInput::new);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let tariff_ref = use_node_ref();

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*phone).clone();
            // The DOM may hold characters the mask rejected; overwrite them
            // even when the formatted value did not change.
            input.set_value(next.edit(&input.value()));
            phone.set(next);
        })
    };
    let on_phone_focus = {
        let phone = phone.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*phone).clone();
            next.focus();
            phone.set(next);
        })
    };
    let on_phone_keydown = {
        let phone = phone.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = e.key();
            if (key == "Backspace" || key == "Delete") && !phone.can_delete() {
                e.prevent_default();
            }
        })
    };

    let onsubmit = {
        let phone = phone.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let tariff_ref = tariff_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = LeadForm {
                name: name_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default(),
                phone: phone.display().to_string(),
                tariff: tariff_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .unwrap_or_else(|| Tariff::default().as_str().to_string()),
            };
            match form.submit() {
                Ok(lead) => {
                    log::info!("Lead submitted for tariff {}", lead.tariff);
                    open_in_new_tab(&lead.deep_link(config::business_number()));
                    phone.set(PhoneInput::new());
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                Err(err) => {
                    log::warn!("Lead rejected: {}", err);
                    alert(err.user_message());
                }
            }
        })
    };

    let chat_url = whatsapp::chat_url(config::business_number());
    let tel_url = whatsapp::tel_url(config::business_number());

    html! {
        <section class="section section-cta" id="contacts">
            <div class="container section-cta-inner">
                <div class="section-cta-text animate-on-scroll fade-in-left">
                    <h2>{"Готов начать зарабатывать уже сегодня?"}</h2>
                    <p>{"Пора превратить арендную машину в источник дохода!"}</p>
                    <div class="cta-contacts">
                        <a href={tel_url.clone()}>{config::business_number_display()}</a>
                        <span>{"WhatsApp / звонок, 24/7"}</span>
                    </div>
                    <div class="cta-buttons">
                        <a href={chat_url} target="_blank" rel="noreferrer" class="btn btn-primary btn-lg">
                            {"Написать в WhatsApp"}
                        </a>
                        <a href={tel_url} class="btn btn-outline">{"Позвонить сейчас"}</a>
                    </div>
                </div>
                <form class="lead-form animate-on-scroll fade-in-right" ref={form_ref} onsubmit={onsubmit}>
                    <h3>{"Оставить заявку"}</h3>
                    <label>
                        {"Имя"}
                        <input ref={name_ref} name="name" type="text" placeholder="Как к вам обращаться" required=true />
                    </label>
                    <label>
                        {"Телефон / WhatsApp"}
                        <input
                            name="phone"
                            type="tel"
                            value={phone.display().to_string()}
                            oninput={on_phone_input}
                            onkeydown={on_phone_keydown}
                            onfocus={on_phone_focus}
                            placeholder={PLACEHOLDER}
                            required=true
                        />
                    </label>
                    <label>
                        {"Интересующий тариф"}
                        <select ref={tariff_ref} name="tariff">
                            { for Tariff::ALL.into_iter().map(|tariff| html! {
                                <option value={tariff.as_str()} selected={tariff == Tariff::default()}>
                                    {tariff.option_label()}
                                </option>
                            }) }
                        </select>
                    </label>
                    <button type="submit" class="btn btn-primary btn-full">{"Отправить в WhatsApp"}</button>
                    <p class="form-hint">{"Нажимая кнопку, вы соглашаетесь с обработкой персональных данных."}</p>
                </form>
            </div>
        </section>
    }
}
