use a2_core::whatsapp;
use yew::prelude::*;

use crate::config;
use crate::utils::browser::set_body_scroll_locked;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#tariffs", "Тарифы"),
    ("#fleet", "Авто"),
    ("#process", "Как это работает"),
    ("#faq", "FAQ"),
    ("#contacts", "Контакты"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    // Page scroll stays locked while the mobile menu covers it.
    {
        let open = *menu_open;
        use_effect_with_deps(
            move |open| {
                set_body_scroll_locked(*open);
                || set_body_scroll_locked(false)
            },
            open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let chat_url = whatsapp::chat_url(config::business_number());
    let tel_url = whatsapp::tel_url(config::business_number());

    html! {
        <>
            if *menu_open {
                <div class="mobile-menu-overlay" onclick={close_menu.clone()}></div>
            }
            <header class="header">
                <div class="container header-inner">
                    <div class="logo">
                        <img src="/logo.jpg" alt="A2" class="logo-image" />
                        <span class="logo-text">{"Авто в аренду для такси"}</span>
                    </div>
                    <nav class={classes!("nav", (*menu_open).then_some("nav-open"))}>
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                        }) }
                        <div class="mobile-menu-cta">
                            <a
                                href={chat_url.clone()}
                                target="_blank"
                                rel="noreferrer"
                                class="btn btn-primary btn-full"
                                onclick={close_menu.clone()}
                            >
                                {"WhatsApp"}
                            </a>
                            <a href={tel_url.clone()} class="btn btn-outline btn-full" onclick={close_menu}>
                                {"Позвонить"}
                            </a>
                        </div>
                    </nav>
                    <div class="header-cta">
                        <a href={tel_url} class="btn btn-outline">{"Позвонить"}</a>
                        <a href={chat_url} target="_blank" rel="noreferrer" class="btn btn-primary">
                            {"WhatsApp"}
                        </a>
                    </div>
                    <button
                        class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                        onclick={toggle_menu}
                        aria-label="Меню"
                        aria-expanded={(*menu_open).to_string()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
        </>
    }
}
