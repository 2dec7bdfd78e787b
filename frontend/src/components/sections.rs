//! Static marketing blocks.

use yew::prelude::*;

const BENEFITS: [(&str, &str, &str); 5] = [
    ("₸", "Без залога и первоначального взноса", "Начни зарабатывать уже завтра — без крупных вложений и рисков."),
    ("🔧", "ТО и ремонт — за наш счёт", "Все плановые ТО, расходники и ремонты мы берём на себя."),
    ("✅", "Помощь с ИП и регистрацией", "Оформление ИП за 15 минут и подключение к Яндекс.Такси без лишней бюрократии."),
    ("👥", "Акция «Приведи друга»", "Приводи водителя по рекомендации и получай скидку с аренды."),
    ("⏰", "Гибкий график работы", "Работай тогда, когда удобно — полный день, подработка или деление смены."),
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "fade-in-left",
        "Оставляешь заявку / WhatsApp",
        "Заполняешь форму на сайте или пишешь нам в WhatsApp — менеджер свяжется и проконсультирует.",
    ),
    (
        "fade-in-up",
        "Приезжаешь с документами",
        "Приходишь в офис с водительским удостоверением и 2 залоговыми документами (военный билет / паспорт / свидетельство о браке / диплом).",
    ),
    (
        "fade-in-right",
        "Забираешь авто и выходишь в смену",
        "Подписываем договор, выдаём авто и подключаем к сервису. Выход на линию возможен 24/7.",
    ),
];

const REVIEWS: [(&str, &str, &str); 3] = [
    (
        "fade-in-left",
        "«Перешёл с эконома на Comfort, доход вырос примерно на 30–40%. Машину выдали быстро, по документам всё прозрачно.»",
        "— Асхат, 2 года в такси",
    ),
    (
        "fade-in-up",
        "«Важно, что нет депозита — не пришлось вытаскивать накопления. ТО и ремонт не думаю вообще, только работаю.»",
        "— Данияр, водитель Comfort+",
    ),
    (
        "fade-in-right",
        "«У меня были сложности с банком, но тут помогли выйти на линию и зарабатывать. Поддержка на связи круглосуточно.»",
        "— Ержан, работает в Business",
    ),
];

const FAQ: [(&str, &str); 7] = [
    (
        "Какие документы нужны?",
        "Водительское удостоверение + 2 залоговых документа: военный билет, паспорт, свидетельство о браке или диплом.",
    ),
    (
        "Какие требования к водителю?",
        "Возраст от 24 лет, класс страховки от 6 и выше, водительское удостоверение и 2 залоговых документа.",
    ),
    ("Есть ли депозит?", "Нет, мы работаем без депозита и без первоначального взноса."),
    ("Какой минимальный срок аренды?", "Минимальный срок аренды — 10 дней."),
    (
        "Помогаете ли при ДТП?",
        "Да, мы консультируем и помогаем в зависимости от ситуации. Подскажем, как оформить документы и что делать дальше.",
    ),
    ("Есть ли поддержка 24/7?", "Да, служба поддержки для водителей работает круглосуточно."),
    ("Есть ли выезд в межгород?", "Нет, мы не предоставляем услуги выезда в межгород."),
];

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section class="section" id="benefits">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"Почему водители выбирают A2"}</h2>
                <div class="grid utp-grid">
                    { for BENEFITS.iter().map(|(icon, title, text)| html! {
                        <div class="card utp-card animate-on-scroll fade-in-up">
                            <div class="icon-circle">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section class="section" id="process">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"Как это работает"}</h2>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, (animation, title, text))| html! {
                        <div class={classes!("step", "animate-on-scroll", *animation)}>
                            <div class="step-number">{i + 1}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    html! {
        <section class="section section-alt" id="reviews">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"Что говорят водители"}</h2>
                <div class="grid reviews-grid">
                    { for REVIEWS.iter().map(|(animation, quote, author)| html! {
                        <div class={classes!("card", "review-card", "animate-on-scroll", *animation)}>
                            <p>{*quote}</p>
                            <span class="review-author">{*author}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="section" id="faq">
            <div class="container">
                <h2 class="section-title animate-on-scroll fade-in-up">{"FAQ — часто задаваемые вопросы"}</h2>
                <div class="faq-list">
                    // first answer starts expanded
                    { for FAQ.iter().enumerate().map(|(i, (question, answer))| html! {
                        <details class="faq-item animate-on-scroll fade-in-up" open={i == 0}>
                            <summary>{*question}</summary>
                            <p>{*answer}</p>
                        </details>
                    }) }
                </div>
            </div>
        </section>
    }
}
