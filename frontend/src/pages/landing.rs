use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::lead_form::LeadSection;
use crate::components::quick_pick::QuickPickForm;
use crate::components::sections::{Benefits, Faq, Process, Reviews};
use crate::components::tariffs::Tariffs;
use crate::utils::scroll_reveal::use_scroll_reveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_scroll_reveal();
    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Benefits />
                <Tariffs />
                <QuickPickForm />
                <Process />
                <Reviews />
                <Faq />
                <LeadSection />
            </main>
            <Footer />
        </div>
    }
}
