use yew::prelude::*;

use crate::content::SERVICES;
use crate::i18n::LocaleHandle;
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub locale: LocaleHandle,
}

#[function_component]
pub fn Services(props: &ServicesProps) -> Html {
    let locale = &props.locale;
    let section_ref = use_node_ref();
    use_reveal_on_scroll(section_ref.clone());

    html! {
        <section ref={section_ref} class="services">
            <div class="services-content">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ locale.get("services_title") }</h2>
                <p class="section-subtitle">{ locale.get("services_subtitle") }</p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class={classes!("glass", "service-card", REVEAL_CLASS)}>
                            <h3>{ locale.get(service.title_key) }</h3>
                            <p>{ locale.get(service.description_key) }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
