use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::config;
use crate::contact::{self, BrowserChannel, ContactPayload};
use crate::content::{SocialIcon, SOCIAL_LINKS};
use crate::i18n::LocaleHandle;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub locale: LocaleHandle,
    pub parallax_offset: f64,
}

fn social_icon(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => "icon-github",
        SocialIcon::Linkedin => "icon-linkedin",
        SocialIcon::Mail => "icon-mail",
    }
}

#[function_component]
pub fn Hero(props: &HeroProps) -> Html {
    let locale = &props.locale;

    let on_contact = {
        let locale = locale.clone();
        Callback::from(move |_: MouseEvent| {
            // Resolve everything locale-dependent now, the request outlives this render.
            let payload = ContactPayload::new(locale.active());
            let notice = locale.get("contact_success").to_string();
            spawn_local(async move {
                let channel = BrowserChannel::default();
                contact::dispatch(&channel, payload, &notice).await;
            });
        })
    };

    html! {
        <header
            class="hero"
            style={format!("transform: translateY({:.2}px);", props.parallax_offset)}
        >
            <div class="hero-left">
                <div class="hero-toolbar">
                    <div class="hero-toolbar-spacer"></div>
                    <LanguageSwitcher locale={locale.clone()} />
                </div>

                <h1 class="hero-title fade-up">{ locale.get("hero_title") }</h1>
                <p class="hero-description fade-up slow">{ locale.get("hero_description") }</p>

                <div class="hero-cta-group">
                    <a href="#projects" class="cta-primary">{ locale.get("primaryCTA") }</a>
                    <button class="cta-secondary" onclick={on_contact}>
                        { locale.get("secondaryCTA") }
                    </button>
                </div>

                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|link| {
                        if link.opens_new_tab() {
                            html! {
                                <a href={link.href} target="_blank" rel="noreferrer" class="social-link">
                                    <i class={social_icon(link.icon)}></i>
                                    { link.label }
                                </a>
                            }
                        } else {
                            html! {
                                <a href={link.href} class="social-link">
                                    <i class={social_icon(link.icon)}></i>
                                    { link.label }
                                </a>
                            }
                        }
                    }) }
                </div>
            </div>

            <div class="hero-right fade-up delayed">
                <div class="hero-photo-shade"></div>
                <img
                    src={config::HERO_PHOTO}
                    alt={locale.get("hero_photo_alt").to_string()}
                    class="hero-photo"
                />
            </div>
        </header>
    }
}
