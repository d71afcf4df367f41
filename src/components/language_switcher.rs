use log::info;
use yew::prelude::*;

use crate::i18n::{Locale, LocaleAction, LocaleHandle};

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub locale: LocaleHandle,
}

#[function_component]
pub fn LanguageSwitcher(props: &LanguageSwitcherProps) -> Html {
    let active = props.locale.active();

    html! {
        <div class="language-switcher" aria-label={props.locale.get("language_switcher").to_string()}>
            { for Locale::all().iter().map(|&locale| {
                let onclick = {
                    let handle = props.locale.clone();
                    Callback::from(move |_: MouseEvent| {
                        info!("Switching language to {}", locale);
                        handle.dispatch(LocaleAction::Switch(locale));
                    })
                };
                html! {
                    <button
                        key={locale.code()}
                        class={classes!("lang-button", (locale == active).then(|| "active"))}
                        {onclick}
                    >
                        { locale.code().to_uppercase() }
                    </button>
                }
            }) }
        </div>
    }
}
