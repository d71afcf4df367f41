use log::{error, info, Level};
use web_sys::window;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod i18n;
mod particles;
mod reveal;
mod scroll;

mod components {
    pub mod hero;
    pub mod language_switcher;
    pub mod particle_canvas;
    pub mod projects;
    pub mod return_to_top;
    pub mod services;
}
mod pages {
    pub mod portfolio;
}

use i18n::LocaleStore;
use pages::portfolio::Portfolio;

fn initial_locale_store() -> LocaleStore {
    LocaleStore::bundled().unwrap_or_else(|e| {
        error!("Failed to load translations: {}", e);
        LocaleStore::empty()
    })
}

#[function_component]
fn App() -> Html {
    let locale = use_reducer(initial_locale_store);

    // Keep <html lang> in step with the active locale
    {
        let active = locale.active();
        use_effect_with_deps(
            move |active| {
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", active.code());
                }
                || ()
            },
            active,
        );
    }

    html! {
        <Portfolio locale={locale} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if console_log::init_with_level(level).is_err() {
        gloo_console::error!("error initializing log");
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
