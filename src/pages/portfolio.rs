use chrono::Datelike;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    hero::Hero,
    particle_canvas::ParticleCanvas,
    projects::Projects,
    return_to_top::ReturnToTop,
    services::Services,
};
use crate::config;
use crate::i18n::LocaleHandle;
use crate::scroll::{self, ScrollState};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub locale: LocaleHandle,
}

#[function_component]
pub fn Portfolio(props: &PortfolioProps) -> Html {
    let container_ref = use_node_ref();
    let scroll_state = use_state_eq(ScrollState::default);

    // Initial measurement once the container is laid out
    {
        let container_ref = container_ref.clone();
        let scroll_state = scroll_state.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(state) = scroll::measure(&container_ref) {
                    scroll_state.set(state);
                }
                || ()
            },
            (),
        );
    }

    // Bounds come from live layout, so scroll and resize both just re-measure.
    {
        let container_ref = container_ref.clone();
        let scroll_state = scroll_state.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(state) = scroll::measure(&container_ref) {
                scroll_state.set(state);
            }
        });
    }
    {
        let container_ref = container_ref.clone();
        let scroll_state = scroll_state.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(state) = scroll::measure(&container_ref) {
                scroll_state.set(state);
            }
        });
    }

    let locale = &props.locale;
    let year = chrono::Utc::now().year();

    html! {
        <div id="top" ref={container_ref} class="portfolio-page">
            <style>{ PAGE_CSS }</style>
            <ParticleCanvas />
            <div class="background-gradient"></div>

            <Hero locale={locale.clone()} parallax_offset={scroll_state.parallax_offset} />
            <Services locale={locale.clone()} />
            <Projects locale={locale.clone()} />

            <footer class="page-footer">
                { format!("© {} {}", year, config::OWNER_NAME) }
            </footer>

            <ReturnToTop
                visible={scroll_state.show_return_to_top}
                label={locale.get("return_to_top").to_string()}
            />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .portfolio-page {
        position: relative;
        min-height: 100vh;
        overflow: hidden;
        background: #0b0b14;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .particles {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        z-index: 0;
    }
    .background-gradient {
        position: absolute;
        inset: 0;
        z-index: 1;
        mix-blend-mode: overlay;
        background: linear-gradient(to top right, rgba(49, 46, 129, 0.3), rgba(107, 33, 168, 0.1), transparent);
        pointer-events: none;
    }
    .hero {
        position: relative;
        z-index: 2;
        max-width: 72rem;
        margin: 0 auto;
        padding: 5rem 1.5rem;
        display: flex;
        align-items: center;
        gap: 2rem;
        will-change: transform;
    }
    .hero-left, .hero-right {
        width: 50%;
    }
    .hero-right {
        position: relative;
        display: flex;
        justify-content: center;
        align-items: center;
    }
    .hero-toolbar {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1.5rem;
    }
    .lang-button {
        background: none;
        border: none;
        margin-left: 0.75rem;
        font-size: 0.875rem;
        color: #9ca3af;
        cursor: pointer;
    }
    .lang-button:hover, .lang-button.active {
        color: #a5b4fc;
    }
    .lang-button.active {
        font-weight: 600;
    }
    .hero-title {
        font-size: 3.5rem;
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 1rem;
    }
    .hero-description {
        font-size: 1.125rem;
        color: #d1d5db;
        margin-bottom: 2rem;
        max-width: 36rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
    }
    .cta-primary {
        padding: 0.75rem 1.5rem;
        background: #4f46e5;
        color: #fff;
        border-radius: 0.5rem;
        font-weight: 600;
        text-decoration: none;
        transition: background 0.2s;
    }
    .cta-primary:hover {
        background: #4338ca;
    }
    .cta-secondary {
        padding: 0.75rem 1.5rem;
        background: none;
        border: 1px solid #818cf8;
        border-radius: 0.5rem;
        color: #818cf8;
        cursor: pointer;
        transition: background 0.2s;
    }
    .cta-secondary:hover {
        background: rgba(55, 48, 163, 0.2);
    }
    .social-links {
        margin-top: 2rem;
        display: flex;
        gap: 0.75rem;
    }
    .social-link {
        padding: 0.5rem 0.75rem;
        background: rgba(31, 41, 55, 0.6);
        border-radius: 0.25rem;
        color: #fff;
        text-decoration: none;
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .hero-photo-shade {
        position: absolute;
        inset: 0;
        border-radius: 1.5rem;
        background: linear-gradient(to top right, rgba(0, 0, 0, 0.4), rgba(49, 46, 129, 0.2), transparent);
        pointer-events: none;
    }
    .hero-photo {
        width: 100%;
        max-width: 28rem;
        object-fit: cover;
        border-radius: 1rem;
        will-change: transform;
        animation: float 6s ease-in-out infinite;
    }
    .services, .projects {
        position: relative;
        z-index: 2;
        padding: 4rem 1.5rem;
    }
    .services-content {
        max-width: 64rem;
        margin: 0 auto;
        text-align: center;
    }
    .projects-content {
        max-width: 72rem;
        margin: 0 auto;
    }
    .section-title {
        font-size: 1.875rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        text-align: center;
    }
    .section-subtitle {
        color: #9ca3af;
        margin-bottom: 2rem;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .projects-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .glass {
        background: rgba(255, 255, 255, 0.04);
        border: 1px solid rgba(255, 255, 255, 0.08);
        backdrop-filter: blur(8px);
    }
    .service-card {
        padding: 1.5rem;
        border-radius: 0.75rem;
        text-align: left;
    }
    .service-card p, .project-card p {
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .project-card {
        padding: 1.5rem;
        border-radius: 1rem;
        position: relative;
        overflow: hidden;
        transition: box-shadow 0.3s;
    }
    .project-card.linked:hover {
        box-shadow: 0 0 20px rgba(99, 102, 241, 0.12);
    }
    .project-link {
        color: #a5b4fc;
        font-weight: 500;
        text-decoration: none;
    }
    .project-soon {
        color: #c7d2fe;
        font-weight: 500;
    }
    .page-footer {
        position: relative;
        z-index: 2;
        padding: 2rem 0;
        text-align: center;
        color: #9ca3af;
    }
    .return-to-top {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        padding: 0.75rem;
        background: #4f46e5;
        border-radius: 9999px;
        z-index: 50;
        display: flex;
    }
    .fade-up {
        animation: fadeUp 0.8s ease-out both;
    }
    .fade-up.slow {
        animation-duration: 0.9s;
    }
    .fade-up.delayed {
        animation-delay: 0.2s;
    }
    .reveal {
        opacity: 0;
    }
    .reveal.in-view {
        animation: fadeUp 0.6s ease-out both;
    }
    .reveal.in-view.pulse-indigo {
        animation: fadeUp 0.6s ease-out both, pulseIndigo 3s ease-in-out 0.6s infinite;
    }
    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-8px); }
    }
    @keyframes pulseIndigo {
        0%, 100% { box-shadow: 0 0 0 rgba(99, 102, 241, 0); }
        50% { box-shadow: 0 0 24px rgba(99, 102, 241, 0.25); }
    }
    @media (max-width: 768px) {
        .hero {
            flex-direction: column;
        }
        .hero-left, .hero-right {
            width: 100%;
        }
        .hero-title {
            font-size: 3rem;
        }
        .services-grid, .projects-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// (selector, declarations) for every flat rule in the page stylesheet.
    fn rules(css: &str) -> Vec<(String, String)> {
        css.split('}')
            .filter_map(|chunk| {
                let (selector, body) = chunk.rsplit_once('{')?;
                let selector = selector.rsplit('{').next()?.trim().to_string();
                Some((selector, body.trim().to_string()))
            })
            .collect()
    }

    #[test]
    fn below_the_fold_content_waits_until_in_view() {
        let rules = rules(PAGE_CSS);
        let animated: Vec<&(String, String)> = rules
            .iter()
            .filter(|(_, body)| body.contains("animation:") && body.contains("fadeUp"))
            .collect();
        assert!(!animated.is_empty());

        for (selector, _) in animated {
            // only the hero animates on load
            assert!(
                selector.contains(".in-view") || selector.starts_with(".fade-up"),
                "'{}' animates before it is scrolled into view",
                selector
            );
        }

        let hidden = rules.iter().find(|(selector, _)| selector == ".reveal").unwrap();
        assert!(hidden.1.contains("opacity: 0"));
    }
}
