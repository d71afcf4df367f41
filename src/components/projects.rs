use yew::prelude::*;

use crate::config;
use crate::content::{ProjectEntry, PROJECTS};
use crate::i18n::LocaleHandle;
use crate::reveal::{use_reveal_on_scroll, REVEAL_CLASS};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub locale: LocaleHandle,
}

fn project_card(locale: &LocaleHandle, index: usize, project: &ProjectEntry) -> Html {
    let delay = format!("animation-delay: {}ms;", index as u32 * config::CARD_STAGGER_MS);
    let footer = match project.link {
        Some(link) => html! {
            <a href={link} target="_blank" rel="noreferrer" class="project-link">
                { locale.get("view_project") }
            </a>
        },
        None => html! {
            <div class="project-soon">{ locale.get("coming_soon") }</div>
        },
    };

    html! {
        <div
            key={index}
            class={classes!(
                "glass",
                "project-card",
                REVEAL_CLASS,
                if project.is_placeholder() { "pulse-indigo" } else { "linked" }
            )}
            style={delay}
        >
            <h3>{ locale.get(project.title_key) }</h3>
            <p>{ locale.get(project.description_key) }</p>
            { footer }
        </div>
    }
}

#[function_component]
pub fn Projects(props: &ProjectsProps) -> Html {
    let locale = &props.locale;
    let section_ref = use_node_ref();
    use_reveal_on_scroll(section_ref.clone());

    html! {
        <section ref={section_ref} id="projects" class="projects">
            <div class="projects-content">
                <h2 class={classes!("section-title", REVEAL_CLASS)}>{ locale.get("projects_title") }</h2>
                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| project_card(locale, i, project)) }
                </div>
            </div>
        </section>
    }
}
