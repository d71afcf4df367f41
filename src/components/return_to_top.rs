use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReturnToTopProps {
    pub visible: bool,
    pub label: String,
}

#[function_component]
pub fn ReturnToTop(props: &ReturnToTopProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <a href="#top" class="return-to-top" aria-label={props.label.clone()} title={props.label.clone()}>
            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <line x1="12" y1="19" x2="12" y2="5" />
                <polyline points="5 12 12 5 19 12" />
            </svg>
        </a>
    }
}
