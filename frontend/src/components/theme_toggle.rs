use super::super::Model;
use super::super::Msg;
use shared::PreviewMode;
use yew::html::Scope;
use yew::prelude::*;

pub fn render_theme_toggle(mode: PreviewMode, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            type="button"
            class={classes!("theme-toggle", mode.is_dark().then_some("dark"))}
            onclick={link.callback(|_| Msg::TogglePreviewMode)}
            title={ if mode.is_dark() { "Cambiar a modo claro" } else { "Cambiar a modo oscuro" } }
        >
            <span class="toggle-knob">
                { if mode.is_dark() {
                    html! { <i class="fa-solid fa-moon"></i> }
                } else {
                    html! { <i class="fa-solid fa-sun"></i> }
                }}
            </span>
        </button>
    }
}
