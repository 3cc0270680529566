use super::super::Model;
use super::super::Msg;
use yew::prelude::*;

pub fn render_actions(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="button-container">
            <button
                id="copy-btn"
                type="button"
                class={classes!("primary-btn", model.copied.then_some("copied"))}
                // The clipboard write must start inside the click for WebKit to allow it.
                onclick={link.callback(|_| Msg::CopySignature)}
            >
                { render_copy_button_content(model.copied) }
            </button>
            <button
                id="help-btn"
                type="button"
                class="secondary-btn"
                onclick={link.callback(|_| Msg::ShowHelp)}
            >
                {"¿Cómo importar?"}
            </button>
        </div>
    }
}

fn render_copy_button_content(copied: bool) -> Html {
    if copied {
        html! { <><i class="fa-solid fa-check"></i>{" ¡Copiado!"}</> }
    } else {
        html! { <><i class="fa-regular fa-copy"></i>{" Copiar Firma"}</> }
    }
}
