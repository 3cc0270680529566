use super::super::Model;
use super::theme_toggle::render_theme_toggle;
use super::utils::hide_broken_image;
use shared::SignatureView;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let mode = model.preview_mode;
    let view = SignatureView::resolve(&model.form, mode);

    html! {
        <section class="card preview-card">
            <div class="preview-header">
                <span class="preview-title">{"Vista previa"}</span>
                { render_theme_toggle(mode, ctx.link()) }
            </div>
            <div id="signature-preview" class={classes!("preview-body", mode.to_string())}>
                <div class="signature">
                    <div class="signature-name">{ view.name.clone() }</div>
                    <div class="signature-muted">{ view.title.clone() }</div>
                    <div class="signature-muted">{ view.company.clone() }</div>
                    { render_contact_line(&view) }
                    <div class="signature-muted spaced">{ view.website.clone() }</div>
                    { render_logo(&view) }
                </div>
            </div>
        </section>
    }
}

fn render_contact_line(view: &SignatureView) -> Html {
    match view.contact_line_text() {
        Some(line) => html! { <div class="signature-muted spaced">{ line }</div> },
        None => html! {},
    }
}

fn render_logo(view: &SignatureView) -> Html {
    match &view.logo {
        Some(src) => html! {
            <div class="signature-logo">
                <img key={src.clone()} src={src.clone()} alt="Logo" onerror={hide_broken_image()} />
            </div>
        },
        None => html! {},
    }
}
