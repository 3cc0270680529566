use super::super::Model;
use super::super::Msg;
use super::utils::{first_image_file, hide_broken_image};
use shared::{Field, LogoSlot};
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_form_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section class="card form-card">
            <div class="form-grid">
                { for Field::iter().map(|field| render_input_field(model, ctx, field)) }
                { for LogoSlot::iter().map(|slot| render_logo_field(model, ctx, slot)) }
            </div>
        </section>
    }
}

fn render_input_field(model: &Model, ctx: &Context<Model>, field: Field) -> Html {
    let link = ctx.link();
    let value = model.form.get(field).to_string();

    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateField(field, input.value())
    });

    html! {
        <div class="field" key={field.to_string()}>
            <label class="field-label">{ field.label() }</label>
            <div class="field-input">
                <input
                    id={format!("field-{}", field)}
                    type={field.input_type()}
                    value={value.clone()}
                    placeholder={field.placeholder()}
                    {oninput}
                />
                {
                    if value.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <button
                                type="button"
                                class="clear-btn"
                                title="Borrar"
                                onclick={link.callback(move |_| Msg::ClearField(field))}
                            >
                                <i class="fa-solid fa-xmark"></i>
                            </button>
                        }
                    }
                }
            </div>
        </div>
    }
}

fn render_logo_field(model: &Model, ctx: &Context<Model>, slot: LogoSlot) -> Html {
    let link = ctx.link();
    let logo = model.form.logo(slot);

    let body = if logo.is_empty() {
        let handle_change = link.batch_callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().as_ref().and_then(first_image_file);

            input.set_value("");

            file.map(|file| Msg::LogoSelected(slot, file))
        });

        html! {
            <label class="logo-upload">
                <i class="fa-solid fa-upload"></i>
                <span>{"Subir logo"}</span>
                <input type="file" accept="image/*" style="display: none;" onchange={handle_change} />
            </label>
        }
    } else {
        let display_name = if logo.name.is_empty() {
            "logo".to_string()
        } else {
            logo.name.clone()
        };

        html! {
            <div class="logo-selected">
                <img
                    key={logo.url.clone()}
                    src={logo.url.clone()}
                    alt="Logo"
                    class="logo-thumb"
                    onerror={hide_broken_image()}
                />
                <span class="logo-name" title={display_name.clone()}>{ display_name }</span>
                <button
                    type="button"
                    class="clear-btn"
                    title="Quitar logo"
                    onclick={link.callback(move |_| Msg::ClearLogo(slot))}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
        }
    };

    html! {
        <div class="field" key={slot.to_string()}>
            <label class="field-label">{ slot.label() }</label>
            { body }
        </div>
    }
}
