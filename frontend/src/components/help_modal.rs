use super::super::Model;
use super::super::Msg;
use yew::prelude::*;

struct MailClient {
    badge: &'static str,
    badge_class: &'static str,
    name: &'static str,
    steps: &'static [&'static str],
}

const MAIL_CLIENTS: &[MailClient] = &[
    MailClient {
        badge: "G",
        badge_class: "badge-gmail",
        name: "Gmail",
        steps: &[
            "Abre Gmail y haz clic en el ícono de engranaje → Ver todos los ajustes",
            "Desplázate hasta \"Firma\" y haz clic en \"Crear nueva\"",
            "Pega tu firma copiada en el editor",
            "Haz clic en \"Guardar cambios\" en la parte inferior",
        ],
    },
    MailClient {
        badge: "⌘",
        badge_class: "badge-macos",
        name: "macOS Mail",
        steps: &[
            "Abre Mail → Configuración → Firmas",
            "Selecciona tu cuenta y haz clic en \"+\" para agregar una firma",
            "Pega tu firma copiada",
            "Asígnala a tu cuenta desde el menú desplegable",
        ],
    },
    MailClient {
        badge: "✉",
        badge_class: "badge-ios",
        name: "iOS Mail",
        steps: &[
            "Ve a Ajustes → Mail → Firma",
            "Selecciona \"Por cuenta\" si tienes varias cuentas",
            "Pega tu firma (el formato puede ser limitado)",
            "Para soporte HTML completo, configúrala primero en escritorio",
        ],
    },
];

pub fn render_help_modal(model: &Model, ctx: &Context<Model>) -> Html {
    if !model.show_help {
        return html! {};
    }

    let link = ctx.link();
    // Clicks inside the dialog must not reach the backdrop.
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={link.callback(|_| Msg::HideHelp)}>
            <div class="modal" role="dialog" onclick={stop_propagation}>
                <div class="modal-header">
                    <h2>{"Cómo Importar Tu Firma"}</h2>
                    <button
                        type="button"
                        class="clear-btn"
                        title="Cerrar"
                        onclick={link.callback(|_| Msg::HideHelp)}
                    >
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <div class="modal-body">
                    { for MAIL_CLIENTS.iter().map(render_mail_client) }
                </div>
            </div>
        </div>
    }
}

fn render_mail_client(client: &MailClient) -> Html {
    html! {
        <div class="mail-client">
            <h3>
                <span class={classes!("badge", client.badge_class)}>{ client.badge }</span>
                { client.name }
            </h3>
            <ol>
                { for client.steps.iter().map(|step| html! { <li>{ *step }</li> }) }
            </ol>
        </div>
    }
}
