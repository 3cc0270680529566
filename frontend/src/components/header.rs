use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Generador de Firma de Michellen"}</h1>
            <p class="subtitle">{"Crea una firma profesional en segundos"}</p>
        </header>
    }
}
