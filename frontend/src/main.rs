mod clipboard;
mod components;

use components::actions::render_actions;
use components::form_section::render_form_section;
use components::handlers;
use components::header::render_header;
use components::help_modal::render_help_modal;
use components::preview_area::render_preview_area;
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use gloo_timers::callback::Timeout;
use shared::{Field, FormState, LogoAsset, LogoSlot, PreviewMode, SignatureError};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Field editing
    UpdateField(Field, String),
    ClearField(Field),

    // Logo import
    LogoSelected(LogoSlot, GlooFile),
    LogoLoaded(LogoSlot, LogoAsset),
    LogoReadFailed(LogoSlot, SignatureError),
    ClearLogo(LogoSlot),

    // Clipboard
    CopySignature,
    Copied,
    ResetCopied,

    // UI states
    TogglePreviewMode,
    ShowHelp,
    HideHelp,
    Loaded,
}

// Main component
struct Model {
    form: FormState,
    preview_mode: PreviewMode,
    copied: bool,
    copied_reset: Option<Timeout>,
    logo_readers: HashMap<LogoSlot, FileReader>,
    show_help: bool,
    keydown_listener: Option<EventListener>,
    loaded: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            form: FormState::default(),
            preview_mode: PreviewMode::default(),
            copied: false,
            copied_reset: None,
            logo_readers: HashMap::new(),
            show_help: false,
            keydown_listener: None,
            loaded: false,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                if key_event.key() == "Escape" {
                    link.send_message(Msg::HideHelp);
                }
            }
        });
        model.keydown_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Field editing
            Msg::UpdateField(field, value) => handlers::handle_update_field(self, field, value),
            Msg::ClearField(field) => handlers::handle_clear_field(self, field),

            // Logo import
            Msg::LogoSelected(slot, file) => handlers::handle_logo_selected(self, ctx, slot, file),
            Msg::LogoLoaded(slot, asset) => handlers::handle_logo_loaded(self, slot, asset),
            Msg::LogoReadFailed(slot, error) => {
                handlers::handle_logo_read_failed(self, slot, error)
            }
            Msg::ClearLogo(slot) => handlers::handle_clear_logo(self, slot),

            // Clipboard
            Msg::CopySignature => handlers::handle_copy_signature(self, ctx),
            Msg::Copied => handlers::handle_copied(self, ctx),
            Msg::ResetCopied => handlers::handle_reset_copied(self),

            // UI states
            Msg::TogglePreviewMode => handlers::handle_toggle_preview_mode(self),
            Msg::ShowHelp => {
                self.show_help = true;
                true
            }
            Msg::HideHelp => std::mem::replace(&mut self.show_help, false),
            Msg::Loaded => {
                self.loaded = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <div class={classes!("content", self.loaded.then_some("loaded"))}>
                    { render_header() }

                    <main class="main-content">
                    { render_form_section(self, ctx) }
                    { render_preview_area(self, ctx) }
                    { render_actions(self, ctx) }
                    </main>
                </div>

                { render_help_modal(self, ctx) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Loaded);
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
