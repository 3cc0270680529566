use super::super::Model;
use super::super::Msg;
use crate::clipboard::copy_signature;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use gloo_timers::callback::Timeout;
use shared::{
    COPIED_RESET_MS, Field, LogoAsset, LogoSlot, SignatureError, generate_html, imported_logo,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_update_field(model: &mut Model, field: Field, value: String) -> bool {
    model.form.set(field, value);
    true
}

pub fn handle_clear_field(model: &mut Model, field: Field) -> bool {
    model.form.clear(field);
    true
}

pub fn handle_logo_selected(
    model: &mut Model,
    ctx: &Context<Model>,
    slot: LogoSlot,
    file: GlooFile,
) -> bool {
    let name = file.name();
    let link = ctx.link().clone();
    let reader_name = name.clone();

    let reader = read_as_data_url(&file, move |result| {
        match imported_logo(&reader_name, result) {
            Ok(asset) => link.send_message(Msg::LogoLoaded(slot, asset)),
            Err(e) => link.send_message(Msg::LogoReadFailed(slot, e)),
        }
    });

    // Dropping a previous reader for this slot aborts it.
    if model.logo_readers.insert(slot, reader).is_some() {
        log::info!("Superseding pending {} logo read", slot);
    }
    log::info!("Reading {} logo from '{}'", slot, name);

    false
}

pub fn handle_logo_loaded(model: &mut Model, slot: LogoSlot, asset: LogoAsset) -> bool {
    model.logo_readers.remove(&slot);
    log::info!("Loaded {} logo '{}'", slot, asset.name);
    model.form.set_logo(slot, asset);
    true
}

pub fn handle_logo_read_failed(model: &mut Model, slot: LogoSlot, error: SignatureError) -> bool {
    model.logo_readers.remove(&slot);
    log::warn!("{}", error);
    false
}

pub fn handle_clear_logo(model: &mut Model, slot: LogoSlot) -> bool {
    model.logo_readers.remove(&slot);
    model.form.clear_logo(slot);
    true
}

pub fn handle_copy_signature(model: &mut Model, ctx: &Context<Model>) -> bool {
    let html = generate_html(&model.form, model.preview_mode);
    let link = ctx.link().clone();

    spawn_local(async move {
        match copy_signature(&html).await {
            Ok(outcome) => {
                log::info!("Signature copied ({:?}, {} bytes)", outcome, html.len());
                link.send_message(Msg::Copied);
            }
            Err(e) => log::error!("Failed to copy signature: {}", e),
        }
    });

    false
}

pub fn handle_copied(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.copied = true;

    let link = ctx.link().clone();
    let timeout = Timeout::new(COPIED_RESET_MS, move || {
        link.send_message(Msg::ResetCopied);
    });
    // Replacing the handle cancels the previous reset.
    model.copied_reset = Some(timeout);

    true
}

pub fn handle_reset_copied(model: &mut Model) -> bool {
    model.copied = false;
    model.copied_reset = None;
    true
}

pub fn handle_toggle_preview_mode(model: &mut Model) -> bool {
    model.preview_mode = model.preview_mode.toggled();
    true
}
