use js_sys::{Array, Object, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag};

// `navigator.clipboard` and `ClipboardItem` are undefined outside secure
// contexts; `catch` turns the resulting throw into an `Err` so the
// plain-text fallback still runs.
#[wasm_bindgen]
extern "C" {
    type ClipboardItem;

    #[wasm_bindgen(constructor, catch)]
    fn new(items: &Object) -> Result<ClipboardItem, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = write, catch)]
    async fn clipboard_write(items: &Array) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Rich clipboard write failed: {0}")]
    RichWrite(String),
    #[error("Plain-text clipboard write failed: {0}")]
    PlainWrite(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Rich,
    PlainText,
}

/// Copies `html` as both `text/html` and `text/plain`, falling back to a
/// plain-text write when the browser rejects the combined item.
pub async fn copy_signature(html: &str) -> Result<CopyOutcome, ClipboardError> {
    match write_rich(html).await {
        Ok(()) => Ok(CopyOutcome::Rich),
        Err(e) => {
            log::warn!("{}, retrying as plain text", e);
            clipboard_write_text(html)
                .await
                .map_err(|e| ClipboardError::PlainWrite(format!("{:?}", e)))?;
            Ok(CopyOutcome::PlainText)
        }
    }
}

async fn write_rich(html: &str) -> Result<(), ClipboardError> {
    let item = signature_item(html).map_err(|e| ClipboardError::RichWrite(format!("{:?}", e)))?;
    clipboard_write(&Array::of1(&item))
        .await
        .map_err(|e| ClipboardError::RichWrite(format!("{:?}", e)))?;
    Ok(())
}

fn signature_item(html: &str) -> Result<ClipboardItem, JsValue> {
    let record = Object::new();
    for mime in ["text/html", "text/plain"] {
        let blob: Blob = typed_blob(html, mime)?;
        Reflect::set(&record, &JsValue::from_str(mime), &blob)?;
    }
    ClipboardItem::new(&record)
}

fn typed_blob(contents: &str, mime: &str) -> Result<Blob, JsValue> {
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_str_sequence_and_options(&Array::of1(&JsValue::from_str(contents)), &options)
}
