use gloo_file::File as GlooFile;
use shared::check_logo_type;
use web_sys::{FileList, HtmlElement};
use yew::prelude::*;

/// First selected file, if it is an image.
pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    let file = file_list.item(0)?;
    check_logo_type(&file.name(), &file.type_())
        .ok()
        .map(|()| GlooFile::from(file))
}

/// `onerror` handler that hides an image instead of showing a broken placeholder.
pub fn hide_broken_image() -> Callback<Event> {
    Callback::from(|e: Event| {
        let img: HtmlElement = e.target_unchecked_into();
        if let Err(err) = img.style().set_property("display", "none") {
            log::warn!("Could not hide broken image: {:?}", err);
        }
    })
}
