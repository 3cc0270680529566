use crate::error::{SignatureError, SignatureResult};
use crate::form::LogoAsset;

/// Rejects files whose MIME type is not `image/*`.
pub fn check_logo_type(name: &str, mime: &str) -> SignatureResult<()> {
    if mime.starts_with("image/") {
        Ok(())
    } else {
        log::warn!("Rejecting non-image logo file: {} ({})", name, mime);
        Err(SignatureError::UnsupportedLogoType {
            name: name.to_string(),
            mime: mime.to_string(),
        })
    }
}

/// Turns the outcome of reading a logo file into the asset stored in its slot.
pub fn imported_logo<E: std::fmt::Display>(
    name: &str,
    read: Result<String, E>,
) -> SignatureResult<LogoAsset> {
    match read {
        Ok(data_url) => Ok(LogoAsset::new(data_url, name)),
        Err(e) => Err(SignatureError::LogoRead {
            name: name.to_string(),
            reason: e.to_string(),
        }),
    }
}
