use thiserror::Error;

pub type SignatureResult<T> = Result<T, SignatureError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("'{name}' is not an image (type '{mime}')")]
    UnsupportedLogoType { name: String, mime: String },

    #[error("Failed to read logo '{name}': {reason}")]
    LogoRead { name: String, reason: String },
}
