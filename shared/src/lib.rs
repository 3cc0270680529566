pub mod defaults;
pub mod error;
pub mod form;
pub mod logo;
pub mod template;

pub use defaults::{COPIED_RESET_MS, Defaults};
pub use error::{SignatureError, SignatureResult};
pub use form::{Field, FormState, LogoAsset, LogoSlot, PreviewMode};
pub use logo::{check_logo_type, imported_logo};
pub use template::{SignatureView, generate_html};
