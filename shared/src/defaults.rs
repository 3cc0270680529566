use crate::form::Field;

pub const DEFAULT_LOGO_LIGHT: &str =
    "https://drive.google.com/uc?export=view&id=1xMxmUS4Zshaw51om6QQZhVxBjveBQZ6L";
pub const DEFAULT_LOGO_DARK: &str =
    "https://drive.google.com/uc?export=view&id=1DkKreE2U0MKsUybeHnFNnmzPx5xXK76K";

pub const DEFAULT_LOGO_LIGHT_NAME: &str = "Logo por defecto (claro)";
pub const DEFAULT_LOGO_DARK_NAME: &str = "Logo por defecto (oscuro)";

/// How long the "copied" acknowledgement stays on the copy button.
pub const COPIED_RESET_MS: u32 = 2000;

/// Fallback text shown for a field the user left empty.
///
/// An empty entry means the field has no fallback and is omitted when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
}

impl Defaults {
    pub const MICHELEN: Defaults = Defaults {
        name: "Eric Y Michelen",
        title: "Principal and Partner",
        company: "Michelen Arquitectos",
        phone: "+1 (829) 273-8445",
        website: "www.michelenarquitectos.com",
    };

    pub fn fallback(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name,
            Field::Title => self.title,
            Field::Company => self.company,
            Field::Phone => self.phone,
            Field::Website => self.website,
            Field::Twitter => "",
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self::MICHELEN
    }
}
