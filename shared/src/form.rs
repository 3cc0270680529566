use strum_macros::{Display, EnumIter};

use crate::defaults::{
    DEFAULT_LOGO_DARK, DEFAULT_LOGO_DARK_NAME, DEFAULT_LOGO_LIGHT, DEFAULT_LOGO_LIGHT_NAME,
};

/// Text inputs of the signature form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Title,
    Company,
    Phone,
    Twitter,
    Website,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Title => "Cargo",
            Field::Company => "Empresa",
            Field::Phone => "Teléfono",
            Field::Twitter => "Twitter / X",
            Field::Website => "Sitio Web",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "María García",
            Field::Title => "Diseñadora de Producto",
            Field::Company => "Michellen S.A.",
            Field::Phone => "+1 (809) 123-4567",
            Field::Twitter => "mariag",
            Field::Website => "https://michellen.com",
        }
    }

    /// HTML `type` attribute for the input element.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Phone => "tel",
            Field::Website => "url",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogoSlot {
    Light,
    Dark,
}

impl LogoSlot {
    pub fn label(self) -> &'static str {
        match self {
            LogoSlot::Light => "Logo (modo claro)",
            LogoSlot::Dark => "Logo (modo oscuro)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PreviewMode {
    #[default]
    Light,
    Dark,
}

impl PreviewMode {
    pub fn toggled(self) -> Self {
        match self {
            PreviewMode::Light => PreviewMode::Dark,
            PreviewMode::Dark => PreviewMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == PreviewMode::Dark
    }

    /// The logo slot that is "current" while this mode is active.
    pub fn logo_slot(self) -> LogoSlot {
        match self {
            PreviewMode::Light => LogoSlot::Light,
            PreviewMode::Dark => LogoSlot::Dark,
        }
    }
}

/// A logo reference: remote URL or `data:` URL, plus the label shown in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoAsset {
    pub url: String,
    pub name: String,
}

impl LogoAsset {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Raw form values as typed by the user. Fallbacks are never written back here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub twitter: String,
    pub website: String,
    pub logo_light: LogoAsset,
    pub logo_dark: LogoAsset,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            company: String::new(),
            phone: String::new(),
            twitter: String::new(),
            website: String::new(),
            logo_light: LogoAsset::new(DEFAULT_LOGO_LIGHT, DEFAULT_LOGO_LIGHT_NAME),
            logo_dark: LogoAsset::new(DEFAULT_LOGO_DARK, DEFAULT_LOGO_DARK_NAME),
        }
    }
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Title => &self.title,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Twitter => &self.twitter,
            Field::Website => &self.website,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Title => &mut self.title,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Twitter => &mut self.twitter,
            Field::Website => &mut self.website,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.get_mut(field).clear();
    }

    pub fn logo(&self, slot: LogoSlot) -> &LogoAsset {
        match slot {
            LogoSlot::Light => &self.logo_light,
            LogoSlot::Dark => &self.logo_dark,
        }
    }

    pub fn set_logo(&mut self, slot: LogoSlot, asset: LogoAsset) {
        match slot {
            LogoSlot::Light => self.logo_light = asset,
            LogoSlot::Dark => self.logo_dark = asset,
        }
    }

    pub fn clear_logo(&mut self, slot: LogoSlot) {
        self.set_logo(slot, LogoAsset::default());
    }

    /// URL of the logo for the given preview mode, or `None` when that slot is empty.
    pub fn current_logo(&self, mode: PreviewMode) -> Option<&str> {
        let asset = self.logo(mode.logo_slot());
        (!asset.is_empty()).then_some(asset.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fresh_state_has_empty_fields_and_default_logos() {
        let form = FormState::default();
        for field in Field::iter() {
            assert_eq!(form.get(field), "", "{field} should start empty");
        }
        assert_eq!(form.logo_light.url, DEFAULT_LOGO_LIGHT);
        assert_eq!(form.logo_dark.name, DEFAULT_LOGO_DARK_NAME);
    }

    #[test]
    fn set_and_clear_round_through_field() {
        let mut form = FormState::default();
        form.set(Field::Twitter, "@jane");
        assert_eq!(form.twitter, "@jane");
        form.clear(Field::Twitter);
        assert!(form.twitter.is_empty());
    }

    #[test]
    fn set_accepts_any_string() {
        let mut form = FormState::default();
        form.set(Field::Phone, "not a phone <number>");
        assert_eq!(form.get(Field::Phone), "not a phone <number>");
    }

    #[test]
    fn clearing_a_logo_empties_url_and_name() {
        let mut form = FormState::default();
        form.clear_logo(LogoSlot::Dark);
        assert_eq!(form.logo_dark, LogoAsset::default());
        assert_eq!(form.current_logo(PreviewMode::Dark), None);
        assert_eq!(form.current_logo(PreviewMode::Light), Some(DEFAULT_LOGO_LIGHT));
    }

    #[test]
    fn mode_selects_logo_slot() {
        assert_eq!(PreviewMode::Light.logo_slot(), LogoSlot::Light);
        assert_eq!(PreviewMode::Light.toggled(), PreviewMode::Dark);
        assert!(PreviewMode::Dark.is_dark());
        assert_eq!(PreviewMode::default(), PreviewMode::Light);
    }

    #[test]
    fn field_names_are_lowercase() {
        let names: Vec<String> = Field::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["name", "title", "company", "phone", "twitter", "website"]);
    }
}
