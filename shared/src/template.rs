//! Signature projection and HTML generation.
//!
//! Both the exported HTML and the on-screen preview are built from a
//! [`SignatureView`], so they apply the same fallbacks and normalization.

use crate::defaults::Defaults;
use crate::form::{Field, FormState, PreviewMode};

pub const CONTACT_SEPARATOR: &str = " • ";

const TABLE_STYLE: &str = "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; font-size: 14px; line-height: 1.4;";
const NAME_STYLE: &str = "font-weight: 600; color: #1a1a1a; font-size: 15px;";
const MUTED_STYLE: &str = "color: #6b6b6b; padding-top: 2px;";
const CONTACT_STYLE: &str = "color: #6b6b6b; padding-top: 4px;";
const LINK_STYLE: &str = "color: #6b6b6b; text-decoration: none;";
const LOGO_HEIGHT: u32 = 40;

/// Phone number as displayed, and as dialed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

/// Effective signature contents for one `(FormState, PreviewMode)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureView {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: Option<Phone>,
    pub twitter: Option<String>,
    pub website: String,
    pub website_href: String,
    pub logo: Option<String>,
}

impl SignatureView {
    pub fn resolve(form: &FormState, mode: PreviewMode) -> Self {
        Self::resolve_with(form, mode, &Defaults::MICHELEN)
    }

    pub fn resolve_with(form: &FormState, mode: PreviewMode, defaults: &Defaults) -> Self {
        let effective = |field: Field| effective_value(form, defaults, field).to_string();

        let phone = effective(Field::Phone);
        let website = effective(Field::Website);

        Self {
            name: effective(Field::Name),
            title: effective(Field::Title),
            company: effective(Field::Company),
            phone: (!phone.is_empty()).then(|| Phone {
                dial: dial_number(&phone),
                display: phone,
            }),
            twitter: twitter_handle(&form.twitter),
            website_href: website_href(&website),
            website,
            logo: form.current_logo(mode).map(str::to_string),
        }
    }

    pub fn has_contact_line(&self) -> bool {
        self.phone.is_some() || self.twitter.is_some()
    }

    /// Contact line as plain text, `None` when neither phone nor twitter is present.
    pub fn contact_line_text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .phone
            .iter()
            .map(|p| p.display.as_str())
            .chain(self.twitter.as_deref())
            .collect();
        (!parts.is_empty()).then(|| parts.join(CONTACT_SEPARATOR))
    }

    fn contact_line_html(&self) -> Option<String> {
        let mut parts = Vec::with_capacity(2);
        if let Some(phone) = &self.phone {
            parts.push(format!(
                r#"<a href="tel:{}" style="{LINK_STYLE}">{}</a>"#,
                escape_html(&phone.dial),
                escape_html(&phone.display)
            ));
        }
        if let Some(handle) = &self.twitter {
            parts.push(escape_html(handle));
        }
        (!parts.is_empty()).then(|| parts.join(CONTACT_SEPARATOR))
    }

    pub fn to_html(&self) -> String {
        let href = escape_html(&self.website_href);

        let contact_row = self
            .contact_line_html()
            .map(|line| {
                format!(
                    "<tr>\n    <td style=\"{CONTACT_STYLE}\">{line}</td>\n  </tr>"
                )
            })
            .unwrap_or_default();

        let logo_row = self
            .logo
            .as_deref()
            .map(|src| {
                format!(
                    r#"<tr>
    <td style="padding-top: 12px;">
      <a href="{href}" target="_blank" style="text-decoration: none;">
        <img src="{}" alt="Logo" height="{LOGO_HEIGHT}" style="display: block; border: 0;" />
      </a>
    </td>
  </tr>"#,
                    escape_html(src)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="{TABLE_STYLE}">
  <tr>
    <td style="{NAME_STYLE}">{name}</td>
  </tr>
  <tr>
    <td style="{MUTED_STYLE}">{title}</td>
  </tr>
  <tr>
    <td style="{MUTED_STYLE}">{company}</td>
  </tr>
  {contact_row}
  <tr>
    <td style="padding-top: 4px;"><a href="{href}" target="_blank" style="{LINK_STYLE}">{website}</a></td>
  </tr>
  {logo_row}
</table>"#,
            name = escape_html(&self.name),
            title = escape_html(&self.title),
            company = escape_html(&self.company),
            website = escape_html(&self.website),
        )
    }
}

/// Builds the signature HTML for the logo slot matching `mode`.
pub fn generate_html(form: &FormState, mode: PreviewMode) -> String {
    SignatureView::resolve(form, mode).to_html()
}

pub fn effective_value<'a>(form: &'a FormState, defaults: &Defaults, field: Field) -> &'a str {
    match form.get(field) {
        "" => defaults.fallback(field),
        value => value,
    }
}

pub fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}

pub fn dial_number(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalizes `@jane` and `jane` to `@jane`. Empty input has no handle.
pub fn twitter_handle(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let handle = raw.strip_prefix('@').unwrap_or(raw);
    Some(format!("@{handle}"))
}

/// Escapes values before interpolation, so a `&` in a URL is emitted as `&amp;`.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
