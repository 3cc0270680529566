use pretty_assertions::assert_eq;
use shared::defaults::{DEFAULT_LOGO_DARK, DEFAULT_LOGO_LIGHT};
use shared::{
    Defaults, Field, FormState, LogoAsset, LogoSlot, PreviewMode, SignatureView, generate_html,
    imported_logo,
};
use strum::IntoEnumIterator;

fn form_without_logos() -> FormState {
    let mut form = FormState::default();
    form.clear_logo(LogoSlot::Light);
    form.clear_logo(LogoSlot::Dark);
    form
}

#[test]
fn test_empty_form_renders_defaults() {
    let html = generate_html(&form_without_logos(), PreviewMode::Light);

    let expected = concat!(
        r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; font-size: 14px; line-height: 1.4;">"#, "\n",
        "  <tr>\n",
        r#"    <td style="font-weight: 600; color: #1a1a1a; font-size: 15px;">Eric Y Michelen</td>"#, "\n",
        "  </tr>\n",
        "  <tr>\n",
        r#"    <td style="color: #6b6b6b; padding-top: 2px;">Principal and Partner</td>"#, "\n",
        "  </tr>\n",
        "  <tr>\n",
        r#"    <td style="color: #6b6b6b; padding-top: 2px;">Michelen Arquitectos</td>"#, "\n",
        "  </tr>\n",
        "  <tr>\n",
        r#"    <td style="color: #6b6b6b; padding-top: 4px;"><a href="tel:+1(829)273-8445" style="color: #6b6b6b; text-decoration: none;">+1 (829) 273-8445</a></td>"#, "\n",
        "  </tr>\n",
        "  <tr>\n",
        r#"    <td style="padding-top: 4px;"><a href="https://www.michelenarquitectos.com" target="_blank" style="color: #6b6b6b; text-decoration: none;">www.michelenarquitectos.com</a></td>"#, "\n",
        "  </tr>\n",
        "  \n",
        "</table>",
    );

    assert_eq!(html, expected);
}

#[test]
fn test_generation_is_deterministic() {
    let mut form = FormState::default();
    form.set(Field::Name, "Jane Doe");
    form.set(Field::Twitter, "jane");

    for mode in [PreviewMode::Light, PreviewMode::Dark] {
        assert_eq!(generate_html(&form, mode), generate_html(&form.clone(), mode));
    }
}

#[test]
fn test_empty_phone_and_twitter_omit_contact_line() {
    let defaults = Defaults { phone: "", ..Defaults::MICHELEN };
    let view = SignatureView::resolve_with(&FormState::default(), PreviewMode::Light, &defaults);

    assert!(!view.has_contact_line());
    assert_eq!(view.contact_line_text(), None);
    let html = view.to_html();
    assert!(!html.contains("tel:"));
    assert!(
        !html.contains("color: #6b6b6b; padding-top: 4px;"),
        "contact row should be absent"
    );
}

#[test]
fn test_twitter_only_contact_line() {
    let defaults = Defaults { phone: "", ..Defaults::MICHELEN };
    let mut form = form_without_logos();
    form.set(Field::Twitter, "@jane");

    let view = SignatureView::resolve_with(&form, PreviewMode::Light, &defaults);
    assert_eq!(view.contact_line_text().as_deref(), Some("@jane"));
    assert!(view.to_html().contains(
        "<td style=\"color: #6b6b6b; padding-top: 4px;\">@jane</td>"
    ));
}

#[test]
fn test_twitter_handles_normalize() {
    let mut with_at = form_without_logos();
    with_at.set(Field::Twitter, "@jane");
    let mut without_at = form_without_logos();
    without_at.set(Field::Twitter, "jane");

    assert_eq!(
        generate_html(&with_at, PreviewMode::Light),
        generate_html(&without_at, PreviewMode::Light)
    );
    let view = SignatureView::resolve(&with_at, PreviewMode::Light);
    assert_eq!(view.twitter.as_deref(), Some("@jane"));
    assert_eq!(
        view.contact_line_text().as_deref(),
        Some("+1 (829) 273-8445 • @jane")
    );
}

#[test]
fn test_website_href_normalization() {
    let mut form = form_without_logos();

    form.set(Field::Website, "michelen.com");
    let html = generate_html(&form, PreviewMode::Light);
    assert!(html.contains(r#"<a href="https://michelen.com" target="_blank""#));
    assert!(html.contains(">michelen.com</a>"));

    form.set(Field::Website, "http://michelen.com");
    let view = SignatureView::resolve(&form, PreviewMode::Light);
    assert_eq!(view.website_href, "http://michelen.com");
}

#[test]
fn test_defaults_are_not_written_back() {
    let form = FormState::default();
    let _ = generate_html(&form, PreviewMode::Dark);
    for field in Field::iter() {
        assert_eq!(form.get(field), "");
    }
}

#[test]
fn test_clearing_and_reimporting_logo() {
    let mut form = FormState::default();
    assert!(generate_html(&form, PreviewMode::Light).contains("<img src="));

    form.clear_logo(LogoSlot::Light);
    assert!(!generate_html(&form, PreviewMode::Light).contains("<img"));

    let data_url = "data:image/png;base64,iVBORw0KGgo=";
    let asset = imported_logo::<String>("brand.png", Ok(data_url.to_string())).unwrap();
    form.set_logo(LogoSlot::Light, asset);

    assert_eq!(form.logo_light, LogoAsset::new(data_url, "brand.png"));
    let html = generate_html(&form, PreviewMode::Light);
    assert!(html.contains(&format!(r#"<img src="{data_url}" alt="Logo" height="40""#)));
}

#[test]
fn test_logo_links_to_website() {
    let mut form = FormState::default();
    form.set(Field::Website, "michelen.com");
    form.set_logo(LogoSlot::Light, LogoAsset::new("https://cdn.example/logo.png", "logo"));

    let html = generate_html(&form, PreviewMode::Light);
    assert!(html.contains(
        r#"<a href="https://michelen.com" target="_blank" style="text-decoration: none;">"#
    ));
    assert!(html.contains(r#"<img src="https://cdn.example/logo.png""#));
}

#[test]
fn test_mode_switches_only_logo() {
    let mut form = FormState::default();
    form.set(Field::Name, "Jane Doe");

    let light = SignatureView::resolve(&form, PreviewMode::Light);
    let dark = SignatureView::resolve(&form, PreviewMode::Dark);

    assert_eq!(light.logo.as_deref(), Some(DEFAULT_LOGO_LIGHT));
    assert_eq!(dark.logo.as_deref(), Some(DEFAULT_LOGO_DARK));
    assert_eq!(
        SignatureView { logo: None, ..light },
        SignatureView { logo: None, ..dark }
    );
}

#[test]
fn test_dark_mode_without_dark_logo_drops_logo_row() {
    let mut form = FormState::default();
    form.clear_logo(LogoSlot::Dark);

    assert!(generate_html(&form, PreviewMode::Light).contains("<img"));
    assert!(!generate_html(&form, PreviewMode::Dark).contains("<img"));
}

#[test]
fn test_default_logo_url_is_escaped_in_attribute() {
    let html = generate_html(&FormState::default(), PreviewMode::Light);
    assert!(html.contains("uc?export=view&amp;id=1xMxmUS4Zshaw51om6QQZhVxBjveBQZ6L"));
}

#[test]
fn test_markup_in_fields_is_escaped() {
    let mut form = form_without_logos();
    form.set(Field::Company, "Smith & <Sons>");

    let html = generate_html(&form, PreviewMode::Light);
    assert!(html.contains(">Smith &amp; &lt;Sons&gt;</td>"));
    assert_eq!(
        SignatureView::resolve(&form, PreviewMode::Light).company,
        "Smith & <Sons>"
    );
}
