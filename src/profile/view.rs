//! Merged view model of a profile.
//!
//! The profile's own fields always win; `common` only fills gaps (scalar
//! fields, theme, footer) or appends (social links, buttons).

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::schema::{Button, FooterSpec, Profile, ProfileDocument, SocialLink, Theme};
use crate::error::Result;
use crate::locale::Locale;

/// Page title used when the profile has neither title nor name.
pub const DEFAULT_TITLE: &str = "Links";

/// Avatar used when neither the profile nor common set one.
pub const DEFAULT_AVATAR: &str = "assets/profile.png";

/// Fully resolved content for one page render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub id: String,
    /// CSS variable name (without `--`) to value.
    pub theme: Option<Vec<(String, String)>>,
    pub title: String,
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    pub social: Vec<SocialView>,
    pub buttons: ButtonGroups,
    pub footer: FooterView,
}

/// Social link that survived the url filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialView {
    pub url: String,
    pub label: Option<String>,
    pub icon: Option<String>,
}

/// Profile buttons followed by common buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ButtonGroups {
    pub profile: Vec<ButtonView>,
    pub common: Vec<ButtonView>,
}

impl ButtonGroups {
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty() && self.common.is_empty()
    }

    /// A divider separates the groups only when both have buttons.
    pub fn needs_divider(&self) -> bool {
        !self.profile.is_empty() && !self.common.is_empty()
    }
}

/// Resolved button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: String,
    /// Navigation target; `None` renders the button locked.
    pub href: Option<String>,
    pub outline: bool,
}

/// Resolved footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub line1: String,
    pub line2: String,
    pub cta: Option<FooterCtaView>,
}

impl FooterView {
    pub fn is_visible(&self) -> bool {
        !self.line1.is_empty() || !self.line2.is_empty() || self.cta.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterCtaView {
    pub href: String,
    pub label: String,
}

/// First non-empty string among the options.
fn pick<'a>(options: &[Option<&'a String>]) -> Option<&'a str> {
    options
        .iter()
        .flatten()
        .copied()
        .map(String::as_str)
        .find(|s| !s.is_empty())
}

/// CSS text for a theme value; objects, arrays and null are skipped.
fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn theme_entries(theme: &Theme) -> Vec<(String, String)> {
    theme
        .iter()
        .filter_map(|(key, value)| css_value(value).map(|v| (key.clone(), v)))
        .collect()
}

fn social_view(link: &SocialLink) -> Option<SocialView> {
    let url = link.url.as_deref().filter(|u| !u.is_empty())?;
    Some(SocialView {
        url: url.to_string(),
        label: link.label.clone(),
        icon: link.icon.clone(),
    })
}

fn button_view(button: &Button, locale: Locale) -> ButtonView {
    let href = if button.is_locked() {
        None
    } else {
        button.url.clone().filter(|u| !u.is_empty())
    };
    ButtonView {
        label: pick(&[button.label.as_ref()])
            .unwrap_or(locale.unnamed_button())
            .to_string(),
        href,
        outline: button.kind.as_deref() == Some("outline"),
    }
}

fn footer_view(footer: &FooterSpec) -> FooterView {
    let line = |index: usize| {
        footer
            .lines
            .as_ref()
            .and_then(|lines| lines.get(index))
            .cloned()
            .flatten()
            .unwrap_or_default()
    };
    let cta = footer.cta.as_ref().and_then(|cta| {
        let href = cta.url.as_deref().filter(|u| !u.is_empty())?;
        Some(FooterCtaView {
            href: href.to_string(),
            label: pick(&[cta.label.as_ref()]).unwrap_or(href).to_string(),
        })
    });
    FooterView {
        line1: line(0),
        line2: line(1),
        cta,
    }
}

/// Merge a profile with the common section.
pub fn merge(id: &str, profile: &Profile, common: &Profile, locale: Locale) -> ProfileView {
    let theme = profile
        .theme
        .as_ref()
        .or(common.theme.as_ref())
        .map(theme_entries);

    let social = profile
        .social_links()
        .iter()
        .chain(common.social.as_deref().unwrap_or_default())
        .filter_map(social_view)
        .collect();

    let buttons = ButtonGroups {
        profile: profile.buttons().iter().map(|b| button_view(b, locale)).collect(),
        common: common.buttons().iter().map(|b| button_view(b, locale)).collect(),
    };

    let footer = profile
        .footer
        .as_ref()
        .or(common.footer.as_ref())
        .map(footer_view)
        .unwrap_or_default();

    ProfileView {
        id: id.to_string(),
        theme,
        title: pick(&[profile.title.as_ref(), profile.name.as_ref()])
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        name: pick(&[profile.name.as_ref()])
            .unwrap_or(locale.unnamed())
            .to_string(),
        tagline: pick(&[profile.tagline.as_ref(), common.tagline.as_ref()])
            .unwrap_or_default()
            .to_string(),
        avatar: pick(&[profile.avatar.as_ref(), common.avatar.as_ref()])
            .unwrap_or(DEFAULT_AVATAR)
            .to_string(),
        social,
        buttons,
        footer,
    }
}

/// Look up `id` in the document and merge it with the common section.
pub fn resolve_view(document: &ProfileDocument, id: &str, locale: Locale) -> Result<ProfileView> {
    let profile = document.find_profile(id)?;
    let view = merge(id, &profile, &document.common(), locale);
    debug!(
        profile_id = id,
        social = view.social.len(),
        profile_buttons = view.buttons.profile.len(),
        common_buttons = view.buttons.common.len(),
        "Resolved profile view"
    );
    Ok(view)
}
