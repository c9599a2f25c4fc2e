//! Profile document schema.
//!
//! The document stays raw JSON; only the requested profile and `common` are
//! read into [`Profile`], so a broken sibling profile never blocks a lookup.
//! Every field is optional and a mistyped field reads as missing. Gaps are
//! filled by the merge in [`super::view`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::lenient;
use crate::error::{LinkError, Result};

/// Theme variables, in document order.
pub type Theme = Map<String, Value>;

/// Top-level data file: `common`, `profiles`, and older profiles stored
/// directly as top-level keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ProfileDocument {
    entries: Map<String, Value>,
}

impl ProfileDocument {
    /// Look up a profile by identifier.
    ///
    /// Checks `profiles[id]` first, then the top-level `id` key. Only JSON
    /// objects count as profiles.
    pub fn find_profile(&self, id: &str) -> Result<Profile> {
        let nested = self.entries.get("profiles").and_then(|p| p.get(id));
        [nested, self.entries.get(id)]
            .into_iter()
            .flatten()
            .find(|value| value.is_object())
            .map(Profile::from_json)
            .ok_or_else(|| LinkError::ProfileNotFound { id: id.to_string() })
    }

    /// The `common` section, or an empty profile.
    pub fn common(&self) -> Profile {
        self.entries
            .get("common")
            .filter(|value| value.is_object())
            .map(Profile::from_json)
            .unwrap_or_default()
    }
}

/// One profile (or the `common` defaults).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient::section")]
    pub theme: Option<Theme>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub social: Option<Vec<SocialLink>>,
    /// Older name for `social`.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub links: Option<Vec<SocialLink>>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub buttons: Option<Vec<Button>>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub footer: Option<FooterSpec>,
}

impl Profile {
    /// Read a profile object from raw JSON.
    pub fn from_json(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_else(|e| {
            warn!(error = %e, "Unreadable profile, using an empty one");
            Self::default()
        })
    }

    /// Social entries, preferring `social` over `links`.
    pub fn social_links(&self) -> &[SocialLink] {
        self.social
            .as_deref()
            .or(self.links.as_deref())
            .unwrap_or_default()
    }

    pub fn buttons(&self) -> &[Button] {
        self.buttons.as_deref().unwrap_or_default()
    }
}

/// Social icon link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    /// Key into the icon table.
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: Option<String>,
}

/// Call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Button {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    /// Styling variant, e.g. `outline`.
    #[serde(default, rename = "type", deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub locked: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub disabled: bool,
}

impl Button {
    /// Locked and disabled both mean "not clickable".
    pub const fn is_locked(&self) -> bool {
        self.locked || self.disabled
    }
}

/// Footer block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterSpec {
    /// Lines by position; an unusable line reads as `None`.
    #[serde(default, deserialize_with = "lenient::lines")]
    pub lines: Option<Vec<Option<String>>>,
    #[serde(default, deserialize_with = "lenient::section")]
    pub cta: Option<FooterCta>,
}

/// Footer call-to-action link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterCta {
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
}
