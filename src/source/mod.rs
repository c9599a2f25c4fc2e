//! Data-source discovery.
//!
//! Works out which profile to render and the ordered list of locations the
//! profile document may live at. Every override source is consulted in a
//! fixed precedence: query > config > global > page attribute > default.

use serde::Serialize;
use tracing::{debug, trace, warn};
use url::Url;

use crate::config::PageConfig;

/// Profile rendered when no source names one.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Overrides carried in the page URL's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// `id`: profile identifier
    pub id: Option<String>,
    /// `base`: data-source base URL
    pub base: Option<String>,
    /// `dataUrl`: full data-source URL
    pub data_url: Option<String>,
}

impl QueryParams {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// Only the first occurrence of each parameter counts.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "id" => &mut params.id,
                "base" => &mut params.base,
                "dataUrl" => &mut params.data_url,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Query parameters of a page location.
    pub fn from_url(url: &Url) -> Self {
        url.query().map(Self::from_query).unwrap_or_default()
    }

    /// Overlay `other` on top of `self`; values present in `other` win.
    pub fn overlay(self, other: Self) -> Self {
        Self {
            id: other.id.or(self.id),
            base: other.base.or(self.base),
            data_url: other.data_url.or(self.data_url),
        }
    }
}

/// Process-wide fallbacks consulted after the configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Globals {
    pub profile_id: Option<String>,
    pub data_base: Option<String>,
}

/// Everything source resolution looks at.
#[derive(Debug, Clone)]
pub struct SourceInputs {
    /// Location of the page; relative candidates resolve against it.
    pub location: Url,
    pub query: QueryParams,
    pub config: PageConfig,
    pub globals: Globals,
    /// `data-profile-id` attribute of the host page body.
    pub page_attribute: Option<String>,
}

impl SourceInputs {
    /// Inputs for a page location, reading query parameters from it.
    pub fn new(location: Url) -> Self {
        let query = QueryParams::from_url(&location);
        Self {
            location,
            query,
            config: PageConfig::default(),
            globals: Globals::default(),
            page_attribute: None,
        }
    }
}

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    DataUrlOverride,
    BaseOverride,
    PageRelative,
    ParentDir,
    DataPages,
    PublicDataPages,
}

/// One possible location of the profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub url: String,
    pub origin: CandidateOrigin,
}

/// Result of source resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSources {
    pub profile_id: String,
    pub candidates: Vec<Candidate>,
}

/// Returns the first lookup yielding a non-blank value, evaluating lazily.
fn first_present<'a>(lookups: &[&dyn Fn() -> Option<&'a str>]) -> Option<&'a str> {
    lookups
        .iter()
        .find_map(|lookup| lookup().filter(|value| !value.trim().is_empty()))
}

/// Resolve the profile identifier to render.
pub fn resolve_profile_id(inputs: &SourceInputs) -> String {
    let id = first_present(&[
        &|| inputs.query.id.as_deref().map(str::trim),
        &|| inputs.config.profile_id.as_deref(),
        &|| inputs.globals.profile_id.as_deref(),
        &|| inputs.page_attribute.as_deref(),
    ])
    .unwrap_or(DEFAULT_PROFILE_ID)
    .trim()
    .to_string();
    trace!(profile_id = %id, "Resolved profile id");
    id
}

/// Resolve the data-source base override, if any.
pub fn resolve_base(inputs: &SourceInputs) -> Option<&str> {
    first_present(&[
        &|| inputs.query.base.as_deref().map(str::trim),
        &|| inputs.config.data_base.as_deref(),
        &|| inputs.globals.data_base.as_deref(),
    ])
}

/// Resolve the full data-URL override, if any.
pub fn resolve_data_url(inputs: &SourceInputs) -> Option<&str> {
    first_present(&[
        &|| inputs.query.data_url.as_deref().map(str::trim),
        &|| inputs.config.data_url.as_deref(),
    ])
}

fn join(base: &Url, relative: &str, origin: CandidateOrigin) -> Option<Candidate> {
    match base.join(relative) {
        Ok(url) => Some(Candidate {
            url: url.to_string(),
            origin,
        }),
        Err(e) => {
            warn!(base = %base, relative, error = %e, "Skipping unbuildable candidate");
            None
        }
    }
}

/// Build the ordered candidate list, highest priority first.
///
/// Candidates that cannot be built (no override given, or an override that
/// is not a valid URL) are left out.
pub fn resolve_candidates(inputs: &SourceInputs) -> Vec<Candidate> {
    let data_file = inputs.config.data_file();
    let mut candidates = Vec::with_capacity(6);

    if let Some(data_url) = resolve_data_url(inputs) {
        candidates.push(Candidate {
            url: data_url.to_string(),
            origin: CandidateOrigin::DataUrlOverride,
        });
    }

    if let Some(base) = resolve_base(inputs) {
        match Url::parse(base) {
            Ok(base_url) => {
                candidates.extend(join(&base_url, data_file, CandidateOrigin::BaseOverride));
            }
            Err(e) => warn!(base, error = %e, "Ignoring invalid base override"),
        }
    }

    let location = &inputs.location;
    candidates.extend(
        [
            (format!("./{data_file}"), CandidateOrigin::PageRelative),
            (format!("../{data_file}"), CandidateOrigin::ParentDir),
            (format!("../data/pages/{data_file}"), CandidateOrigin::DataPages),
            (
                format!("../public/data/pages/{data_file}"),
                CandidateOrigin::PublicDataPages,
            ),
        ]
        .into_iter()
        .filter_map(|(relative, origin)| join(location, &relative, origin)),
    );

    debug!(count = candidates.len(), "Resolved data source candidates");
    candidates
}

/// Resolve both the profile id and the candidate list.
pub fn resolve(inputs: &SourceInputs) -> ResolvedSources {
    ResolvedSources {
        profile_id: resolve_profile_id(inputs),
        candidates: resolve_candidates(inputs),
    }
}
