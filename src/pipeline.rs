//! One page load: resolve sources, load, merge, render, report.
//!
//! A run moves `Idle → Loading → Rendered | Failed` exactly once. The
//! pipeline is consumed by [`Pipeline::run`], so it cannot be re-entered.

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::error::{LinkError, Result};
use crate::loader::{Fetcher, load_first};
use crate::locale::Locale;
use crate::profile::{ProfileView, resolve_view};
use crate::render::{Page, hide_status, render_view, show_status};
use crate::source::{self, Candidate, SourceInputs};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Idle,
    Loading,
    Rendered,
    Failed,
}

impl RunState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rendered | Self::Failed)
    }
}

/// Terminal result of a run.
#[derive(Debug)]
pub struct RunOutcome {
    pub state: RunState,
    pub profile_id: String,
    /// Candidate the document was loaded from.
    pub source: Option<Candidate>,
    pub view: Option<ProfileView>,
    pub error: Option<LinkError>,
    pub page: Page,
}

impl RunOutcome {
    pub fn is_rendered(&self) -> bool {
        self.state == RunState::Rendered
    }
}

/// Drives one page load with the given fetcher.
pub struct Pipeline<F> {
    fetcher: F,
    locale: Locale,
    state: RunState,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, locale: Locale) -> Self {
        Self {
            fetcher,
            locale,
            state: RunState::Idle,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        info!(from = ?self.state, to = ?next, "Page state");
        self.state = next;
    }

    /// Load and render the profile into `page`.
    ///
    /// The page attribute falls back to the page's own `data-profile-id`.
    /// On failure the content elements are left untouched and only the
    /// status banner changes.
    #[instrument(skip_all, fields(location = %inputs.location))]
    pub async fn run(mut self, inputs: &SourceInputs, mut page: Page) -> RunOutcome {
        let mut inputs = inputs.clone();
        if inputs.page_attribute.is_none() {
            inputs.page_attribute = page.profile_attribute().map(str::to_string);
        }

        let resolved = source::resolve(&inputs);
        self.transition(RunState::Loading);

        let mut loaded_from = None;
        let result: Result<ProfileView> = async {
            let loaded = load_first(&self.fetcher, &resolved.candidates).await?;
            loaded_from = Some(loaded.source);
            let view = resolve_view(&loaded.document, &resolved.profile_id, self.locale)?;
            render_view(&mut page, &view, self.locale)?;
            Ok::<_, LinkError>(view)
        }
        .await;

        match result {
            Ok(view) => {
                hide_status(&mut page);
                self.transition(RunState::Rendered);
                RunOutcome {
                    state: self.state,
                    profile_id: resolved.profile_id,
                    source: loaded_from,
                    view: Some(view),
                    error: None,
                    page,
                }
            }
            Err(e) => {
                error!(error = %e, "Page failed to load");
                show_status(&mut page, &self.locale.load_failed(&e.to_string()), true);
                self.transition(RunState::Failed);
                RunOutcome {
                    state: self.state,
                    profile_id: resolved.profile_id,
                    source: loaded_from,
                    view: None,
                    error: Some(e),
                    page,
                }
            }
        }
    }
}
