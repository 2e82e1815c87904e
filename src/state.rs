//! Front-end state and the pure update function.
//!
//! The front end never mutates [`AppState`] directly: it builds an
//! [`Action`] and asks [`reduce`] for the next state.

use crate::domain::History;
use crate::domain::entities::ShortenRequest;

/// Current contents of the shortening form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub long_url: String,
    pub alias: String,
    pub custom_domain: String,
}

impl FormState {
    /// Converts the form into a shortening request.
    ///
    /// Empty optional fields become `None`.
    pub fn to_request(&self) -> ShortenRequest {
        ShortenRequest {
            long_url: self.long_url.clone(),
            alias: non_empty(&self.alias),
            custom_domain: non_empty(&self.custom_domain),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Everything the rendering layer needs to draw the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub form: FormState,
    pub history: History,
    /// A shortening call is in flight; submission is disabled.
    pub is_loading: bool,
    /// Message of the last failed submission.
    pub error: Option<String>,
    /// Short URL most recently copied, while the indicator is showing.
    pub copied: Option<String>,
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    HistoryLoaded(History),
    SetLongUrl(String),
    SetAlias(String),
    SetCustomDomain(String),
    SubmitStarted,
    /// Carries the history with the new entry already prepended.
    SubmitSucceeded(History),
    SubmitFailed(String),
    Copied(String),
    CopyExpired(String),
    HistoryCleared,
}

/// Computes the state that follows `action`.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::HistoryLoaded(history) => next.history = history.clone(),
        Action::SetLongUrl(value) => next.form.long_url = value.clone(),
        Action::SetAlias(value) => next.form.alias = value.clone(),
        Action::SetCustomDomain(value) => next.form.custom_domain = value.clone(),
        Action::SubmitStarted => {
            next.error = None;
            next.copied = None;
            next.is_loading = true;
        }
        Action::SubmitSucceeded(history) => {
            next.history = history.clone();
            next.form = FormState::default();
            next.is_loading = false;
        }
        Action::SubmitFailed(message) => {
            next.error = Some(message.clone());
            next.is_loading = false;
        }
        Action::Copied(url) => next.copied = Some(url.clone()),
        Action::CopyExpired(url) => {
            // An older timer must not hide a newer indicator.
            if next.copied.as_deref() == Some(url.as_str()) {
                next.copied = None;
            }
        }
        Action::HistoryCleared => next.history = History::new(),
    }

    next
}
