//! Front-end session: state ownership, submission flow and timers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::application::services::{HistoryService, ShortenerService};
use crate::domain::entities::{ShortenRequest, ShortenedEntry};
use crate::error::ShortenError;
use crate::infrastructure::clipboard::Clipboard;
use crate::infrastructure::confirm::Confirmer;
use crate::infrastructure::storage::PersistenceSlot;
use crate::state::{Action, AppState, FormState, reduce};

/// How long the "copied" indicator stays visible by default.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Question asked before the history is wiped.
pub const CLEAR_PROMPT: &str =
    "Are you sure you want to clear your history? This action cannot be undone.";

/// Draws the front end after every state change.
///
/// `action` is the transition that produced `state`, so renderers can print
/// only what changed.
pub trait Renderer: Send + Sync {
    fn render(&self, state: &AppState, action: &Action);
}

/// Result of [`Session::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The URL was shortened and the entry stored at the top of the history.
    Shortened(ShortenedEntry),
    /// The attempt failed; the message is already in [`AppState::error`].
    Failed(ShortenError),
    /// Another submission was still in flight.
    Ignored,
}

/// State plus renderer, shared with the copy timer task.
struct Shared {
    state: Mutex<AppState>,
    renderer: Arc<dyn Renderer>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, AppState> {
        // The state is plain data; a panic elsewhere cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, action: Action) -> AppState {
        let next = {
            let mut state = self.lock();
            let next = reduce(&state, &action);
            *state = next.clone();
            next
        };
        self.renderer.render(&next, &action);
        next
    }

    /// Marks a submission as started unless one is already running.
    ///
    /// Returns the form contents to submit.
    fn begin_submit(&self) -> Option<FormState> {
        let action = Action::SubmitStarted;
        let next = {
            let mut state = self.lock();
            if state.is_loading {
                return None;
            }
            let next = reduce(&state, &action);
            *state = next.clone();
            next
        };
        self.renderer.render(&next, &action);
        Some(next.form)
    }
}

/// One running front end.
///
/// Owns the [`AppState`], runs submissions through the shortener, persists
/// history, and drives the copied-indicator timer. Dropping the session
/// cancels a pending timer.
pub struct Session {
    shared: Arc<Shared>,
    shortener: Arc<ShortenerService>,
    history: Arc<HistoryService<dyn PersistenceSlot>>,
    clipboard: Arc<dyn Clipboard>,
    copy_feedback: Duration,
    copy_timer: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    /// Creates a session with empty state. Call [`Session::start`] to load
    /// the persisted history.
    pub fn new(
        shortener: Arc<ShortenerService>,
        history: Arc<HistoryService<dyn PersistenceSlot>>,
        clipboard: Arc<dyn Clipboard>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(AppState::default()),
                renderer,
            }),
            shortener,
            history,
            clipboard,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
            copy_timer: Mutex::new(None),
        }
    }

    /// Sets how long the copied indicator stays visible.
    pub fn with_copy_feedback(mut self, duration: Duration) -> Self {
        self.copy_feedback = duration;
        self
    }

    /// Rehydrates the history from the persistence slot.
    pub async fn start(self) -> Self {
        let history = self.history.load().await;
        self.shared.dispatch(Action::HistoryLoaded(history));
        self
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.shared.lock().clone()
    }

    pub fn set_long_url(&self, value: impl Into<String>) {
        self.shared.dispatch(Action::SetLongUrl(value.into()));
    }

    pub fn set_alias(&self, value: impl Into<String>) {
        self.shared.dispatch(Action::SetAlias(value.into()));
    }

    pub fn set_custom_domain(&self, value: impl Into<String>) {
        self.shared.dispatch(Action::SetCustomDomain(value.into()));
    }

    /// Fills the form from `request` and submits it.
    pub async fn submit_request(&self, request: ShortenRequest) -> SubmitOutcome {
        self.set_long_url(request.long_url);
        self.set_alias(request.alias.unwrap_or_default());
        self.set_custom_domain(request.custom_domain.unwrap_or_default());
        self.submit().await
    }

    /// Submits the current form.
    ///
    /// At most one submission runs at a time; a call made while another is
    /// in flight returns [`SubmitOutcome::Ignored`] without touching state.
    /// On success the new entry is prepended, the whole list is persisted,
    /// and the form is cleared. A failed write is reported as
    /// [`ShortenError::Unknown`] and leaves the history unchanged. The
    /// loading flag is cleared on every outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(form) = self.shared.begin_submit() else {
            warn!("Submission ignored: another one is in flight");
            return SubmitOutcome::Ignored;
        };

        let request = form.to_request();

        let short_url = match self.shortener.shorten(&request).await {
            Ok(short_url) => short_url,
            Err(e) => {
                info!(code = e.code(), "Shortening rejected: {}", e);
                self.shared.dispatch(Action::SubmitFailed(e.to_string()));
                return SubmitOutcome::Failed(e);
            }
        };

        let current = self.shared.lock().history.clone();
        let entry = ShortenedEntry::new(current.next_id(Utc::now()), request.long_url, short_url);
        let updated = current.append(entry.clone());

        if let Err(e) = self.history.save(&updated).await {
            error!("Failed to persist history: {}", e);
            let err = ShortenError::unknown(e);
            self.shared.dispatch(Action::SubmitFailed(err.to_string()));
            return SubmitOutcome::Failed(err);
        }

        self.shared.dispatch(Action::SubmitSucceeded(updated));
        SubmitOutcome::Shortened(entry)
    }

    /// Copies `url` to the clipboard and shows the copied indicator.
    ///
    /// Clipboard failures are logged and otherwise ignored. The indicator is
    /// cleared after the copy feedback duration; a newer copy replaces the
    /// pending timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn copy(&self, url: &str) {
        if let Err(e) = self.clipboard.write_text(url) {
            warn!("Clipboard write failed: {}", e);
        }

        self.shared.dispatch(Action::Copied(url.to_string()));

        let shared = Arc::clone(&self.shared);
        let delay = self.copy_feedback;
        let expired = url.to_string();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.dispatch(Action::CopyExpired(expired));
        });

        let mut timer = self.copy_timer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }

    /// Copies the short URL of the history entry at `index` (0 = newest).
    ///
    /// Returns the copied URL, or `None` if there is no such entry.
    pub fn copy_entry(&self, index: usize) -> Option<String> {
        let short = self.shared.lock().history.get(index)?.short.clone();
        self.copy(&short);
        Some(short)
    }

    /// Clears the history after `confirmer` approves.
    ///
    /// Returns `Ok(false)` when the user declines; nothing is changed then.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or the slot cannot be cleared.
    pub async fn clear_history(&self, confirmer: &dyn Confirmer) -> anyhow::Result<bool> {
        if !confirmer.confirm(CLEAR_PROMPT)? {
            return Ok(false);
        }

        self.history.clear().await?;
        self.shared.dispatch(Action::HistoryCleared);
        Ok(true)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let timer = self
            .copy_timer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = timer.take() {
            handle.abort();
        }
    }
}
