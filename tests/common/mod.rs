#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use link_shortener::application::services::{HistoryService, ShortenerService};
use link_shortener::application::session::{Renderer, Session};
use link_shortener::infrastructure::clipboard::Clipboard;
use link_shortener::infrastructure::storage::{FileSlot, MemorySlot, PersistenceSlot};
use link_shortener::state::{Action, AppState};
use link_shortener::utils::code_generator::{DEFAULT_RESERVED_ALIASES, ReservedAliases};
use tempfile::TempDir;

/// Renderer that remembers every action it was shown.
#[derive(Default)]
pub struct RecordingRenderer {
    actions: Mutex<Vec<Action>>,
}

impl RecordingRenderer {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, _state: &AppState, action: &Action) {
        self.actions.lock().unwrap().push(action.clone());
    }
}

/// Clipboard that keeps the written texts in memory.
#[derive(Default)]
pub struct MemoryClipboard {
    texts: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// History file inside a fresh temp dir. The dir is deleted when the
/// returned guard is dropped, so keep it alive for the whole test.
pub fn temp_history_file() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    (dir, path)
}

pub fn shortener(latency: Duration) -> ShortenerService {
    ShortenerService::new(
        ReservedAliases::new(DEFAULT_RESERVED_ALIASES.iter().copied()),
        "shrtco.de",
        latency,
    )
}

pub struct TestSession {
    pub session: Session,
    pub renderer: Arc<RecordingRenderer>,
    pub clipboard: Arc<MemoryClipboard>,
}

pub async fn start_session(slot: Arc<dyn PersistenceSlot>, latency: Duration) -> TestSession {
    let renderer = Arc::new(RecordingRenderer::default());
    let clipboard = Arc::new(MemoryClipboard::default());

    let session = Session::new(
        Arc::new(shortener(latency)),
        Arc::new(HistoryService::new(slot)),
        clipboard.clone(),
        renderer.clone(),
    )
    .start()
    .await;

    TestSession {
        session,
        renderer,
        clipboard,
    }
}

pub async fn memory_session(latency: Duration) -> TestSession {
    start_session(Arc::new(MemorySlot::new()), latency).await
}

pub async fn file_session(path: &Path) -> TestSession {
    start_session(Arc::new(FileSlot::new(path)), Duration::ZERO).await
}
