use crate::core::{
    DisplaySurface, Editor, FileSink, Notifier, PanelFactory, SaveDialog, Summarizer,
};
use crate::utils::error::{Result, SummaryError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Clone, Default)]
pub struct MockPanel {
    pub title: String,
    pub history: Arc<Mutex<Vec<String>>>,
}

impl MockPanel {
    pub fn current(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }
}

impl DisplaySurface for MockPanel {
    fn set_html(&self, html: &str) {
        self.history.lock().unwrap().push(html.to_string());
    }
}

#[derive(Default)]
pub struct MockHost {
    pub selection: Option<String>,
    pub save_path: Option<PathBuf>,
    pub fail_writes: bool,
    pub files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    pub notifications: Mutex<Vec<(Level, String)>>,
    pub panels: Mutex<Vec<MockPanel>>,
    pub dialog_defaults: Mutex<Vec<String>>,
}

impl MockHost {
    pub fn with_selection(selection: &str) -> Self {
        Self {
            selection: Some(selection.to_string()),
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<(Level, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn panels(&self) -> Vec<MockPanel> {
        self.panels.lock().unwrap().clone()
    }

    pub fn file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn push(&self, level: Level, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl Editor for MockHost {
    fn active_selection(&self) -> Option<String> {
        self.selection.clone()
    }
}

impl PanelFactory for MockHost {
    type Panel = MockPanel;

    fn open_panel(&self, title: &str) -> MockPanel {
        let panel = MockPanel {
            title: title.to_string(),
            ..MockPanel::default()
        };
        self.panels.lock().unwrap().push(panel.clone());
        panel
    }
}

#[async_trait::async_trait]
impl SaveDialog for MockHost {
    async fn choose_save_location(&self, default_name: &str) -> Option<PathBuf> {
        self.dialog_defaults
            .lock()
            .unwrap()
            .push(default_name.to_string());
        self.save_path.clone()
    }
}

impl FileSink for MockHost {
    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if self.fail_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

impl Notifier for MockHost {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

/// Summarizer that replays a canned outcome and counts calls.
pub struct StubSummarizer {
    outcome: std::result::Result<String, (u16, String)>,
    pub calls: AtomicUsize,
}

impl StubSummarizer {
    pub fn replying(summary: &str) -> Self {
        Self {
            outcome: Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            outcome: Err((status, body.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, _code: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(summary) => Ok(summary.clone()),
            Err((status, body)) => Err(SummaryError::ApiError {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
