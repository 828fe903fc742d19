use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;
    fn language(&self) -> &str;
}

/// Source of the bearer token. Consulted on every request, never cached.
pub trait CredentialProvider: Send + Sync {
    fn credential(&self) -> Option<String>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, code: &str) -> Result<String>;
}

pub trait Editor: Send + Sync {
    /// `None` when there is no active editor, otherwise the selected text (possibly empty).
    fn active_selection(&self) -> Option<String>;
}

pub trait DisplaySurface: Send + Sync {
    fn set_html(&self, html: &str);
}

pub trait PanelFactory: Send + Sync {
    type Panel: DisplaySurface;

    fn open_panel(&self, title: &str) -> Self::Panel;
}

#[async_trait]
pub trait SaveDialog: Send + Sync {
    async fn choose_save_location(&self, default_name: &str) -> Option<PathBuf>;
}

pub trait FileSink: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Everything the summarise command needs from the editor it runs in.
pub trait Host: Editor + PanelFactory + SaveDialog + FileSink + Notifier {}

impl<T> Host for T where T: Editor + PanelFactory + SaveDialog + FileSink + Notifier {}
