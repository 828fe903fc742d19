use crate::config::CliConfig;
use crate::core::{DisplaySurface, Editor, FileSink, Notifier, PanelFactory, SaveDialog};
use crate::utils::error::{Result, SummaryError};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Host for running the summariser from a terminal: the "editor" is a file on
/// disk, the panel is an HTML file, dialogs and notifications use stdio.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    source: PathBuf,
    lines: Option<(usize, usize)>,
    panel_out: PathBuf,
    export_to: Option<PathBuf>,
}

impl TerminalHost {
    pub fn new(source: PathBuf, panel_out: PathBuf) -> Self {
        Self {
            source,
            lines: None,
            panel_out,
            export_to: None,
        }
    }

    pub fn from_cli(config: &CliConfig) -> Result<Self> {
        let mut host = Self::new(config.file.clone(), config.panel_out.clone());
        if let Some(range) = &config.lines {
            host.lines = Some(parse_line_range(range)?);
        }
        host.export_to = config.export.clone();
        Ok(host)
    }

    pub fn with_lines(mut self, start: usize, end: usize) -> Self {
        self.lines = Some((start, end));
        self
    }

    /// Answer every save dialog with `path` instead of prompting.
    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_to = Some(path);
        self
    }

    pub fn panel_path(&self) -> &Path {
        &self.panel_out
    }
}

/// Parses `START:END` (1-based, inclusive).
pub fn parse_line_range(range: &str) -> Result<(usize, usize)> {
    let invalid = |reason: &str| SummaryError::InvalidConfigValueError {
        field: "lines".to_string(),
        value: range.to_string(),
        reason: reason.to_string(),
    };

    let (start, end) = range
        .split_once(':')
        .ok_or_else(|| invalid("expected START:END"))?;
    let start: usize = start
        .trim()
        .parse()
        .map_err(|_| invalid("start is not a number"))?;
    let end: usize = end
        .trim()
        .parse()
        .map_err(|_| invalid("end is not a number"))?;

    if start == 0 || end < start {
        return Err(invalid("range must satisfy 1 <= START <= END"));
    }
    Ok((start, end))
}

fn select_lines(content: &str, (start, end): (usize, usize)) -> String {
    content
        .lines()
        .skip(start - 1)
        .take(end - start + 1)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Editor for TerminalHost {
    fn active_selection(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.source) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Cannot open {}: {}", self.source.display(), e);
                return None;
            }
        };

        Some(match self.lines {
            Some(range) => select_lines(&content, range),
            None => content,
        })
    }
}

/// Panel backed by an HTML file that is rewritten on every update.
#[derive(Debug, Clone)]
pub struct HtmlFilePanel {
    path: PathBuf,
}

impl HtmlFilePanel {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySurface for HtmlFilePanel {
    fn set_html(&self, html: &str) {
        if let Err(e) = fs::write(&self.path, html) {
            tracing::error!("Failed to update panel {}: {}", self.path.display(), e);
        }
    }
}

impl PanelFactory for TerminalHost {
    type Panel = HtmlFilePanel;

    fn open_panel(&self, title: &str) -> HtmlFilePanel {
        tracing::debug!("Opening panel '{}' at {}", title, self.panel_out.display());
        HtmlFilePanel {
            path: self.panel_out.clone(),
        }
    }
}

#[async_trait::async_trait]
impl SaveDialog for TerminalHost {
    async fn choose_save_location(&self, default_name: &str) -> Option<PathBuf> {
        if let Some(path) = &self.export_to {
            return Some(path.clone());
        }

        let mut stderr = tokio::io::stderr();
        let prompt = format!("💾 Save summary to [{}] (n to cancel): ", default_name);
        if stderr.write_all(prompt.as_bytes()).await.is_err() {
            return None;
        }
        let _ = stderr.flush().await;

        let mut answer = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut answer).await {
            Ok(0) | Err(_) => None,
            Ok(_) => interpret_answer(&answer, default_name),
        }
    }
}

fn interpret_answer(answer: &str, default_name: &str) -> Option<PathBuf> {
    match answer.trim() {
        "" => Some(PathBuf::from(default_name)),
        "n" | "N" | "no" => None,
        path => Some(PathBuf::from(path)),
    }
}

impl FileSink for TerminalHost {
    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, data).await
    }
}

impl Notifier for TerminalHost {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
        eprintln!("✅ {}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
        eprintln!("⚠️  {}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
        eprintln!("❌ {}", message);
    }
}
