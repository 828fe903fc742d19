use crate::core::{ExportOutcome, ExportRequest, FileSink, Notifier, SaveDialog};
use crate::utils::error::{Result, SummaryError};
use std::path::PathBuf;
use std::sync::Arc;

/// Persists a rendered summary wherever the user chooses.
pub struct ExportBridge<H: SaveDialog + FileSink + Notifier> {
    host: Arc<H>,
    default_name: String,
}

impl<H: SaveDialog + FileSink + Notifier> Clone for ExportBridge<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            default_name: self.default_name.clone(),
        }
    }
}

impl<H: SaveDialog + FileSink + Notifier> ExportBridge<H> {
    pub fn new(host: Arc<H>, default_name: impl Into<String>) -> Self {
        Self {
            host,
            default_name: default_name.into(),
        }
    }

    pub async fn export(&self, request: ExportRequest) -> Result<PathBuf> {
        let Some(path) = self.host.choose_save_location(&self.default_name).await else {
            tracing::info!("Export cancelled, nothing written");
            self.host.warn(&SummaryError::ExportCancelled.to_string());
            return Err(SummaryError::ExportCancelled);
        };

        tracing::debug!(
            "Writing {} bytes of summary to {}",
            request.text.len(),
            path.display()
        );

        if let Err(e) = self.host.write_file(&path, request.text.as_bytes()).await {
            let err = SummaryError::ExportWriteFailed {
                message: e.to_string(),
            };
            tracing::error!("Export to {} failed: {}", path.display(), e);
            self.host.error(&err.to_string());
            return Err(err);
        }

        tracing::info!("Summary exported to {}", path.display());
        self.host
            .info(&format!("Summary exported to {}", path.display()));
        Ok(path)
    }

    /// Same as [`export`](Self::export), folded into an outcome for hosts that
    /// only need to know what happened.
    pub async fn handle(&self, request: ExportRequest) -> ExportOutcome {
        match self.export(request).await {
            Ok(path) => ExportOutcome::Written(path),
            Err(SummaryError::ExportCancelled) => ExportOutcome::Cancelled,
            Err(e) => ExportOutcome::Failed(e.message()),
        }
    }
}
