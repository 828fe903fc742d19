use crate::config::SummariserConfig;
use crate::core::export::ExportBridge;
use crate::core::render::render;
use crate::core::{
    DisplaySurface, ExportOutcome, ExportRequest, Host, PanelMessage, Summarizer, ViewState,
};
use crate::utils::error::{ErrorKind, Result, SummaryError};
use std::sync::Arc;

/// Progress of one summarise invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    AwaitingSelection,
    /// Panel is open and showing the loading view.
    Requesting,
    /// Panel shows the rendered summary and listens for exports.
    Displaying,
    Failed(ErrorKind),
}

impl InvocationState {
    pub fn can_advance_to(self, next: InvocationState) -> bool {
        use InvocationState::*;
        matches!(
            (self, next),
            (Idle, AwaitingSelection)
                | (AwaitingSelection, Requesting)
                | (AwaitingSelection, Failed(_))
                | (Requesting, Displaying)
                | (Requesting, Failed(_))
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, InvocationState::Displaying | InvocationState::Failed(_))
    }
}

struct Invocation {
    state: InvocationState,
}

impl Invocation {
    fn start() -> Self {
        let mut invocation = Self {
            state: InvocationState::Idle,
        };
        invocation.advance(InvocationState::AwaitingSelection);
        invocation
    }

    fn advance(&mut self, next: InvocationState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!("Invocation {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Drives one summarise command from selection to rendered panel.
///
/// Holds no per-invocation state: calling [`summarise_selection`] again while a
/// request is in flight starts an independent pipeline with its own panel.
///
/// [`summarise_selection`]: Orchestrator::summarise_selection
pub struct Orchestrator<S: Summarizer, H: Host> {
    summarizer: S,
    host: Arc<H>,
    panel_title: String,
    default_export_name: String,
}

impl<S: Summarizer, H: Host> Orchestrator<S, H> {
    pub fn new(summarizer: S, host: Arc<H>, config: &SummariserConfig) -> Self {
        Self {
            summarizer,
            host,
            panel_title: config.panel_title().to_string(),
            default_export_name: config.default_export_name().to_string(),
        }
    }

    /// Runs the pipeline. Every failure has already been reported to the host
    /// when this returns `Err`.
    pub async fn summarise_selection(&self) -> Result<SummaryPanel<H>> {
        let mut invocation = Invocation::start();

        let code = match self.read_selection() {
            Ok(code) => code,
            Err(e) => {
                invocation.advance(InvocationState::Failed(e.kind()));
                match e {
                    SummaryError::EmptySelection => self.host.warn(&e.to_string()),
                    _ => self.host.error(&e.to_string()),
                }
                return Err(e);
            }
        };

        invocation.advance(InvocationState::Requesting);
        let panel = self.host.open_panel(&self.panel_title);
        panel.set_html(&render(&ViewState::Loading));

        tracing::info!("Summarising {} characters of selected code", code.len());

        match self.summarizer.summarize(&code).await {
            Ok(summary) => {
                let view = ViewState::Rendered(summary.clone());
                panel.set_html(&render(&view));
                invocation.advance(InvocationState::Displaying);
                tracing::info!("Summary rendered ({} characters)", summary.len());

                Ok(SummaryPanel {
                    panel,
                    summary,
                    view,
                    bridge: ExportBridge::new(Arc::clone(&self.host), &self.default_export_name),
                })
            }
            Err(e) => {
                let message = e.message();
                panel.set_html(&render(&ViewState::Failed(message.clone())));
                invocation.advance(InvocationState::Failed(e.kind()));
                tracing::error!("Summarising failed ({:?}): {}", e.kind(), e);
                self.host
                    .error(&format!("Error summarising code: {}", message));
                Err(e)
            }
        }
    }

    fn read_selection(&self) -> Result<String> {
        let selection = self
            .host
            .active_selection()
            .ok_or(SummaryError::NoActiveSurface)?;

        if selection.trim().is_empty() {
            return Err(SummaryError::EmptySelection);
        }

        Ok(selection)
    }
}

/// A panel showing a rendered summary, listening for export messages from its
/// script for as long as the host keeps it around.
pub struct SummaryPanel<H: Host> {
    panel: H::Panel,
    summary: String,
    view: ViewState,
    bridge: ExportBridge<H>,
}

impl<H: Host> SummaryPanel<H> {
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &H::Panel {
        &self.panel
    }

    /// Entry point for raw JSON posted by the panel script. Messages that are
    /// not understood are logged and dropped.
    pub async fn handle_message(&self, raw: &str) -> Option<ExportOutcome> {
        match serde_json::from_str::<PanelMessage>(raw) {
            Ok(message) => Some(self.handle(message).await),
            Err(e) => {
                tracing::warn!("Ignoring panel message: {}", e);
                None
            }
        }
    }

    pub async fn handle(&self, message: PanelMessage) -> ExportOutcome {
        match message {
            PanelMessage::Export { text } => self.bridge.handle(ExportRequest { text }).await,
        }
    }

    /// Exports the summary as if the panel's export button had been clicked.
    pub async fn export(&self) -> ExportOutcome {
        self.handle(PanelMessage::Export {
            text: self.summary.clone(),
        })
        .await
    }
}
