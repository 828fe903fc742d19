pub mod completion;
pub mod export;
pub mod orchestrator;
pub mod prompt;
pub mod render;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    ChatMessage, Choice, ChoiceMessage, CompletionRequest, CompletionResponse, ExportOutcome,
    ExportRequest, PanelMessage, Role, ViewState,
};
pub use crate::domain::ports::{
    ConfigProvider, CredentialProvider, DisplaySurface, Editor, FileSink, Host, Notifier,
    PanelFactory, SaveDialog, Summarizer,
};
pub use crate::utils::error::Result;
