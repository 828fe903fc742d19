use crate::core::{ChatMessage, CompletionRequest, ConfigProvider, Role};

pub fn system_instruction(language: &str) -> String {
    format!(
        "You are a helpful assistant that explains {} code and suggests improvements.",
        language
    )
}

/// Builds the chat request for a code selection. The code is embedded verbatim;
/// JSON serialization of the body is the only escaping applied.
pub fn build_request<C: ConfigProvider + ?Sized>(config: &C, code: &str) -> CompletionRequest {
    let language = config.language();

    CompletionRequest {
        model: config.model().to_string(),
        messages: vec![
            ChatMessage {
                role: Role::System,
                content: system_instruction(language),
            },
            ChatMessage {
                role: Role::User,
                content: format!(
                    "Explain and suggest improvements for this {} code:\n\n{}",
                    language, code
                ),
            },
        ],
        temperature: config.temperature(),
    }
}
