//! HTML documents shown in the summary panel.
//!
//! Every document is self-contained. Summary text comes from the model and is
//! untrusted: it is HTML-escaped for display and embedded in the script only
//! as an escaped JSON string literal.

use crate::core::ViewState;

const STYLE: &str = r#"
    :root {
      color-scheme: light dark;
    }
    body {
      font-family: sans-serif;
      padding: 1rem;
      margin: 0;
    }
    .summary {
      background-color: var(--vscode-editor-background);
      color: var(--vscode-editor-foreground);
      border: 1px solid var(--vscode-editorWidget-border);
      padding: 1rem;
      border-radius: 6px;
      white-space: pre-wrap;
      overflow-wrap: anywhere;
      margin: 0;
      font-family: inherit;
    }
    .failure {
      color: var(--vscode-errorForeground);
    }
    button {
      margin-top: 1rem;
      padding: 0.5rem 1rem;
      background-color: var(--vscode-button-background);
      color: var(--vscode-button-foreground);
      border: none;
      border-radius: 4px;
      cursor: pointer;
    }
    button:hover {
      background-color: var(--vscode-button-hoverBackground);
    }
"#;

const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; script-src 'unsafe-inline';";

pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => render_loading(),
        ViewState::Rendered(summary) => render_summary(summary),
        ViewState::Failed(message) => render_failure(message),
    }
}

pub fn render_loading() -> String {
    page(
        "Generating summary",
        "  <h3>\u{23f3} Generating summary...</h3>\n",
    )
}

pub fn render_summary(summary: &str) -> String {
    let body = format!(
        r#"  <pre class="summary">{visible}</pre>
  <button id="export" type="button">Export to Markdown</button>
  <script>
    const vscode = acquireVsCodeApi();
    const content =
{literal};
    document.getElementById('export').addEventListener('click', () => {{
      vscode.postMessage({{ command: 'export', text: content }});
    }});
  </script>
"#,
        visible = escape_html(summary),
        literal = script_string_literal(summary),
    );
    page("Summary", &body)
}

pub fn render_failure(message: &str) -> String {
    let body = format!(
        "  <h3 class=\"failure\">Could not generate a summary</h3>\n  <pre class=\"summary\">{}</pre>\n",
        escape_html(message)
    );
    page("Summary failed", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta http-equiv="Content-Security-Policy" content="{csp}">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{style}  </style>
</head>
<body>
{body}</body>
</html>
"#,
        csp = CSP,
        title = title,
        style = STYLE,
        body = body,
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encodes `text` as a JavaScript string literal that is safe inside an inline
/// `<script>` element. The result never contains `<`, `>`, `&` or a raw line
/// terminator, so it fits on one line and cannot close the element.
pub fn script_string_literal(text: &str) -> String {
    let json = serde_json::Value::String(text.to_string()).to_string();

    let mut literal = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => literal.push_str("\\u003c"),
            '>' => literal.push_str("\\u003e"),
            '&' => literal.push_str("\\u0026"),
            '\u{2028}' => literal.push_str("\\u2028"),
            '\u{2029}' => literal.push_str("\\u2029"),
            _ => literal.push(c),
        }
    }
    literal
}
