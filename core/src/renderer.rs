//! Rendering of translated messages into one display string

use sufra_shared::{DomainErrorResult, RenderStyle};

const PLAIN_ENTRY_SUFFIX: &str = " -";
const PLAIN_SEPARATOR: &str = "<br>";
const BLOCK_STYLE: &str =
    "direction: rtl; text-align: right; margin-bottom: 8px; padding-right: 15px; position: relative;";
const BULLET_STYLE: &str = "position: absolute; right: 0; top: 0;";

/// Per-call rendering parameters
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Glyph placed at the start (right edge) of each marked-up block
    pub bullet: &'a str,
    /// Returned when there is nothing to show
    pub empty_fallback: &'a str,
}

/// Combine `result` into one string
///
/// A single message is returned as-is in every style.
pub fn render(result: &DomainErrorResult, style: RenderStyle, options: &RenderOptions<'_>) -> String {
    let fields = match result {
        DomainErrorResult::Single(message) => return message.clone(),
        DomainErrorResult::Fields(fields) => fields,
    };

    let messages: Vec<&str> = fields.messages().collect();
    match messages.as_slice() {
        [] => options.empty_fallback.to_string(),
        [only] => only.to_string(),
        many => match style {
            RenderStyle::Plain => render_plain(many),
            RenderStyle::MarkedUp => render_marked_up(many, options.bullet),
        },
    }
}

fn render_plain(messages: &[&str]) -> String {
    messages
        .iter()
        .map(|message| format!("{}{}", escape_markup(message), PLAIN_ENTRY_SUFFIX))
        .collect::<Vec<_>>()
        .join(PLAIN_SEPARATOR)
}

fn render_marked_up(messages: &[&str], bullet: &str) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                r#"<div style="{}">{}<span style="{}">{}</span></div>"#,
                BLOCK_STYLE,
                escape_markup(message),
                BULLET_STYLE,
                bullet
            )
        })
        .collect()
}

// Both styles embed markup, and message text is untrusted backend input.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
