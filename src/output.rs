use crate::pipeline::Notes;
use crate::session::Element;

/// Render a form element for a plain terminal
pub fn render_element(element: &Element) -> String {
    match element {
        Element::Title(title) => format!("{title}\n"),
        Element::Thumbnail(url) => format!("Thumbnail: {url}"),
        Element::Error(message) => format!("\x1b[31mError:\x1b[0m {message}"),
        Element::Heading(heading) => format!("\n{heading}\n"),
        Element::Markdown(text) => text.clone(),
    }
}

/// Render notes as plain text (the summary alone)
pub fn render_text(notes: &Notes) -> String {
    notes.summary.clone()
}

/// Render notes as pretty-printed JSON
pub fn render_json(notes: &Notes) -> String {
    serde_json::to_string_pretty(notes).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
