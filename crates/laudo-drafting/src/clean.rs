//! Normalisation of model output.

/// Strip a leading ```` ```html ```` fence, a trailing ```` ``` ```` fence and
/// surrounding whitespace.
pub fn clean_html_response(raw: &str) -> String {
    let mut text = raw.trim_start();
    if let Some(rest) = text.strip_prefix("```html") {
        text = rest.trim_start();
    }
    let mut text = text.trim_end();
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim().to_string()
}
