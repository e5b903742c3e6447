//! Placeholder resolver – substitutes `{{key}}` tokens with caller-supplied
//! values, HTML-escaping each value for a body context.

use serde_json::{Map, Value};

/// Replace every `{{key}}` occurrence in `html` with the escaped string form
/// of the corresponding value in `data`.
///
/// Keys without a matching token are no-ops; tokens without a matching key
/// are left in place – unresolved placeholders are not an error. Values
/// escape `&`, `<`, and `>` only: substitution targets element content, not
/// attribute positions, so quotes are kept as-is.
pub fn resolve(html: &str, data: &Map<String, Value>) -> String {
    let mut out = html.to_string();
    for (key, value) in data {
        let token = format!("{{{{{key}}}}}");
        if !out.contains(&token) {
            continue;
        }
        out = out.replace(&token, &escape_html(&render_value(value)));
    }
    out
}

/// String form of a placeholder value. Null renders empty; strings render
/// without quotes; numbers and booleans render in their display form.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            // The data map is meant to carry scalars; render anything else
            // as JSON text rather than rejecting the whole document.
            log::warn!("Non-scalar placeholder value rendered as JSON: {other}");
            other.to_string()
        }
    }
}

/// Escape a value for insertion into element content. `&` must go first so
/// entities produced by the later replacements survive.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
