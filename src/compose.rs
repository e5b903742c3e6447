//! Document composer – assembles a complete print document around
//! editor-authored body HTML.
//!
//! Composition resolves the embedded placeholder map, makes void elements
//! well-formed for the rasterizer, pulls the marked header fragment out of
//! the body, and rebuilds the fixed title/logo shell around what remains.

use serde_json::{Map, Value};

use crate::placeholder;
use crate::scan;

/// Shell stylesheet for composed documents.
const COMPOSER_CSS: &str = "\
    body {
      font-family: \"Times New Roman\", serif;
      line-height: 1.6;
      font-size: 14px;
      margin: 40px;
    }
    .title {
      text-align: center;
      font-size: 22px;
      font-weight: bold;
      margin-bottom: 15px;
      text-transform: uppercase;
    }
    table.header-table {
      width: 100%;
      border-collapse: collapse;
      margin-bottom: 20px;
    }
    table.header-table td {
      vertical-align: top;
    }
    .logo-cell {
      width: 120px;
    }
    .logo-cell img {
      width: 100px;
      height: 100px;
    }
    .header-text {
      font-size: 14px;
      line-height: 1.5;
      padding-left: 10px;
    }
    .ql-align-center { text-align: center; }
    .ql-align-right { text-align: right; }
    .ql-align-justify { text-align: justify; }
    ul { margin-left: 20px; }
";

/// Composer for the fixed header/logo document shell.
///
/// All knobs are plain configuration set at construction; [`Default`]
/// reproduces the transfer-order document the shell was built for, embedded
/// sample data map included. The caller supplies only the body HTML per
/// invocation.
#[derive(Debug, Clone)]
pub struct Composer {
    /// Text of the uppercase title block.
    pub title: String,
    /// `src` of the logo image in the header table; resolved by the
    /// rasterizer against the base resource URI supplied at render time.
    pub logo_src: String,
    /// Class marking the element whose inner HTML becomes the header
    /// fragment.
    pub marker_class: String,
    /// Placeholder map applied before composition.
    pub placeholders: Map<String, Value>,
    /// Shell stylesheet.
    pub css: String,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            title: "TRANSFER ORDER".to_string(),
            logo_src: "images/logo.png".to_string(),
            marker_class: "title-data".to_string(),
            placeholders: default_placeholders(),
            css: COMPOSER_CSS.to_string(),
        }
    }
}

fn default_placeholders() -> Map<String, Value> {
    let entries = [
        ("district_name", "Guntur District"),
        ("officer_name", "Sri Venkata Rao, DEO"),
        ("rc_number", "RC/2025/0234"),
        ("date", "03-Nov-2025"),
        ("teacher_name", "Sri M. Srinivas"),
        ("employee_id", "EMP56789"),
        ("designation", "School Assistant (Maths)"),
        ("subject", "Mathematics"),
        ("working_school", "ZPHS, Tenali"),
        ("mandal_name", "Tenali"),
        ("transferred_to", "ZPHS, Ponnur"),
        ("transfer_reason", "Administrative grounds"),
    ];
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
        .collect()
}

impl Composer {
    /// Compose a full document around `html`.
    ///
    /// Steps, in order: resolve the embedded placeholder map, normalize void
    /// elements, extract the first marker-class element as the header
    /// fragment (absence is valid and leaves the header cell empty), then
    /// assemble the title block, the logo/header table, and the remaining
    /// body. The result is the exact input of the rasterizer collaborator;
    /// the base resource URI it needs is supplied by the caller at the
    /// render seam, never computed here.
    pub fn compose(&self, html: &str) -> String {
        let resolved = placeholder::resolve(html, &self.placeholders);
        let normalized = normalize_void_elements(&resolved);
        let (body, header) = extract_header(&normalized, &self.marker_class);

        match &header {
            Some(h) => log::debug!("Extracted header fragment ({} bytes)", h.len()),
            None => log::debug!("No '{}' element found; header cell left empty", self.marker_class),
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset='UTF-8'/>\n  <style>{}</style>\n</head>\n<body>\n  \
             <div class=\"title\">{}</div>\n\n  \
             <table class=\"header-table\">\n    <tr>\n      \
             <td class=\"logo-cell\">\n        <img src=\"{}\" alt=\"Logo\"/>\n      </td>\n      \
             <td class=\"header-text\">\n        {}\n      </td>\n    </tr>\n  </table>\n\n{}\n</body>\n</html>\n",
            self.css,
            self.title,
            self.logo_src,
            header.unwrap_or_default(),
            body,
        )
    }
}

/// Rewrite unclosed void elements (`<br>`, bare `<img …>`) to self-closed
/// form. Print rasterizers consume XHTML-ish input and choke on HTML5-style
/// bare voids; content and attributes are kept byte-for-byte.
pub fn normalize_void_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 16);
    let mut copied = 0usize;
    let mut search = 0usize;

    while let Some(tag) = scan::next_open_tag(html, search) {
        search = tag.end;
        if tag.self_closing || !matches!(tag.name.as_str(), "br" | "img") {
            continue;
        }
        // Re-emit everything up to the closing `>` and self-close the tag.
        out.push_str(&html[copied..tag.end - 1]);
        out.push_str("/>");
        copied = tag.end;
    }

    out.push_str(&html[copied..]);
    out
}

/// Remove the first element carrying `marker_class` from `html` and return
/// the stripped body together with the element's trimmed inner HTML.
///
/// Matching is case-insensitive on both tag class tokens and accepts any
/// attribute quote style. Later elements with the same marker stay in the
/// body untouched. An unclosed marker element is treated as absent.
fn extract_header(html: &str, marker_class: &str) -> (String, Option<String>) {
    match scan::find_element(html, 0, |tag| tag.has_class(marker_class)) {
        Some(span) => {
            let header = span.inner(html).trim().to_string();
            let mut body = String::with_capacity(html.len());
            body.push_str(&html[..span.tag.start]);
            body.push_str(&html[span.end..]);
            (body, Some(header))
        }
        None => (html.to_string(), None),
    }
}
