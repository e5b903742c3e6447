//! Style mapper – wraps body HTML in a full document carrying the baseline
//! print stylesheet.
//!
//! Rich-text editors mark alignment with classes (`ql-align-center` etc.)
//! that mean nothing to a rasterizer unless a stylesheet maps them to real
//! `text-align` rules. The baseline sheet also pins document typography and
//! table defaults so output does not depend on rasterizer built-ins.

/// Fixed stylesheet mapping editor classes to print-safe rules.
const BASELINE_CSS: &str = "\
    /* Basic document formatting */
    body {
      font-family: Arial, Helvetica, sans-serif;
      font-size: 12pt;
      line-height: 1.4;
      color: #000;
    }
    p { margin: 6px 0; }
    h1,h2,h3,h4,h5 { margin: 8px 0; }

    /* Tables */
    table { width: 100%; border-collapse: collapse; }
    td { padding: 2px 4px; vertical-align: top; }

    /* Quill editor content defaults */
    .ql-editor {
      white-space: normal;
      word-wrap: break-word;
    }
    .ql-align-center { text-align: center !important; }
    .ql-align-right { text-align: right !important; }
    .ql-align-justify { text-align: justify !important; }
    .ql-align-left { text-align: left !important; }

    /* Keep inline weight markup visible */
    strong { font-weight: 700; }
    b { font-weight: 700; }

    /* Force block-level alignment when set inline */
    div[style*=\"text-align:center\"] { text-align: center; }
    div[style*=\"text-align:right\"] { text-align: right; }
    div[style*=\"text-align:justify\"] { text-align: justify; }
";

/// The document-wide stylesheet applied when wrapping body HTML.
///
/// The sheet is plain configuration: [`Default`] supplies the fixed baseline
/// above, and a custom sheet can be injected at construction when a caller
/// needs different print defaults.
#[derive(Debug, Clone)]
pub struct BaselineStyles {
    pub css: String,
}

impl Default for BaselineStyles {
    fn default() -> Self {
        Self {
            css: BASELINE_CSS.to_string(),
        }
    }
}

impl BaselineStyles {
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Produce a complete document with the stylesheet in `<head>` and
    /// `body_html` placed verbatim inside `<body>`.
    pub fn wrap(&self, body_html: &str) -> String {
        format!(
            "<!doctype html>\n<html>\n<head>\n<meta charset='utf-8'/>\n\
             <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>",
            self.css, body_html
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_produces_full_document() {
        let out = BaselineStyles::default().wrap("<p>Hello</p>");
        assert!(out.starts_with("<!doctype html>"));
        assert!(out.contains("<meta charset='utf-8'/>"));
        assert!(out.contains("<p>Hello</p>"));
        assert!(out.ends_with("</body>\n</html>"));
    }

    #[test]
    fn default_sheet_maps_alignment_classes() {
        let out = BaselineStyles::default().wrap("");
        for rule in [
            ".ql-align-center { text-align: center !important; }",
            ".ql-align-right { text-align: right !important; }",
            ".ql-align-justify { text-align: justify !important; }",
            ".ql-align-left { text-align: left !important; }",
        ] {
            assert!(out.contains(rule), "missing rule: {rule}");
        }
    }

    #[test]
    fn body_html_is_not_modified() {
        let body = r#"<div class="ql-align-center">Centered {{unresolved}}</div>"#;
        let out = BaselineStyles::default().wrap(body);
        assert!(out.contains(body));
    }

    #[test]
    fn custom_sheet_is_injected_verbatim() {
        let styles = BaselineStyles::new("body { color: red; }");
        let out = styles.wrap("<p>x</p>");
        assert!(out.contains("<style>body { color: red; }</style>"));
        assert!(!out.contains("ql-align-center"));
    }
}
