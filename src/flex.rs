//! Layout normalizer – rewrites simple two-child flex containers into
//! two-cell table markup.
//!
//! PDF rasterizers aimed at print output have weak flexbox support; the
//! common editor pattern `display:flex; justify-content:space-between` with a
//! left and a right block renders collapsed or left-stacked. A one-row table
//! with a left-aligned and a right-aligned cell is semantically equivalent
//! and renders reliably everywhere.

use crate::scan::{self, is_block_tag, OpenTag};

/// Rewrite every simple flex container in `html` into a two-column table.
///
/// A container qualifies when its `style` attribute declares a `display`
/// value containing `flex` and its content is exactly two block-level child
/// elements separated only by whitespace. Everything else passes through
/// untouched: zero/one/three-plus children, bare text between children,
/// inline children, and containers with no matching close tag.
///
/// Matches are non-overlapping; scanning resumes after each rewritten span,
/// so a flex container nested inside a rewritten child is kept verbatim in
/// its cell. A non-matching container only consumes its opening tag, so
/// candidates nested inside it are still considered.
pub fn normalize_flex_layout(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut copied = 0usize;
    let mut search = 0usize;
    let mut rewritten = 0usize;

    while let Some(tag) = scan::next_open_tag(html, search) {
        search = tag.end;
        if !declares_flex(&tag) {
            continue;
        }
        let Some(span) = scan::close_element(html, &tag) else {
            continue;
        };
        let Some(children) = scan::child_elements(html, span.inner_start, span.inner_end) else {
            continue;
        };
        if children.len() != 2 || !children.iter().all(|c| is_block_tag(&c.tag.name)) {
            continue;
        }

        out.push_str(&html[copied..tag.start]);
        out.push_str(&two_cell_table(
            children[0].inner(html).trim(),
            children[1].inner(html).trim(),
        ));
        copied = span.end;
        search = span.end;
        rewritten += 1;
    }

    out.push_str(&html[copied..]);
    if rewritten > 0 {
        log::debug!("Rewrote {rewritten} flex container(s) to table markup");
    }
    out
}

/// Whether the opening tag's `style` attribute contains a `display`
/// declaration whose value mentions `flex` (covers `flex`, `inline-flex`,
/// vendor-prefixed values, and sloppy whitespace).
fn declares_flex(tag: &OpenTag) -> bool {
    let Some(style) = tag.attr("style") else {
        return false;
    };
    let lower = style.to_ascii_lowercase();
    let mut rest = lower.as_str();
    while let Some(idx) = rest.find("display") {
        let after = rest[idx + "display".len()..].trim_start();
        if let Some(value) = after.strip_prefix(':') {
            let value = value.split(';').next().unwrap_or("");
            if value.contains("flex") {
                return true;
            }
        }
        rest = &rest[idx + "display".len()..];
    }
    false
}

fn two_cell_table(left: &str, right: &str) -> String {
    format!(
        "<table style=\"width:100%;\"><tr>\
         <td style=\"text-align:left; vertical-align:top;\">{left}</td>\
         <td style=\"text-align:right; vertical-align:top;\">{right}</td>\
         </tr></table>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLEX_ROW: &str = r#"<div style="display:flex; justify-content:space-between;">
        <div>Left content</div>
        <div>Right content</div>
    </div>"#;

    #[test]
    fn converts_two_child_flex_to_table() {
        let out = normalize_flex_layout(FLEX_ROW);
        assert!(out.starts_with("<table style=\"width:100%;\">"));
        assert!(out.contains(r#"<td style="text-align:left; vertical-align:top;">Left content</td>"#));
        assert!(out.contains(r#"<td style="text-align:right; vertical-align:top;">Right content</td>"#));
        assert!(!out.contains("display:flex"));
    }

    #[test]
    fn preserves_nested_markup_in_cells() {
        let html = r#"<div style="display: flex"><div><p>From:</p><p>Acme Corp</p></div><div><p>To:</p><p>Client Inc</p></div></div>"#;
        let out = normalize_flex_layout(html);
        assert!(out.contains("<p>From:</p><p>Acme Corp</p>"));
        assert!(out.contains("<p>To:</p><p>Client Inc</p>"));
    }

    #[test]
    fn nested_same_named_tags_stay_balanced() {
        let html = r#"<div style="display:flex"><div>a<div>deep</div>b</div><div>R</div></div>"#;
        let out = normalize_flex_layout(html);
        assert!(out.contains(">a<div>deep</div>b</td>"));
        assert!(out.contains(">R</td>"));
    }

    #[test]
    fn three_children_pass_through_unchanged() {
        let html = r#"<div style="display:flex"><div>a</div><div>b</div><div>c</div></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn single_child_passes_through_unchanged() {
        let html = r#"<div style="display:flex"><div>only</div></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn bare_text_between_children_passes_through() {
        let html = r#"<div style="display:flex"><div>a</div>loose<div>b</div></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn unclosed_container_passes_through() {
        let html = r#"<div style="display:flex"><div>a</div><div>b</div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn non_flex_containers_untouched() {
        let html = r#"<div style="display:block"><div>a</div><div>b</div></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn inline_flex_counts_as_flex() {
        let html = r#"<div style="display : inline-flex"><div>a</div><div>b</div></div>"#;
        let out = normalize_flex_layout(html);
        assert!(out.contains("<table"));
    }

    #[test]
    fn flex_token_outside_display_does_not_match() {
        let html = r#"<div style="flex-grow:1"><div>a</div><div>b</div></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }

    #[test]
    fn all_matches_are_rewritten() {
        let html = format!("{FLEX_ROW}<p>mid</p>{FLEX_ROW}");
        let out = normalize_flex_layout(&html);
        assert_eq!(out.matches("<table").count(), 2);
        assert!(out.contains("<p>mid</p>"));
    }

    #[test]
    fn candidate_inside_non_matching_container_is_converted() {
        let html = r#"<div style="display:flex"><div>a</div><div>b</div><div style="display:flex"><div>L</div><div>R</div></div></div>"#;
        let out = normalize_flex_layout(html);
        // Outer has three children and stays; the inner pair converts.
        assert!(out.starts_with(r#"<div style="display:flex"><div>a</div><div>b</div><table"#));
        assert!(out.contains(">L</td>"));
    }

    #[test]
    fn idempotent_on_normalized_output() {
        let once = normalize_flex_layout(FLEX_ROW);
        let twice = normalize_flex_layout(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn inline_children_do_not_match() {
        let html = r#"<div style="display:flex"><span>a</span><span>b</span></div>"#;
        assert_eq!(normalize_flex_layout(html), html);
    }
}
