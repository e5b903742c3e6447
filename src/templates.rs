//! Sample editor-authored templates for testing and demonstration.
//!
//! Each template exercises different pipeline features: placeholder tokens,
//! flex layout rows, alignment classes, and the header marker element.

use serde_json::{Map, Value};

/// Transfer-order template: header marker, placeholders, a flex row, and
/// bare void elements, the way a rich-text editor emits them.
pub fn transfer_order_template() -> &'static str {
    r##"
<div class="title-data">
    <strong>Office of the District Educational Officer</strong><br>
    {{district_name}}<br>
    Rc.No: {{rc_number}}
</div>

<div style="display:flex; justify-content:space-between;">
    <div>Present: {{officer_name}}</div>
    <div>Dated: {{date}}</div>
</div>

<p class="ql-align-justify">
    {{teacher_name}} ({{employee_id}}), {{designation}} for {{subject}} at
    {{working_school}}, {{mandal_name}} Mandal, is hereby transferred to
    {{transferred_to}} on {{transfer_reason}}.
</p>

<p>The teacher shall report at the new station within the joining time admissible.</p>

<p class="ql-align-right">
    District Educational Officer<br>
    {{district_name}}
</p>
"##
}

/// Notice template with alignment classes and a two-column flex footer.
pub fn notice_template() -> &'static str {
    r##"
<p class="ql-align-center"><strong>OFFICE NOTICE</strong></p>

<p>All staff are informed that {{subject_line}} with effect from {{effective_date}}.</p>

<ul>
    <li>Attendance registers close at 9:30 AM.</li>
    <li>Movement registers must be maintained in each section.</li>
</ul>

<div style="display: flex; justify-content: space-between">
    <div>Ref: {{reference}}</div>
    <div>{{issuing_officer}}</div>
</div>
"##
}

/// Minimal fragment for unit testing.
pub fn minimal_template() -> &'static str {
    r#"<p>Hello {{name}}</p>"#
}

/// Sample data map for [`transfer_order_template`], matching the composer's
/// embedded defaults.
pub fn transfer_order_data() -> Map<String, Value> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::prepare_html_default;

    #[test]
    fn templates_normalize_without_leftover_tokens() {
        let out = prepare_html_default(transfer_order_template(), &transfer_order_data());
        assert!(!out.contains("{{"), "unresolved placeholder in output");
        assert!(out.contains("Sri M. Srinivas"));
    }

    #[test]
    fn transfer_order_flex_row_becomes_table() {
        let out = prepare_html_default(transfer_order_template(), &transfer_order_data());
        assert!(out.contains("<table style=\"width:100%;\">"));
        assert!(!out.contains("display:flex"));
    }

    #[test]
    fn transfer_order_composes_with_default_shell() {
        let composer = crate::compose::Composer::default();
        let out = composer.compose(transfer_order_template());
        assert!(out.contains("Office of the District Educational Officer"));
        assert!(out.contains("<div class=\"title\">TRANSFER ORDER</div>"));
        assert!(!out.contains("class=\"title-data\""));
    }
}
