use axum::response::Html;

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Render the index page with the extracted text and the summary.
///
/// Both values are HTML-escaped. The download form is hidden while there is
/// no summary to download.
pub fn render_index(extracted_text: &str, summary: &str) -> Html<String> {
    let testo_pdf = html_escape::encode_text(extracted_text);
    let riassunto = html_escape::encode_text(summary);
    let download_state = if summary.is_empty() { "hidden" } else { "" };

    Html(substitute(
        INDEX_HTML,
        &[
            ("testo_pdf", &*testo_pdf),
            ("riassunto", &*riassunto),
            ("download_state", download_state),
        ],
    ))
}

/// Replace `{{ name }}` placeholders in a single pass, so substituted values
/// are never scanned for placeholders themselves. Unknown names are kept.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = after[..end].trim();
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
