//! Basic Markdown to HTML conversion.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref H3_RE: Regex = Regex::new(r"(?m)^### (.*)").unwrap();
    static ref H2_RE: Regex = Regex::new(r"(?m)^## (.*)").unwrap();
    static ref H1_RE: Regex = Regex::new(r"(?m)^# (.*)").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
}

/// Convert header levels 1–3, bold spans and dash lists to HTML.
///
/// Consecutive `- ` lines are grouped into one `<ul>`; everything else passes
/// through. Output lines are joined with `<br>\n`.
pub fn to_html(text: &str) -> String {
    // Deeper headers first, so `# ` does not eat `### `.
    let text = H3_RE.replace_all(text, "<h3>$1</h3>");
    let text = H2_RE.replace_all(&text, "<h2>$1</h2>");
    let text = H1_RE.replace_all(&text, "<h1>$1</h1>");
    let text = BOLD_RE.replace_all(&text, "<b>$1</b>");

    let mut out: Vec<String> = Vec::new();
    let mut in_list = false;
    for line in text.split('\n') {
        if let Some(content) = line.trim().strip_prefix("- ") {
            if !in_list {
                out.push("<ul>".to_string());
                in_list = true;
            }
            out.push(format!("  <li>{content}</li>"));
        } else {
            if in_list {
                out.push("</ul>".to_string());
                in_list = false;
            }
            out.push(line.to_string());
        }
    }
    if in_list {
        out.push("</ul>".to_string());
    }

    out.join("<br>\n")
}
