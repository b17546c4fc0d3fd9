//! Text cleaning and bullet re-indentation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches a bare `[cite_start]` marker or `[cite: 12, 45]` with a
    // comma-separated integer list.
    static ref CITATION_RE: Regex = Regex::new(r"\[cite(?:_start|: [\d, ]+)\]").unwrap();
}

/// Bullets indented this deep or more become dash sub-items.
const SHALLOW_INDENT_LIMIT: usize = 8;

/// Clean `text` and re-indent its bullet lists.
///
/// In order: strip citation annotations, strip every literal `**`, strip every
/// literal `### ` (marker plus its trailing space), then rewrite bullet lines
/// into a two-level lettered/dashed outline. The markup-stripping steps are
/// naive text removal, not markup-aware parsing.
///
/// Markup stripping is idempotent. The whole-text trim is not quite: when the
/// output *starts* with a re-indented bullet, a second pass trims that line's
/// fresh leading spaces. Only leading whitespace can differ on a repeat run;
/// line bodies are stable.
pub fn format(text: &str) -> String {
    let text = CITATION_RE.replace_all(text, "");
    let text = text.replace("**", "").replace("### ", "");
    reindent_bullets(text.trim())
}

enum LineClass<'a> {
    Normal,
    ShallowBullet(&'a str),
    DeepBullet(&'a str),
}

fn classify(line: &str) -> LineClass<'_> {
    let stripped = line.trim();
    match stripped.strip_prefix("* ") {
        Some(content) => {
            // Indentation counts leading spaces only, tabs pass through.
            let indentation = line.len() - line.trim_start_matches(' ').len();
            if indentation < SHALLOW_INDENT_LIMIT {
                LineClass::ShallowBullet(content)
            } else {
                LineClass::DeepBullet(content)
            }
        }
        None => LineClass::Normal,
    }
}

/// Rewrite bullet lines line-by-line, preserving order.
///
/// Shallow bullets become a lettered list (`    a. `, `    b. `, ...). The
/// letter counter restarts whenever a non-bullet line intervenes; deep bullets
/// become `        - ` sub-items and leave the counter alone.
fn reindent_bullets(text: &str) -> String {
    let mut processed: Vec<String> = Vec::new();
    let mut level_1_counter = 0usize;

    for line in text.split('\n') {
        match classify(line) {
            LineClass::ShallowBullet(content) => {
                level_1_counter += 1;
                processed.push(render_shallow(level_1_counter, content));
            }
            LineClass::DeepBullet(content) => {
                processed.push(format!("        - {content}"));
            }
            LineClass::Normal => {
                level_1_counter = 0;
                processed.push(line.to_string());
            }
        }
    }

    processed.join("\n")
}

fn render_shallow(counter: usize, content: &str) -> String {
    format!("    {}. {}", letter_label(counter), content)
}

/// Bijective base-26 label: 1 → "a", 26 → "z", 27 → "aa".
///
/// Counters past 26 grow an extra letter instead of wrapping.
fn letter_label(mut n: usize) -> String {
    debug_assert!(n > 0);
    let mut buf: Vec<u8> = Vec::new();
    while n > 0 {
        n -= 1;
        buf.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    buf.reverse();
    // ASCII by construction.
    String::from_utf8(buf).unwrap_or_default()
}
