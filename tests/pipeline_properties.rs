//! Behavioral properties of the pipeline and converters.

use textool::convert::{encoding, json};
use textool::pipeline::formatter::format;
use textool::pipeline::keywords::extract_keywords;
use textool::pipeline::summarize::summarize;

#[test]
fn citation_annotations_leave_no_residue() {
    let inputs = [
        "before[cite_start]after",
        "before[cite: 1]after",
        "before[cite: 12, 45, 7]after",
        "[cite_start][cite: 1, 2]",
    ];
    for input in inputs {
        let cleaned = format(input);
        assert!(!cleaned.contains("[cite"), "residue in {cleaned:?}");
        assert!(!cleaned.contains(']'), "bracket residue in {cleaned:?}");
    }
}

#[test]
fn formatting_is_idempotent() {
    // The leading non-bullet line matters: the whole-text trim would strip a
    // first bullet line's fresh indentation on a second pass. That whitespace
    // exception is documented on `format`; markup stripping itself never
    // changes twice.
    let inputs = [
        "### Head\n**bold**[cite: 1, 2] tail",
        "intro\n* one\n* two\n        * sub\ntext\n* restart",
        "plain text, nothing to do.",
    ];
    for input in inputs {
        let once = format(input);
        assert_eq!(format(&once), once, "second pass changed {input:?}");
    }
}

#[test]
fn markup_stripping_is_idempotent_even_for_leading_bullets() {
    // A text starting with a bullet is re-trimmed on the second pass, so only
    // leading whitespace may differ; the stripped markup never reappears and
    // the line bodies are unchanged.
    let once = format("* one\n* two\n        * sub\ntext\n* restart");
    let twice = format(&once);
    assert_eq!(twice.trim_start(), once.trim_start());
    let once_lines: Vec<&str> = once.split('\n').map(str::trim_start).collect();
    let twice_lines: Vec<&str> = twice.split('\n').map(str::trim_start).collect();
    assert_eq!(twice_lines, once_lines);
}

#[test]
fn bullet_counter_survives_deep_bullets_and_resets_on_plain_lines() {
    let output = format("* a\n* b\n        * c\n* d\nplain\n* e");
    let expected = "    a. a\n    b. b\n        - c\n    c. d\nplain\n    a. e";
    assert_eq!(output, expected);
}

#[test]
fn summarize_returns_input_when_too_few_sentences() {
    let text = "First thing. Second thing.";
    assert_eq!(summarize(text, 3), text);
    assert_eq!(summarize("no terminal punctuation", 2), "no terminal punctuation");
}

#[test]
fn keywords_exclude_stopwords_and_keep_the_content_word() {
    // Entirely stopwords except one repeated content word.
    let text = "the and of to widget the widget and widget";
    assert_eq!(extract_keywords(text, 5), "widget");
}

#[test]
fn json_pretty_round_trip_preserves_structure() {
    let inputs = [
        r#"{"a":1,"b":[true,null,"x"]}"#,
        r#"[1,2,3]"#,
        r#""just a string""#,
    ];
    for input in inputs {
        let original: serde_json::Value = serde_json::from_str(input).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&json::pretty(input)).unwrap();
        assert_eq!(reparsed, original);
    }
}

#[test]
fn malformed_json_yields_the_error_string() {
    for input in ["{", "{\"a\":}", "not json at all"] {
        assert_eq!(json::pretty(input), json::INVALID_JSON);
        assert_eq!(json::minify(input), json::INVALID_JSON);
    }
}

#[test]
fn base64_round_trips_utf8() {
    for input in ["", "ascii", "with spaces and\nnewlines", "ünïcødé ☃"] {
        assert_eq!(encoding::b64_decode(&encoding::b64_encode(input)), input);
    }
}

#[test]
fn malformed_base64_yields_the_error_string() {
    assert_eq!(encoding::b64_decode("@@@@"), encoding::INVALID_BASE64);
}
