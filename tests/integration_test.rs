use textool::app::{App, AppEvent, Conversion};
use textool::input::read_text_file;
use textool::pipeline::{self, PipelineOptions};
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_clean_and_analyze() {
    let test_file = "test_e2e_textool.txt";
    let content = "### Notes[cite_start]\n\
                   **Compilers** turn source into machine code. \
                   Compilers need parsers. Parsers build trees. Linkers link.[cite: 3, 7]\n\
                   * widget alpha\n\
                   * widget beta\n\
                   \x20\x20\x20\x20\x20\x20\x20\x20* gadget nested\n\
                   * widget delta";

    let mut file = File::create(test_file).unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let loaded = read_text_file(test_file).expect("should load file");
    assert_eq!(loaded, content);

    let options = PipelineOptions {
        summary: true,
        keywords: true,
        ..PipelineOptions::default()
    };
    let output = pipeline::run(&loaded, &options);

    assert!(!output.cleaned.contains("[cite"));
    assert!(!output.cleaned.contains("**"));
    assert!(!output.cleaned.contains("### "));
    assert!(output.cleaned.contains("    a. widget alpha"));
    assert!(output.cleaned.contains("    b. widget beta"));
    assert!(output.cleaned.contains("        - gadget nested"));
    assert!(output.cleaned.contains("    c. widget delta"));

    let keywords = output.keywords.expect("keywords enabled");
    // "widget" occurs three times across the bullets, the rest twice or once.
    assert!(keywords.starts_with("widget, compilers, parsers"));
    assert!(!keywords.split(", ").any(|word| word == "into"));

    let summary = output.summary.expect("summary enabled");
    assert!(!summary.is_empty());

    fs::remove_file(test_file).unwrap();
}

#[test]
fn end_to_end_app_event_flow() {
    let mut app = App::new();
    app.handle_event(AppEvent::ToggleKeywords);

    let reply = app.handle_event(AppEvent::ProcessText(
        "**Rust** rust rust, the language.".to_string(),
    ));
    assert_eq!(reply.section("Cleaned Text"), Some("Rust rust rust, the language."));
    assert_eq!(reply.section("Keywords"), Some("rust, language"));

    let reply = app.handle_event(AppEvent::Convert(Conversion::UrlEncode));
    let encoded = reply.section("Converted").unwrap().to_string();
    assert!(encoded.contains("%20"));

    let reply = app.handle_event(AppEvent::Convert(Conversion::UrlDecode));
    assert_eq!(reply.section("Converted"), Some("Rust rust rust, the language."));
}
