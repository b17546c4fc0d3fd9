use super::ReplCommand;
use crate::app::Conversion;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q`/`:quit`, `:h`/`:help`
/// - `:w`/`:watch`, `:s`/`:summary`, `:k`/`:keywords` → toggles
/// - `:c`/`:copy` → copy cleaned text to the clipboard
/// - `:html`, `:jp`, `:jm`, `:ue`, `:ud`, `:be`, `:bd` → conversions
/// - `@filename` → load file, `@@` → process clipboard once
/// - anything else → process as raw text
pub fn parse_repl_input(input: &str) -> ReplCommand {
    let input = input.trim();

    if input.is_empty() {
        return ReplCommand::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "q" | "quit" => ReplCommand::Quit,
            "h" | "help" => ReplCommand::Help,
            "w" | "watch" => ReplCommand::ToggleWatch,
            "s" | "summary" => ReplCommand::ToggleSummary,
            "k" | "keywords" => ReplCommand::ToggleKeywords,
            "c" | "copy" => ReplCommand::CopyCleaned,
            "html" => ReplCommand::Convert(Conversion::MarkdownToHtml),
            "jp" => ReplCommand::Convert(Conversion::JsonPretty),
            "jm" => ReplCommand::Convert(Conversion::JsonMinify),
            "ue" => ReplCommand::Convert(Conversion::UrlEncode),
            "ud" => ReplCommand::Convert(Conversion::UrlDecode),
            "be" => ReplCommand::Convert(Conversion::Base64Encode),
            "bd" => ReplCommand::Convert(Conversion::Base64Decode),
            _ => ReplCommand::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            ReplCommand::LoadClipboard
        } else {
            ReplCommand::LoadFile(filename.to_string())
        }
    } else {
        ReplCommand::Process(input.to_string())
    }
}
