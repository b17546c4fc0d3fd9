use crate::app::{AppEvent, Conversion};

/// Commands that can be parsed from REPL input
///
/// These commands map to AppEvent for handling in App core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    /// Run the pipeline on a line of raw text
    Process(String),
    /// Load a UTF-8 text file
    LoadFile(String),
    /// Process the clipboard once
    LoadClipboard,
    /// Copy the last cleaned text back to the clipboard
    CopyCleaned,
    /// Convert the last cleaned text
    Convert(Conversion),
    ToggleWatch,
    ToggleSummary,
    ToggleKeywords,
    /// Unknown/invalid command
    Unknown(String),
}

/// Convert a parsed REPL command into an AppEvent
///
/// This is the translation layer between REPL input and App core.
pub fn command_to_app_event(command: ReplCommand) -> AppEvent {
    match command {
        ReplCommand::Quit => AppEvent::Quit,
        ReplCommand::Help => AppEvent::Help,
        ReplCommand::Process(text) => AppEvent::ProcessText(text),
        ReplCommand::LoadFile(path) => AppEvent::LoadFile(path),
        ReplCommand::LoadClipboard => AppEvent::LoadClipboard,
        ReplCommand::CopyCleaned => AppEvent::CopyCleaned,
        ReplCommand::Convert(conversion) => AppEvent::Convert(conversion),
        ReplCommand::ToggleWatch => AppEvent::ToggleWatch,
        ReplCommand::ToggleSummary => AppEvent::ToggleSummary,
        ReplCommand::ToggleKeywords => AppEvent::ToggleKeywords,
        ReplCommand::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
