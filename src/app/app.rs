use super::event::{AppEvent, Conversion};
use super::mode::AppMode;
use super::reply::Reply;
use crate::convert::{encoding, json, markdown};
use crate::input;
use crate::pipeline::{self, PipelineOptions};

const HELP_TEXT: &str = "\
Commands:
  :q, :quit      quit
  :h, :help      this help
  :w, :watch     toggle clipboard watching
  :s, :summary   toggle summary generation
  :k, :keywords  toggle keyword extraction
  :c, :copy      copy cleaned text to the clipboard
  :html          convert cleaned text to HTML
  :jp / :jm      pretty-print / minify cleaned text as JSON
  :ue / :ud      URL encode / decode cleaned text
  :be / :bd      Base64 encode / decode cleaned text
  @path          load a text file
  @@             process the clipboard once
  anything else  process the line as raw text";

pub struct App {
    pub mode: AppMode,
    pub options: PipelineOptions,
    pub watching: bool,
    /// Output of the most recent pipeline run; conversions apply to this.
    pub cleaned: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Repl,
            options: PipelineOptions::default(),
            watching: false,
            cleaned: None,
        }
    }

    /// Handle one event and say what to print. Never panics, never errors:
    /// failures come back as the `warning` field of the reply.
    pub fn handle_event(&mut self, event: AppEvent) -> Reply {
        match event {
            AppEvent::ProcessText(text) | AppEvent::ClipboardChange(text) => {
                self.process_text(&text)
            }
            AppEvent::LoadFile(path) => match input::read_text_file(&path) {
                Ok(content) => self.process_text(&content),
                Err(err) => Reply::warning(err.to_string()),
            },
            AppEvent::LoadClipboard => match input::clipboard::read_text() {
                Ok(content) => self.process_text(&content),
                Err(err) => Reply::warning(err.to_string()),
            },
            AppEvent::CopyCleaned => match &self.cleaned {
                Some(cleaned) => match input::clipboard::write_text(cleaned) {
                    Ok(()) => Reply::status("Cleaned text copied to clipboard."),
                    Err(err) => Reply::warning(err.to_string()),
                },
                None => Reply::warning("Nothing to copy yet."),
            },
            AppEvent::Convert(conversion) => self.convert(conversion),
            AppEvent::ToggleWatch => {
                self.watching = !self.watching;
                if self.watching {
                    Reply::status("Clipboard watching on.")
                } else {
                    Reply::status("Clipboard watching off.")
                }
            }
            AppEvent::ToggleSummary => {
                self.options.summary = !self.options.summary;
                Reply::status(if self.options.summary {
                    "Summary generation on."
                } else {
                    "Summary generation off."
                })
            }
            AppEvent::ToggleKeywords => {
                self.options.keywords = !self.options.keywords;
                Reply::status(if self.options.keywords {
                    "Keyword extraction on."
                } else {
                    "Keyword extraction off."
                })
            }
            AppEvent::WatcherFailed(message) => {
                self.watching = false;
                Reply::warning(format!("Clipboard watching stopped: {message}"))
            }
            AppEvent::Help => Reply::status(HELP_TEXT),
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
                Reply::default()
            }
            AppEvent::InvalidCommand(input) => {
                Reply::warning(format!("Unknown command: {input} (:h for help)"))
            }
        }
    }

    fn process_text(&mut self, text: &str) -> Reply {
        let output = pipeline::run(text, &self.options);
        let mut reply = Reply::default();
        reply.push_section("Cleaned Text", output.cleaned.clone());
        if let Some(summary) = output.summary {
            reply.push_section("Summary", summary);
        }
        if let Some(keywords) = output.keywords {
            reply.push_section("Keywords", keywords);
        }
        self.cleaned = Some(output.cleaned);
        reply
    }

    fn convert(&mut self, conversion: Conversion) -> Reply {
        let Some(cleaned) = self.cleaned.clone() else {
            return Reply::warning("Nothing to convert yet (process some text first).");
        };
        let converted = match conversion {
            Conversion::MarkdownToHtml => markdown::to_html(&cleaned),
            Conversion::JsonPretty => json::pretty(&cleaned),
            Conversion::JsonMinify => json::minify(&cleaned),
            Conversion::UrlEncode => encoding::url_encode(&cleaned),
            Conversion::UrlDecode => encoding::url_decode(&cleaned),
            Conversion::Base64Encode => encoding::b64_encode(&cleaned),
            Conversion::Base64Decode => encoding::b64_decode(&cleaned),
        };
        // The converted form replaces the cleaned text, so conversions chain
        // and `:c` copies what is on screen.
        self.cleaned = Some(converted.clone());
        let mut reply = Reply::default();
        reply.push_section("Converted", converted);
        reply
    }
}
