/// What the front-end should print after one event.
///
/// The app core never writes to the terminal itself; it hands back labelled
/// sections plus optional status/warning lines and lets the caller render
/// them. This keeps the event-handling thread the single terminal writer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub sections: Vec<Section>,
    pub status: Option<String>,
    pub warning: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub body: String,
}

impl Reply {
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            status: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            warning: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn push_section(&mut self, label: &'static str, body: String) {
        self.sections.push(Section { label, body });
    }

    pub fn section(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.label == label)
            .map(|section| section.body.as_str())
    }
}
