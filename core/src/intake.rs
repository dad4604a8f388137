pub const PLAIN_TEXT_MIME: &str = "text/plain";

pub const TEXT_READY_NOTICE: &str =
    "File uploaded successfully! You can now paste text or generate questions.";
pub const UNSUPPORTED_NOTICE: &str =
    "File uploaded! (Note: PDF/DOC parsing requires backend integration)";

pub const DEFAULT_PLACEHOLDER: &str = "Paste your study material here...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakePlan {
    /// Read the contents as text, then update the hint.
    ReadText,
    /// Keep the file but do not read it.
    Unsupported,
}

pub fn plan_intake(mime: &str) -> IntakePlan {
    if mime.trim().eq_ignore_ascii_case(PLAIN_TEXT_MIME) {
        IntakePlan::ReadText
    } else {
        IntakePlan::Unsupported
    }
}

/// The single file the page currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub mime: String,
    pub text: Option<String>,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            text: None,
        }
    }

    pub fn plan(&self) -> IntakePlan {
        plan_intake(&self.mime)
    }
}

pub fn ready_placeholder(file_name: &str) -> String {
    format!("File \"{file_name}\" ready. Paste or type your content...")
}
