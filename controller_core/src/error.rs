use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A required element of the controller page is not in the document.
    MissingElement(&'static str),
    /// The runtime refused a DOM operation.
    Dom(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element #{id}"),
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
        }
    }
}

impl std::error::Error for UiError {}
