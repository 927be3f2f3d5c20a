use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewError {
    NoActiveCapture,
    UnknownBlock(String),
    Io(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::NoActiveCapture => write!(f, "no output capture is active"),
            ViewError::UnknownBlock(id) => write!(f, "block '{}' not found", id),
            ViewError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<std::io::Error> for ViewError {
    fn from(error: std::io::Error) -> Self {
        ViewError::Io(error.to_string())
    }
}
