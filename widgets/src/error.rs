use std::fmt;

use view::ViewError;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// A block reached its end boundary without an id.
    MissingIdentifier,
    NotBegun { widget: String },
    UnexpectedEnd { widget: String },
    MismatchedEnd { expected: String, found: String },
    UnclosedWidgets(Vec<String>),
    Config(String),
    View(ViewError),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::MissingIdentifier => {
                write!(f, "id required: assign the block id with the id() setter")
            }
            WidgetError::NotBegun { widget } => {
                write!(f, "{} was run without a matching begin()", widget)
            }
            WidgetError::UnexpectedEnd { widget } => {
                write!(
                    f,
                    "unexpected {}::end() call: a matching begin() is not found",
                    widget
                )
            }
            WidgetError::MismatchedEnd { expected, found } => {
                write!(f, "expecting end() of {}, found {}", expected, found)
            }
            WidgetError::UnclosedWidgets(names) => {
                write!(f, "widgets begun but never ended: {}", names.join(", "))
            }
            WidgetError::Config(msg) => write!(f, "invalid widget configuration: {}", msg),
            WidgetError::View(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for WidgetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WidgetError::View(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ViewError> for WidgetError {
    fn from(error: ViewError) -> Self {
        WidgetError::View(error)
    }
}
