use std::fmt;

/// Result type alias for document operations
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur while loading, editing and saving INI documents
#[derive(Debug, Clone)]
pub enum IniError {
    /// Parse error from pest
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// File I/O error
    Io { path: String, message: String },

    /// No document has been loaded or parsed yet
    NotLoaded,

    /// The document serializes to nothing, so there is nothing to write
    EmptyDocument,

    /// Custom error with message
    Custom { message: String },
}

impl IniError {
    /// Create a parse error
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        IniError::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        IniError::Custom {
            message: message.into(),
        }
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::Parse {
                line,
                column,
                message,
            } => {
                write!(
                    f,
                    "Parse error at line {}, column {}: {}",
                    line, column, message
                )
            }
            IniError::Io { path, message } => {
                write!(f, "I/O error for '{}': {}", path, message)
            }
            IniError::NotLoaded => {
                write!(f, "No document has been loaded")
            }
            IniError::EmptyDocument => {
                write!(f, "Document is empty, nothing to write")
            }
            IniError::Custom { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for IniError {}

impl From<std::io::Error> for IniError {
    fn from(err: std::io::Error) -> Self {
        IniError::Custom {
            message: err.to_string(),
        }
    }
}

impl<R: pest::RuleType> From<pest::error::Error<R>> for IniError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        IniError::Parse {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}
