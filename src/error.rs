use std::fmt;

#[derive(Debug)]
pub enum SheetError {
    Parse(ParseError),
    Validate(ValidateError),
}

/// Failure to build a single note from its name, duration, and alterations.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteError {
    UnknownPitch(String),
    UnknownDuration(String),
    UnknownAlteration(String),
}

/// Failure while reading the sheet line by line. Every variant carries the
/// 1-based number of the offending line.
#[derive(Debug)]
pub enum ParseError {
    MalformedLine {
        line: usize,
        text: String,
    },
    InvalidTempo {
        line: usize,
        value: String,
    },
    UnknownVariable {
        line: usize,
        name: String,
    },
    Note {
        line: usize,
        text: String,
        source: NoteError,
    },
}

/// Whole-song invariant violated after parsing completed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidateError {
    MissingTempo,
    EmptySheet,
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Parse(e) => write!(f, "Parse error: {e}"),
            SheetError::Validate(e) => write!(f, "Validation error: {e}"),
        }
    }
}

impl std::error::Error for SheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SheetError::Parse(e) => Some(e),
            SheetError::Validate(e) => Some(e),
        }
    }
}

impl fmt::Display for NoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteError::UnknownPitch(name) => write!(f, "Invalid note name: {name}"),
            NoteError::UnknownDuration(name) => write!(f, "Invalid note duration: {name}"),
            NoteError::UnknownAlteration(name) => write!(f, "Invalid alteration: {name}"),
        }
    }
}

impl std::error::Error for NoteError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedLine { line, text } => {
                write!(f, "Line {line}: expected at least a note and its duration, got \"{text}\"")
            }
            ParseError::InvalidTempo { line, value } => {
                write!(f, "Line {line}: BPM value \"{value}\" is not a valid tempo")
            }
            ParseError::UnknownVariable { line, name } => {
                write!(f, "Line {line}: unknown variable name: {name}")
            }
            ParseError::Note { line, text, source } => {
                write!(f, "Line {line}: {source} (in \"{text}\")")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Note { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateError::MissingTempo => write!(f, "Sheet doesn't set the BPM variable"),
            ValidateError::EmptySheet => write!(f, "No notes found in the sheet"),
        }
    }
}

impl std::error::Error for ValidateError {}

impl From<ParseError> for SheetError {
    fn from(e: ParseError) -> Self {
        SheetError::Parse(e)
    }
}

impl From<ValidateError> for SheetError {
    fn from(e: ValidateError) -> Self {
        SheetError::Validate(e)
    }
}
