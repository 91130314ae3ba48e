use thiserror::Error;

/// Errors from the settings-file parser. Lines are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    #[error("line {line}: expected `key = value`")]
    MissingAssignment { line: u32 },

    #[error("line {line}: empty key")]
    EmptyKey { line: u32 },

    #[error("line {line}: unterminated quoted value")]
    UnterminatedQuote { line: u32 },

    #[error("line {line}: unexpected text after quoted value")]
    TrailingText { line: u32 },
}

impl IniError {
    pub fn line(&self) -> u32 {
        match self {
            IniError::MissingAssignment { line }
            | IniError::EmptyKey { line }
            | IniError::UnterminatedQuote { line }
            | IniError::TrailingText { line } => *line,
        }
    }
}

/// Errors from the rule-file parser. Any of them rejects the whole rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("malformed rule document at byte {position}: {message}")]
    Malformed { position: u64, message: String },

    #[error("rule document has no root element")]
    MissingRoot,

    #[error("rule document has more than one root element (second starts at byte {position})")]
    MultipleRoots { position: u64 },

    #[error("rule document ends inside <{element}>")]
    Unclosed { element: String },

    #[error("rule <{element}> has a non-integer LEVEL: {value:?}")]
    InvalidLevel { element: String, value: String },
}
