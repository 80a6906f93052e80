//! Error handling for texstate
//!
//! This module provides a unified error type and result type for every
//! store, the expression evaluator and the command layer.

use thiserror::Error;

/// State error type
///
/// Every variant carries the offending name or text so the host can report it
/// next to the macro that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A counter lookup missed
    #[error("Undefined counter \"{0}\"")]
    UndefinedCounter(String),
    /// A counter with this name already exists
    #[error("Counter \"{0}\" already defined")]
    DuplicateCounter(String),
    /// Reparenting would make a counter its own ancestor
    #[error("Counter \"{counter}\" cannot be reset by \"{within}\": cyclic reset chain")]
    CounterCycle { counter: String, within: String },

    /// A flag lookup missed
    #[error("Undefined {kind} \"{name}\"")]
    UndefinedFlag { kind: String, name: String },
    /// A flag with this name already exists in its namespace
    #[error("{kind} \"{name}\" already defined")]
    DuplicateFlag { kind: String, name: String },
    /// A flag value other than `true` or `false`
    #[error("Invalid boolean value \"{0}\"")]
    InvalidFlagValue(String),

    /// A list lookup missed
    #[error("Undefined list \"{0}\"")]
    UndefinedList(String),
    /// A list with this name already exists
    #[error("List \"{0}\" already defined")]
    DuplicateList(String),

    /// A name that is neither a single character nor a run of letters
    #[error("Illegal control sequence name \"{name}\" for {command}")]
    IllegalControlSequenceName { command: String, name: String },
    /// A control sequence was required but a plain name was given
    #[error("{0} must be given a control sequence")]
    MissingControlSequence(String),

    /// Unbalanced parentheses in an integer expression
    #[error("Mismatched parentheses in \"{0}\"")]
    MismatchedParentheses(String),
    /// The expression does not reduce to exactly one value
    #[error("Invalid expression \"{0}\"")]
    InvalidExpression(String),
    /// A token or argument that is not a usable number
    #[error("Invalid number \"{0}\"")]
    InvalidNumber(String),

    /// A `}` without a matching `{`
    #[error("Extra close brace in \"{0}\"")]
    ExtraCloseBrace(String),
    /// A `{` that is never closed
    #[error("Missing close brace in \"{0}\"")]
    MissingCloseBrace(String),

    /// An unsupported relation in a numeric comparison
    #[error("Invalid relation: {0}")]
    InvalidRelation(String),
    /// The optional argument was given before the mandatory name
    #[error("{0}: counter name must come before optional argument")]
    InvalidArgumentOrder(String),
    /// The command table has no entry for this name
    #[error("Undefined control sequence {0}")]
    UnknownCommand(String),
    /// The argument source ran out of input
    #[error("Missing argument for {0}")]
    MissingArgument(String),
}

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

impl StateError {
    /// The TeX-style error identifier of this error
    pub fn kind(&self) -> &'static str {
        match self {
            StateError::UndefinedCounter(_) => "UndefinedCounter",
            StateError::DuplicateCounter(_) => "DuplicateCounter",
            StateError::CounterCycle { .. } => "CounterCycle",
            StateError::UndefinedFlag { .. } => "UndefinedFlag",
            StateError::DuplicateFlag { .. } => "DuplicateFlag",
            StateError::InvalidFlagValue(_) => "InvalidFlag",
            StateError::UndefinedList(_) => "UndefinedList",
            StateError::DuplicateList(_) => "DuplicateList",
            StateError::IllegalControlSequenceName { .. } => "IllegalControlSequenceName",
            StateError::MissingControlSequence(_) => "MissingControlSequence",
            StateError::MismatchedParentheses(_) => "MismatchedParentheses",
            StateError::InvalidExpression(_) => "InvalidExpression",
            StateError::InvalidNumber(_) => "InvalidNumber",
            StateError::ExtraCloseBrace(_) => "ExtraCloseBrace",
            StateError::MissingCloseBrace(_) => "MissingCloseBrace",
            StateError::InvalidRelation(_) => "InvalidRelation",
            StateError::InvalidArgumentOrder(_) => "InvalidArgumentOrder",
            StateError::UnknownCommand(_) => "UnknownCommand",
            StateError::MissingArgument(_) => "MissingArgument",
        }
    }
}

// Convenience constructors for errors
impl StateError {
    pub fn undefined_counter(name: impl Into<String>) -> Self {
        StateError::UndefinedCounter(name.into())
    }

    pub fn undefined_list(name: impl Into<String>) -> Self {
        StateError::UndefinedList(name.into())
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        StateError::InvalidNumber(text.into())
    }

    pub fn illegal_name(command: impl Into<String>, name: impl Into<String>) -> Self {
        StateError::IllegalControlSequenceName {
            command: command.into(),
            name: name.into(),
        }
    }

    pub fn missing_argument(command: impl Into<String>) -> Self {
        StateError::MissingArgument(command.into())
    }
}
