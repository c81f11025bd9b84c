//! Error types for the Spellbook Archive
//!
//! Domain errors render as the exact line printed back to the operator, so a
//! handler can turn any `AppError` into an output block with `to_string()`.

use thiserror::Error;

/// Coarse classification used when logging failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Io,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No students in system.")]
    NoStudents,

    #[error("No such student in system.")]
    NoSuchStudent,

    #[error("No spellbooks in system.")]
    NoSpellbooks,

    #[error("No such spellbook in system.")]
    NoSuchSpellbook,

    #[error("No spellbooks available.")]
    NoneAvailable,

    #[error("No spellbooks with type {0}.")]
    NoSuchType(String),

    #[error("No spellbooks by {0}.")]
    NoSuchInventor(String),

    #[error("No rental history.")]
    NoSpellbookHistory,

    #[error("Student not currently renting.")]
    NotRenting,

    #[error("No rental history for student.")]
    NoStudentHistory,

    #[error("No common spellbooks.")]
    NoCommonSpellbooks,

    #[error("Spellbook already exists in system.")]
    SpellbookExists,

    #[error("Spellbook is currently unavailable.")]
    SpellbookUnavailable,

    #[error("Unable to return spellbook.")]
    UnableToReturn,

    #[error("Duplicate students provided.")]
    DuplicateStudents,

    #[error("No student ids left.")]
    StudentIdsExhausted,

    #[error("No such spellbook in file.")]
    NotInFile,

    #[error("No such file.")]
    NoSuchFile,

    #[error("No such collection.")]
    NoSuchCollection,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::SpellbookExists
            | AppError::SpellbookUnavailable
            | AppError::UnableToReturn
            | AppError::DuplicateStudents
            | AppError::StudentIdsExhausted => ErrorKind::Conflict,
            AppError::NoSuchFile
            | AppError::NoSuchCollection
            | AppError::Config(_)
            | AppError::Io(_) => ErrorKind::Io,
            _ => ErrorKind::NotFound,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
