//! Data models for the Spellbook Archive

pub mod key;
pub mod spellbook;
pub mod student;

// Re-export commonly used types
pub use key::{cmp_ignore_case, contains_ignore_case, CopyKey, Folded};
pub use spellbook::Spellbook;
pub use student::Student;
