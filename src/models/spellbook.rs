//! Spellbook (catalog entry) model

use std::fmt;

use super::key::CopyKey;

/// A lendable catalog entry and its rental state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spellbook {
    serial: i32,
    title: String,
    inventor: String,
    kind: String,
    rented_by: Option<i32>,
    history: Vec<i32>,
}

impl Spellbook {
    pub fn new(
        serial: i32,
        title: impl Into<String>,
        inventor: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            serial,
            title: title.into(),
            inventor: inventor.into(),
            kind: kind.into(),
            rented_by: None,
            history: Vec::new(),
        }
    }

    pub fn serial(&self) -> i32 {
        self.serial
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn inventor(&self) -> &str {
        &self.inventor
    }

    /// The spellbook's type (category)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Student currently holding this spellbook, if any
    pub fn rented_by(&self) -> Option<i32> {
        self.rented_by
    }

    pub fn set_rented_by(&mut self, student_id: Option<i32>) {
        self.rented_by = student_id;
    }

    pub fn is_available(&self) -> bool {
        self.rented_by.is_none()
    }

    /// Ids of the students who returned this spellbook, oldest first
    pub fn history(&self) -> &[i32] {
        &self.history
    }

    pub fn add_history(&mut self, student_id: i32) {
        self.history.push(student_id);
    }

    /// Case-insensitive (title, inventor) identity shared by all copies
    pub fn copy_key(&self) -> CopyKey {
        CopyKey::new(&self.title, &self.inventor)
    }

    /// `Title (Inventor)`
    pub fn short(&self) -> Short<'_> {
        Short(self)
    }

    /// `serial: Title (Inventor, Type)` followed by the availability line
    pub fn long(&self) -> Long<'_> {
        Long(self)
    }
}

/// Short display form of a [`Spellbook`]
pub struct Short<'a>(&'a Spellbook);

impl fmt::Display for Short<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.title, self.0.inventor)
    }
}

/// Long display form of a [`Spellbook`]
pub struct Long<'a>(&'a Spellbook);

impl fmt::Display for Long<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(
            f,
            "{}: {} ({}, {})",
            book.serial, book.title, book.inventor, book.kind
        )?;
        match book.rented_by {
            Some(id) => write!(f, "Rented by: {}.", id),
            None => write!(f, "Currently available."),
        }
    }
}
