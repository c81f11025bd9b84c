//! Spellbooks repository (in-memory catalog)

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::Spellbook,
};

/// Catalog keyed by serial number, kept in insertion order
#[derive(Debug, Default)]
pub struct SpellbooksRepository {
    books: IndexMap<i32, Spellbook>,
}

impl SpellbooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn contains(&self, serial: i32) -> bool {
        self.books.contains_key(&serial)
    }

    pub fn get(&self, serial: i32) -> Option<&Spellbook> {
        self.books.get(&serial)
    }

    pub fn get_mut(&mut self, serial: i32) -> Option<&mut Spellbook> {
        self.books.get_mut(&serial)
    }

    /// Get spellbook by serial, distinguishing an empty catalog from a missing serial
    pub fn find(&self, serial: i32) -> AppResult<&Spellbook> {
        if self.books.is_empty() {
            return Err(AppError::NoSpellbooks);
        }
        self.books.get(&serial).ok_or(AppError::NoSuchSpellbook)
    }

    pub fn find_mut(&mut self, serial: i32) -> AppResult<&mut Spellbook> {
        if self.books.is_empty() {
            return Err(AppError::NoSpellbooks);
        }
        self.books.get_mut(&serial).ok_or(AppError::NoSuchSpellbook)
    }

    /// Insert a spellbook unless its serial is already catalogued.
    /// Returns whether the spellbook was inserted.
    pub fn insert(&mut self, book: Spellbook) -> bool {
        if self.books.contains_key(&book.serial()) {
            return false;
        }
        self.books.insert(book.serial(), book);
        true
    }

    /// All spellbooks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Spellbook> {
        self.books.values()
    }

    /// All spellbooks ordered by ascending serial
    pub fn sorted_by_serial(&self) -> Vec<&Spellbook> {
        let mut books: Vec<&Spellbook> = self.books.values().collect();
        books.sort_by_key(|b| b.serial());
        books
    }
}
