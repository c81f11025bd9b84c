//! Catalog query service

use std::collections::BTreeMap;
use std::fmt;

use crate::{
    error::{AppError, AppResult},
    models::{cmp_ignore_case, contains_ignore_case, CopyKey, Folded, Spellbook},
    repository::Repository,
};

/// Number of copies sharing one (title, inventor) pair
#[derive(Debug, Clone, Copy)]
pub struct CopyCount<'a> {
    /// First catalogued copy; its casing is used for display
    pub representative: &'a Spellbook,
    pub count: usize,
}

impl fmt::Display for CopyCount<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.representative.short(), self.count)
    }
}

pub struct CatalogService<'a> {
    repository: &'a Repository,
}

impl<'a> CatalogService<'a> {
    pub fn new(repository: &'a Repository) -> Self {
        Self { repository }
    }

    fn non_empty(&self) -> AppResult<()> {
        if self.repository.spellbooks.is_empty() {
            return Err(AppError::NoSpellbooks);
        }
        Ok(())
    }

    /// Every spellbook, ascending by serial
    pub fn list_all(&self) -> AppResult<Vec<&'a Spellbook>> {
        self.non_empty()?;
        Ok(self.repository.spellbooks.sorted_by_serial())
    }

    /// Spellbooks nobody is renting, ascending by serial
    pub fn list_available(&self) -> AppResult<Vec<&'a Spellbook>> {
        let available: Vec<&Spellbook> = self
            .list_all()?
            .into_iter()
            .filter(|b| b.is_available())
            .collect();
        if available.is_empty() {
            return Err(AppError::NoneAvailable);
        }
        Ok(available)
    }

    /// Distinct types ignoring case, sorted ignoring case
    pub fn list_types(&self) -> AppResult<Vec<&'a str>> {
        self.distinct(Spellbook::kind)
    }

    /// Distinct inventors ignoring case, sorted ignoring case
    pub fn list_inventors(&self) -> AppResult<Vec<&'a str>> {
        self.distinct(Spellbook::inventor)
    }

    fn distinct(&self, field: fn(&'a Spellbook) -> &'a str) -> AppResult<Vec<&'a str>> {
        self.non_empty()?;
        let mut seen: BTreeMap<Folded, &'a str> = BTreeMap::new();
        for book in self.repository.spellbooks.iter() {
            let value = field(book);
            seen.entry(Folded::new(value)).or_insert(value);
        }
        Ok(seen.into_values().collect())
    }

    /// Copies per (title, inventor), ordered by title then inventor
    pub fn number_copies(&self) -> AppResult<Vec<CopyCount<'a>>> {
        self.non_empty()?;
        let mut groups: BTreeMap<CopyKey, CopyCount<'a>> = BTreeMap::new();
        for book in self.repository.spellbooks.iter() {
            groups
                .entry(book.copy_key())
                .or_insert(CopyCount {
                    representative: book,
                    count: 0,
                })
                .count += 1;
        }
        Ok(groups.into_values().collect())
    }

    /// Spellbooks whose type equals `kind` ignoring case
    pub fn by_type(&self, kind: &str) -> AppResult<Vec<&'a Spellbook>> {
        self.non_empty()?;
        let wanted = Folded::new(kind);
        let books = self.matching(|b| Folded::new(b.kind()) == wanted);
        if books.is_empty() {
            return Err(AppError::NoSuchType(kind.to_string()));
        }
        Ok(books)
    }

    /// Spellbooks whose inventor contains `inventor` ignoring case
    pub fn by_inventor(&self, inventor: &str) -> AppResult<Vec<&'a Spellbook>> {
        self.non_empty()?;
        let books = self.matching(|b| contains_ignore_case(b.inventor(), inventor));
        if books.is_empty() {
            return Err(AppError::NoSuchInventor(inventor.to_string()));
        }
        Ok(books)
    }

    /// Matching spellbooks sorted by short form, ignoring case
    fn matching(&self, predicate: impl Fn(&Spellbook) -> bool) -> Vec<&'a Spellbook> {
        let mut books: Vec<&'a Spellbook> = self
            .repository
            .spellbooks
            .iter()
            .filter(|b| predicate(*b))
            .collect();
        books.sort_by(|a, b| cmp_ignore_case(&a.short().to_string(), &b.short().to_string()));
        books
    }

    pub fn get(&self, serial: i32) -> AppResult<&'a Spellbook> {
        self.repository.spellbooks.find(serial)
    }

    /// Ids of the students who returned the spellbook, in return order
    pub fn history(&self, serial: i32) -> AppResult<&'a [i32]> {
        let book = self
            .repository
            .spellbooks
            .get(serial)
            .ok_or(AppError::NoSuchSpellbook)?;
        if book.history().is_empty() {
            return Err(AppError::NoSpellbookHistory);
        }
        Ok(book.history())
    }
}
