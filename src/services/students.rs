//! Student registration and rental-history service

use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{cmp_ignore_case, CopyKey, Spellbook, Student},
    repository::Repository,
};

pub struct StudentsService<'a> {
    repository: &'a mut Repository,
}

impl<'a> StudentsService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Register a student under the next free id
    pub fn add_student(&mut self, name: &str) -> AppResult<&Student> {
        let student = self.repository.students.create(name).map_err(|e| {
            tracing::warn!("Cannot register student {}: {}", name, e);
            e
        })?;
        tracing::info!("Registered student {}", student.id());
        Ok(student)
    }

    pub fn get(&self, id: i32) -> AppResult<&Student> {
        self.repository.students.find(id)
    }

    /// Spellbooks the student is currently renting, ascending by serial
    pub fn current_spellbooks(&self, id: i32) -> AppResult<Vec<&Spellbook>> {
        let student = self.repository.students.find(id)?;
        if student.current().is_empty() {
            return Err(AppError::NotRenting);
        }
        Ok(self.resolve(student.current().iter().copied()))
    }

    /// Spellbooks the student has returned, in return order
    pub fn history(&self, id: i32) -> AppResult<Vec<&Spellbook>> {
        let student = self.repository.students.find(id)?;
        if student.history().is_empty() {
            return Err(AppError::NoStudentHistory);
        }
        Ok(self.resolve(student.history().iter().copied()))
    }

    fn resolve(&self, serials: impl Iterator<Item = i32>) -> Vec<&Spellbook> {
        serials
            .filter_map(|serial| self.repository.spellbooks.get(serial))
            .collect()
    }

    /// Spellbooks (by title and inventor, ignoring case) found in the history
    /// of every listed student. Ids must be distinct.
    pub fn common(&self, ids: &[i32]) -> AppResult<Vec<&Spellbook>> {
        let students = &self.repository.students;
        let spellbooks = &self.repository.spellbooks;

        if students.is_empty() {
            return Err(AppError::NoStudents);
        }
        if spellbooks.is_empty() {
            return Err(AppError::NoSpellbooks);
        }

        let mut common: Option<HashSet<CopyKey>> = None;
        for &id in ids {
            let student = students.get(id).ok_or(AppError::NoSuchStudent)?;
            let keys: HashSet<CopyKey> = student
                .history()
                .iter()
                .filter_map(|&serial| spellbooks.get(serial))
                .map(Spellbook::copy_key)
                .collect();
            common = Some(match common {
                Some(mut acc) => {
                    acc.retain(|key| keys.contains(key));
                    acc
                }
                None => keys,
            });
        }

        // First catalogued copy stands for each shared title
        let mut remaining = common.unwrap_or_default();
        let mut books: Vec<&Spellbook> = spellbooks
            .iter()
            .filter(|book| remaining.remove(&book.copy_key()))
            .collect();
        if books.is_empty() {
            return Err(AppError::NoCommonSpellbooks);
        }

        books.sort_by(|a, b| {
            cmp_ignore_case(&a.short().to_string(), &b.short().to_string())
                .then_with(|| a.copy_key().cmp(&b.copy_key()))
        });
        Ok(books)
    }
}
