//! Loan management service

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

pub struct LoansService<'a> {
    repository: &'a mut Repository,
}

impl<'a> LoansService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Lend a spellbook to a student
    pub fn rent(&mut self, student_id: i32, serial: i32) -> AppResult<()> {
        let Repository { spellbooks, students } = &mut *self.repository;

        let student = students.find_mut(student_id)?;
        let book = spellbooks.find_mut(serial)?;
        if !book.is_available() {
            return Err(AppError::SpellbookUnavailable);
        }

        book.set_rented_by(Some(student_id));
        student.rent(serial);
        tracing::debug!("Spellbook {} rented by {}", serial, student_id);
        Ok(())
    }

    /// Return a spellbook the student is currently renting
    pub fn relinquish(&mut self, student_id: i32, serial: i32) -> AppResult<()> {
        let Repository { spellbooks, students } = &mut *self.repository;

        let student = students.find_mut(student_id)?;
        let book = spellbooks.find_mut(serial)?;
        if !student.is_renting(serial) || book.rented_by() != Some(student_id) {
            return Err(AppError::UnableToReturn);
        }

        student.give_back(serial);
        book.set_rented_by(None);
        book.add_history(student_id);
        tracing::debug!("Spellbook {} returned by {}", serial, student_id);
        Ok(())
    }

    /// Return every spellbook the student is renting, ascending by serial.
    /// Returns how many were returned.
    pub fn relinquish_all(&mut self, student_id: i32) -> AppResult<usize> {
        let Repository { spellbooks, students } = &mut *self.repository;

        let student = students.find_mut(student_id)?;
        let serials: Vec<i32> = student.current().iter().copied().collect();

        let mut returned = 0;
        for serial in serials {
            let Some(book) = spellbooks.get_mut(serial) else {
                continue;
            };
            if book.rented_by() == Some(student_id) {
                student.give_back(serial);
                book.set_rented_by(None);
                book.add_history(student_id);
                returned += 1;
            }
        }

        tracing::debug!("Student {} returned {} spellbooks", student_id, returned);
        Ok(returned)
    }
}
