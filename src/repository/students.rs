//! Students repository (in-memory registry)

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::Student,
};

/// Registered students keyed by id, with the id sequence
#[derive(Debug)]
pub struct StudentsRepository {
    students: IndexMap<i32, Student>,
    /// `None` once the id range is used up
    next_id: Option<i32>,
}

impl StudentsRepository {
    pub fn new(first_id: i32) -> Self {
        Self {
            students: IndexMap::new(),
            next_id: Some(first_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.students.contains_key(&id)
    }

    pub fn get(&self, id: i32) -> Option<&Student> {
        self.students.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut Student> {
        self.students.get_mut(&id)
    }

    /// Get student by id, distinguishing an empty registry from a missing id
    pub fn find(&self, id: i32) -> AppResult<&Student> {
        if self.students.is_empty() {
            return Err(AppError::NoStudents);
        }
        self.students.get(&id).ok_or(AppError::NoSuchStudent)
    }

    pub fn find_mut(&mut self, id: i32) -> AppResult<&mut Student> {
        if self.students.is_empty() {
            return Err(AppError::NoStudents);
        }
        self.students.get_mut(&id).ok_or(AppError::NoSuchStudent)
    }

    /// Register a student under the next id in sequence
    pub fn create(&mut self, name: &str) -> AppResult<&Student> {
        let id = self.next_id.ok_or(AppError::StudentIdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(self
            .students
            .entry(id)
            .or_insert_with(|| Student::new(id, name)))
    }
}
