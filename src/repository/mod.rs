//! Repository layer holding the in-memory registries

pub mod spellbooks;
pub mod students;

/// Main repository struct owning every registry of one archive
#[derive(Debug)]
pub struct Repository {
    pub spellbooks: spellbooks::SpellbooksRepository,
    pub students: students::StudentsRepository,
}

impl Repository {
    /// Create an empty repository whose first student gets `first_student_id`
    pub fn new(first_student_id: i32) -> Self {
        Self {
            spellbooks: spellbooks::SpellbooksRepository::new(),
            students: students::StudentsRepository::new(first_student_id),
        }
    }
}
