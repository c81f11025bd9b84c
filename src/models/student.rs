//! Student (borrower) model

use std::collections::BTreeSet;
use std::fmt;

/// A registered borrower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i32,
    name: String,
    /// Serials currently rented; ordered so display iterates by serial
    current: BTreeSet<i32>,
    /// Serials of completed rentals, in return order
    history: Vec<i32>,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            current: BTreeSet::new(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> &BTreeSet<i32> {
        &self.current
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }

    pub fn is_renting(&self, serial: i32) -> bool {
        self.current.contains(&serial)
    }

    pub fn rent(&mut self, serial: i32) {
        self.current.insert(serial);
    }

    /// Move `serial` from the current rentals to the history.
    /// Returns false and records nothing if it was not rented.
    pub fn give_back(&mut self, serial: i32) -> bool {
        let removed = self.current.remove(&serial);
        if removed {
            self.history.push(serial);
        }
        removed
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
