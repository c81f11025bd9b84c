//! Spellbook Archive
//!
//! A line-oriented command simulator for a magical lending library: a catalog
//! of spellbooks imported from CSV collections, a roster of students, and the
//! rentals between them. Commands are read one per line and every command that
//! is recognised produces one tagged response block.

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use archive::Archive;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
