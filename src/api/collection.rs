//! Collection import/export commands

use std::path::Path;

use crate::{error::AppResult, services::Services};

use super::SUCCESS;

/// `ADD SPELLBOOK <file> <serial>`
pub fn add_spellbook(services: &mut Services, file: &str, serial: i32) -> AppResult<String> {
    let mut collection = services.collection();
    let book = collection.add_spellbook(Path::new(file), serial)?;
    Ok(format!("Successfully added: {}.", book.short()))
}

/// `ADD COLLECTION <file>`
pub fn add_collection(services: &mut Services, file: &str) -> AppResult<String> {
    let added = services.collection().add_collection(Path::new(file))?;
    Ok(match added {
        0 => "No spellbooks have been added to the system.".to_string(),
        1 => "1 spellbook successfully added.".to_string(),
        n => format!("{} spellbooks successfully added.", n),
    })
}

/// `SAVE COLLECTION <file>`
pub fn save_collection(services: &mut Services, file: &str, header: &str) -> AppResult<String> {
    services.collection().save_collection(Path::new(file), header)?;
    Ok(SUCCESS.to_string())
}
