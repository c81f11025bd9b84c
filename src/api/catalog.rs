//! Catalog query commands

use crate::{error::AppResult, services::Services};

use super::{lines, render_spellbooks};

/// `LIST ALL [LONG]`
pub fn list_all(services: &Services, long: bool) -> AppResult<String> {
    let books = services.catalog().list_all()?;
    Ok(render_spellbooks(&books, long))
}

/// `LIST AVAILABLE [LONG]`
pub fn list_available(services: &Services, long: bool) -> AppResult<String> {
    let books = services.catalog().list_available()?;
    Ok(render_spellbooks(&books, long))
}

/// `LIST TYPES`
pub fn list_types(services: &Services) -> AppResult<String> {
    Ok(lines(services.catalog().list_types()?))
}

/// `LIST INVENTORS`
pub fn list_inventors(services: &Services) -> AppResult<String> {
    Ok(lines(services.catalog().list_inventors()?))
}

/// `NUMBER COPIES`
pub fn number_copies(services: &Services) -> AppResult<String> {
    Ok(lines(services.catalog().number_copies()?))
}

/// `TYPE <type>`
pub fn by_type(services: &Services, kind: &str) -> AppResult<String> {
    let books = services.catalog().by_type(kind)?;
    Ok(render_spellbooks(&books, false))
}

/// `INVENTOR <inventor>`
pub fn by_inventor(services: &Services, inventor: &str) -> AppResult<String> {
    let books = services.catalog().by_inventor(inventor)?;
    Ok(render_spellbooks(&books, false))
}

/// `SPELLBOOK <serial> [LONG]`
pub fn spellbook(services: &Services, serial: i32, long: bool) -> AppResult<String> {
    let book = services.catalog().get(serial)?;
    Ok(render_spellbooks(&[book], long))
}

/// `SPELLBOOK HISTORY <serial>`
pub fn spellbook_history(services: &Services, serial: i32) -> AppResult<String> {
    Ok(lines(services.catalog().history(serial)?))
}
