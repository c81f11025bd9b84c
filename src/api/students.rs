//! Student commands

use crate::{
    error::{AppError, AppResult},
    services::Services,
};

use super::{render_spellbooks, CommonIds, SUCCESS};

/// `ADD STUDENT <name>`
pub fn add_student(services: &mut Services, name: &str) -> AppResult<String> {
    services.students().add_student(name)?;
    Ok(SUCCESS.to_string())
}

/// `STUDENT <id>`
pub fn student(services: &mut Services, id: i32) -> AppResult<String> {
    Ok(services.students().get(id)?.to_string())
}

/// `STUDENT SPELLBOOKS <id>`
pub fn student_spellbooks(services: &mut Services, id: i32) -> AppResult<String> {
    let students = services.students();
    let books = students.current_spellbooks(id)?;
    Ok(render_spellbooks(&books, false))
}

/// `STUDENT HISTORY <id>`
pub fn student_history(services: &mut Services, id: i32) -> AppResult<String> {
    let students = services.students();
    let books = students.history(id)?;
    Ok(render_spellbooks(&books, false))
}

/// `COMMON <id> <id> ...`
pub fn common(services: &mut Services, ids: &CommonIds) -> AppResult<String> {
    let ids = match ids {
        CommonIds::Ids(ids) => ids,
        CommonIds::Duplicate => return Err(AppError::DuplicateStudents),
        CommonIds::Unparseable => return Err(AppError::NoSuchStudent),
    };
    let students = services.students();
    let books = students.common(ids)?;
    Ok(render_spellbooks(&books, false))
}
