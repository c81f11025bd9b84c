//! Loan commands

use crate::{error::AppResult, services::Services};

use super::SUCCESS;

/// `RENT <student> <serial>`
pub fn rent(services: &mut Services, student_id: i32, serial: i32) -> AppResult<String> {
    services.loans().rent(student_id, serial)?;
    Ok(SUCCESS.to_string())
}

/// `RELINQUISH <student> <serial>`
pub fn relinquish(services: &mut Services, student_id: i32, serial: i32) -> AppResult<String> {
    services.loans().relinquish(student_id, serial)?;
    Ok(SUCCESS.to_string())
}

/// `RELINQUISH ALL <student>`
pub fn relinquish_all(services: &mut Services, student_id: i32) -> AppResult<String> {
    services.loans().relinquish_all(student_id)?;
    Ok(SUCCESS.to_string())
}
