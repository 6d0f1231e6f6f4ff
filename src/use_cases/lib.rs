use std::fmt::Debug;

pub mod users;
pub mod websites;

#[derive(Debug)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    NotFound(String),            // 404
    Conflict(String),            // 409
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
