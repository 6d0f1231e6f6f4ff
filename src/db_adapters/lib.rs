pub mod user_adapter;
pub mod website_adapter;

use core::fmt;
pub use sea_orm::Order;
use sea_orm::{DbErr, SqlErr};

#[derive(Debug, PartialEq)]
pub enum CustomDbErr {
    Duplicate,
    Unimplemented,
}

impl fmt::Display for CustomDbErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomDbErr::Duplicate => write!(f, "Duplicate"),
            CustomDbErr::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}

impl From<&DbErr> for CustomDbErr {
    fn from(value: &DbErr) -> Self {
        match value.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => CustomDbErr::Duplicate,
            _ => CustomDbErr::Unimplemented,
        }
    }
}
