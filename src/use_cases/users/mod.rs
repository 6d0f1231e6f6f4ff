pub mod register;
pub mod types;
