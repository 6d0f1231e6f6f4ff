pub mod consume;
pub mod issue;
pub mod types;
