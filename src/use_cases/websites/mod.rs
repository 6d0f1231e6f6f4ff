pub mod create;
pub mod get;
pub mod list_mine;
pub mod types;
pub mod url;
pub mod verification;
