pub mod document;
pub mod user;
