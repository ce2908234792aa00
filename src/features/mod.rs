pub mod assets;
pub mod auth;
pub mod categories;
