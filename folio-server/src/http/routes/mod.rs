//! Route handlers organized by page

pub mod articles;
pub mod assets;
pub mod health;
