//! Domain entities

pub mod food;
pub mod meal;
pub mod nutrition;
pub mod token;
pub mod user;
