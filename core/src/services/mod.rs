//! Business services

pub mod auth;
pub mod meal;
pub mod profile;
pub mod token;
