//! Request and response bodies for the HTTP API.

pub mod auth;
pub mod meal;
pub mod user;
