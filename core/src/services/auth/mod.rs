//! Authentication service: registration, login, session refresh, logout.

pub mod password;
pub mod service;

pub use service::AuthService;
