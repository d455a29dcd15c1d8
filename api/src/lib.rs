//! HTTP layer for the LightTrack backend.
//!
//! Exposes the authentication endpoints (register, login, refresh, logout),
//! the JWT middleware guarding the protected routes, and the food, meal and
//! profile endpoints built on top of the core services.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
