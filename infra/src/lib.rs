//! # LightTrack Infrastructure
//!
//! PostgreSQL implementations of the `lt_core` repository traits, plus
//! connection pool construction.

pub mod database;
