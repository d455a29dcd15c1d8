//! # LightTrack Shared
//!
//! Cross-cutting configuration and value types shared by every layer of the
//! LightTrack backend. This crate carries no business logic and performs no I/O.

pub mod config;
pub mod types;
