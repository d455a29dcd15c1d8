//! Domain model for the LightTrack backend

pub mod entities;
