//! User profile and body metrics.

pub mod service;

pub use service::{BmiCategory, BodyMassIndex, CalorieTarget, ProfileService};

#[cfg(test)]
mod tests;
