#![deny(unsafe_code)]
//! Magnet-ball physics core.
//!
//! Simulates a ball on a bounded 2D plane under up to four externally
//! toggled point attractors, with velocity-proportional friction and
//! perfectly elastic boundary reflection. Provides the [`FieldSource`]
//! force model, the [`PhysicsEngine`] integrator with its bounded
//! collision-resolution loop, and the [`PhysicsParams`] configuration
//! surface.

pub mod engine;
pub mod error;
pub mod params;
pub mod source;

pub use engine::PhysicsEngine;
pub use error::SimError;
pub use params::PhysicsParams;
pub use source::{corner_positions, FieldSource};
