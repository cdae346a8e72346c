//! Tearable Verlet cloth for 2D games.
//!
//! `clothy` provides position-based Verlet particles, distance links
//! relaxed one pass per frame, and a rectangular viewport clamp,
//! composed into a cloth mesh that an external driver steps, renders,
//! and cuts with the pointer.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, pluggable force fields
//! - **Distance links**: index-based, torn at runtime through a pure
//!   point-to-segment predicate
//! - **Cloth meshes**: regular grids with a pinned top row
//! - **Viewport bounds**: radius-aware clamping, pinned or not
//! - **Observable**: monitor step phases via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! The crate performs no I/O and owns no clock; the driver calls
//! [`Simulation::step`] at its own cadence and reads positions back
//! for drawing.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod force;
pub mod particle;
pub mod constraint;
pub mod mesh;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use force::ForceField;
pub use particle::Particle;
pub use constraint::{Boundary, Link};
pub use mesh::Mesh;
pub use simulation::Simulation;
pub use config::MeshConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::SimError;
