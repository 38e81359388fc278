//! # Cover World
//!
//! World data consumed by the cover director: obstacles, cover points,
//! tactical intents, the target pose and tuning configuration.
//! This crate holds no allocation logic; it is the shared vocabulary between
//! the host game and `cover_director`.

pub mod config;
pub mod entities;
pub mod geometry;
pub mod mechanics;
pub mod world_state;

pub use config::*;
pub use entities::*;
pub use geometry::*;
pub use mechanics::*;
pub use world_state::*;
