//! # Cover Director
//!
//! Assigns tactical cover to combat agents. This crate reads obstacles and
//! the target pose through `cover_world::WorldQuery`, generates cover
//! clusters, and hands out cover points with exclusive reservation.
//!
//! ## Core Components
//!
//! - **cover_pool**: Cluster generation and the pool of unreserved points
//! - **classifier**: Geometric predicates that filter the pool per intent
//! - **selector**: Tie-break rules that pick one candidate
//! - **director**: The request protocol tying the pieces together
//!
//! ## Design Philosophy
//!
//! - **Exclusive**: A point is handed out to at most one agent until released
//! - **Degrade, don't fail**: No candidates means "stay put", not an error
//! - **Stateless queries**: The target pose is read fresh on every request

pub mod classifier;
pub mod cover_pool;
pub mod director;
pub mod error;
pub mod selector;
pub mod snapshot;

pub use classifier::*;
pub use cover_pool::*;
pub use director::*;
pub use error::*;
pub use selector::*;
pub use snapshot::*;
