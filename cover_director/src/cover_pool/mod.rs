//! Cover Pool module - where cover points come from and which ones are free.
//!
//! - **Clusters**: Four cover points generated around each obstacle
//! - **Registry**: Every cluster ever generated, for lookups by point or obstacle
//! - **Pool**: The points nobody currently holds

mod cluster;
mod pool;
mod registry;

pub use cluster::*;
pub use pool::*;
pub use registry::*;
