//! Catalog and snapshot stores
//!
//! Both are flat JSON arrays read once at process start and never written back.

mod snapshot;
mod sort;
mod store;

pub use snapshot::*;
pub use sort::*;
pub use store::*;
