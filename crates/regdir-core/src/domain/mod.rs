//! Domain entities

mod component;
mod index_item;
mod registry;

pub use component::*;
pub use index_item::*;
pub use registry::*;
