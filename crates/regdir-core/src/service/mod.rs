//! Domain services
//!
//! Index discovery and search over the catalog. All outbound HTTP goes
//! through the [`JsonTransport`] seam so tests can substitute it.

mod component_details;
mod component_search;
mod index_prober;
mod index_resolver;
mod recommend;
mod transport;

pub use component_details::*;
pub use component_search::*;
pub use index_prober::*;
pub use index_resolver::*;
pub use recommend::*;
pub use transport::*;
