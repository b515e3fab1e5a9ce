#![doc = "Districter public API"]
mod error;
mod graph;
mod region;
mod types;

#[doc(inline)]
pub use types::{Tract, TractId};

#[doc(inline)]
pub use graph::GraphStore;

#[doc(inline)]
pub use region::{build_region, Region};

pub use error::PartitionError;
