use std::{fmt, sync::Arc};

use crate::types::{Tract, TractId};

/// A contiguous district under construction: tracts in claim order plus a
/// running population total, maintained incrementally on every push.
///
/// Regions grow only inside [`build_region`] and are frozen by convention
/// once returned.
///
/// [`build_region`]: crate::build_region
#[derive(Debug, Clone, Default)]
pub struct Region {
    tracts: Vec<Arc<Tract>>,
    population: u64,
}

impl Region {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a tract and fold its population into the running total.
    pub(crate) fn push(&mut self, tract: Arc<Tract>) {
        self.population += tract.population;
        self.tracts.push(tract);
    }

    /// Sum of the populations of every tract claimed so far.
    #[inline] pub fn population(&self) -> u64 { self.population }

    /// Get the number of tracts in the region.
    #[inline] pub fn len(&self) -> usize { self.tracts.len() }

    /// Check whether the region holds no tracts yet.
    #[inline] pub fn is_empty(&self) -> bool { self.tracts.is_empty() }

    /// Tracts in claim order, the seed first.
    #[inline] pub fn tracts(&self) -> &[Arc<Tract>] { &self.tracts }

    /// Get an iterator over member ids in claim order.
    pub fn ids(&self) -> impl Iterator<Item = &TractId> {
        self.tracts.iter().map(|tract| &tract.id)
    }

    /// Check whether a tract belongs to this region.
    /// Linear scan; regions stay small relative to the full graph.
    pub fn contains(&self, id: &TractId) -> bool {
        self.tracts.iter().any(|tract| &tract.id == id)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "District population: {}. {} tracts included",
            self.population,
            self.tracts.len()
        )
    }
}
