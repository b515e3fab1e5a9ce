use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::{
    error::PartitionError,
    types::{Tract, TractId},
};

/// Holds every tract in the problem plus the pool of ids not yet assigned to
/// any region.
///
/// The tract mapping is immutable once loaded. The unclaimed pool starts as
/// the full id set and shrinks monotonically: an id removed by [`claim`]
/// never re-enters the pool, so a tract belongs to at most one region ever.
/// Repeated region builds must share one store for that to hold globally.
///
/// [`claim`]: GraphStore::claim
#[derive(Debug, Default)]
pub struct GraphStore {
    tracts: AHashMap<TractId, Arc<Tract>>,
    unclaimed: AHashSet<TractId>,
}

impl GraphStore {
    /// Construct a store from fully materialized tracts.
    /// Every id starts unclaimed. A duplicated id keeps the last tract seen.
    pub fn new(tracts: impl IntoIterator<Item = Tract>) -> Self {
        let tracts: AHashMap<TractId, Arc<Tract>> = tracts
            .into_iter()
            .map(|tract| (tract.id.clone(), Arc::new(tract)))
            .collect();
        let unclaimed = tracts.keys().cloned().collect();
        Self { tracts, unclaimed }
    }

    /// Get the number of tracts in the full mapping.
    #[inline] pub fn len(&self) -> usize { self.tracts.len() }

    /// Check whether the store holds no tracts at all.
    #[inline] pub fn is_empty(&self) -> bool { self.tracts.is_empty() }

    /// Check whether an id exists in the full mapping, claimed or not.
    #[inline] pub fn contains(&self, id: &TractId) -> bool { self.tracts.contains_key(id) }

    /// Check whether an id is still in the unclaimed pool.
    #[inline] pub fn is_unclaimed(&self, id: &TractId) -> bool { self.unclaimed.contains(id) }

    /// Get the number of tracts already claimed by regions.
    #[inline] pub fn claimed_count(&self) -> usize { self.tracts.len() - self.unclaimed.len() }

    /// Total population across all tracts, claimed or not.
    pub fn total_population(&self) -> u64 {
        self.tracts.values().map(|tract| tract.population).sum()
    }

    /// Get an iterator over all tracts in the mapping, in arbitrary order.
    pub fn tracts(&self) -> impl Iterator<Item = &Arc<Tract>> {
        self.tracts.values()
    }

    /// Resolve an id against the full mapping.
    ///
    /// Fails with [`PartitionError::NotFound`] only when the id was never
    /// loaded; a claimed tract still resolves.
    pub fn lookup(&self, id: &TractId) -> Result<&Arc<Tract>, PartitionError> {
        self.tracts
            .get(id)
            .ok_or_else(|| PartitionError::NotFound(id.clone()))
    }

    /// Try to remove an id from the unclaimed pool, as one check-and-remove
    /// step.
    ///
    /// Returns `true` on success. Returns `false`, never an error, when the
    /// id was already claimed or was never in the pool, so call sites can
    /// treat a lost claim as an ordinary skip.
    pub fn claim(&mut self, id: &TractId) -> bool {
        self.unclaimed.remove(id)
    }

    /// Read-only view of the unclaimed pool. Empty means partitioning is
    /// complete.
    #[inline] pub fn remaining(&self) -> &AHashSet<TractId> { &self.unclaimed }

    /// Eagerly check every neighbor reference against the full mapping,
    /// surfacing the first dangling id as [`PartitionError::NotFound`].
    ///
    /// Optional: the region builder also surfaces dangling ids lazily when
    /// it dereferences them.
    pub fn validate(&self) -> Result<(), PartitionError> {
        for tract in self.tracts.values() {
            for id in &tract.neighbors {
                if !self.tracts.contains_key(id) {
                    return Err(PartitionError::NotFound(id.clone()));
                }
            }
        }
        Ok(())
    }
}
