use std::fmt;

use serde::{Deserialize, Serialize};

use super::TractId;

/// An atomic geographic unit: one census tract with its population count and
/// the ids of the tracts it borders.
///
/// Adjacency is stored by id, not by reference, so a neighbor list may name
/// tracts that were never loaded. The store tolerates that until the id is
/// dereferenced ([`GraphStore::lookup`] fails with `NotFound`), or catches it
/// eagerly via [`GraphStore::validate`].
///
/// [`GraphStore::lookup`]: crate::GraphStore::lookup
/// [`GraphStore::validate`]: crate::GraphStore::validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tract {
    pub id: TractId,
    pub population: u64,
    #[serde(default, rename = "adjacent")]
    pub neighbors: Vec<TractId>,
}

impl Tract {
    /// Construct a tract from its id, population, and neighbor ids.
    pub fn new(
        id: impl Into<TractId>,
        population: u64,
        neighbors: impl IntoIterator<Item = impl Into<TractId>>,
    ) -> Self {
        Self {
            id: id.into(),
            population,
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the number of neighbor relations (degree of the tract).
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl fmt::Display for Tract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Census tract {}. Population: {}", self.id, self.population)
    }
}
