use ahash::AHashSet;
use tracing::{debug, trace};

use crate::{
    error::PartitionError,
    graph::GraphStore,
    region::Region,
    types::TractId,
};

/// Grow one contiguous region from `seed` by greedy frontier expansion,
/// claiming tracts from `store` until the running population strictly
/// exceeds `target`.
///
/// The frontier is an unordered set, so claim order across runs is not
/// deterministic. Contiguity still holds: every claimed tract entered the
/// frontier as the neighbor of an earlier-claimed one. The returned region
/// always carries a population of at least `target`, overshooting by at most
/// the population of the tract that crossed the threshold; no trimming.
///
/// Fails with [`PartitionError::NotFound`] if `seed` or any dereferenced
/// neighbor id is missing from the store, [`PartitionError::SeedUnavailable`]
/// if `seed` was already claimed, and [`PartitionError::FrontierExhausted`]
/// if the seed's connected component runs out below the target. Claims made
/// before a failure are permanent; nothing returns to the pool.
pub fn build_region(
    store: &mut GraphStore,
    seed: &TractId,
    target: u64,
) -> Result<Region, PartitionError> {
    let seed_tract = store.lookup(seed)?.clone();
    if !store.claim(seed) {
        return Err(PartitionError::SeedUnavailable(seed.clone()));
    }

    debug!(seed = %seed, target, "growing region");

    let mut frontier: AHashSet<TractId> = seed_tract.neighbors.iter().cloned().collect();
    let mut region = Region::new();
    region.push(seed_tract);

    while region.population() <= target {
        // An empty frontier means the whole component is claimed; stop and
        // report instead of spinning.
        let Some(id) = take_arbitrary(&mut frontier) else {
            debug!(population = region.population(), target, "frontier exhausted");
            return Err(PartitionError::FrontierExhausted { region, target });
        };

        // Dangling neighbor references are a configuration defect; surface
        // them rather than skip them.
        let tract = store.lookup(&id)?.clone();

        if !store.claim(&id) {
            continue; // already claimed, by this or an earlier region
        }

        trace!(tract = %id, population = tract.population, "claimed");
        frontier.extend(tract.neighbors.iter().cloned());
        region.push(tract);
    }

    debug!(population = region.population(), tracts = region.len(), "region complete");
    Ok(region)
}

/// Remove and return one element of the frontier, in whatever order the set
/// happens to yield.
fn take_arbitrary(frontier: &mut AHashSet<TractId>) -> Option<TractId> {
    let id = frontier.iter().next()?.clone();
    frontier.remove(&id);
    Some(id)
}
