use thiserror::Error;

use crate::{region::Region, types::TractId};

/// Failure taxonomy for region construction.
///
/// Every variant propagates to the caller as-is: the core performs no
/// internal retries and no rollback, so tracts claimed before a failure stay
/// claimed.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A referenced id (seed or neighbor) does not exist in the full tract
    /// mapping. This is a data-integrity defect in the input graph, not a
    /// runtime condition to retry. Distinct from a claimed tract, which
    /// still resolves.
    #[error("tract {0} does not exist in the graph")]
    NotFound(TractId),

    /// The requested seed was already claimed by an earlier region. The
    /// builder never silently picks another seed.
    #[error("seed tract {0} is already claimed")]
    SeedUnavailable(TractId),

    /// The connected component reachable from the seed was fully claimed
    /// before the population target was met. The undersized region is
    /// carried along so a driver can accept it as a leftover fragment.
    #[error("frontier exhausted at population {} (target {})", .region.population(), .target)]
    FrontierExhausted {
        /// Everything claimed before the frontier ran dry, in claim order.
        region: Region,
        /// The population target that could not be reached.
        target: u64,
    },
}
