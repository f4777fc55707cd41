//! Intra-/inter-region detection from issuer and recipient locations.

use serde::{Deserialize, Serialize};

use crate::core::PartyLocation;

/// Whether both parties sit in the same state/province.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// Same region. Consumption tax splits into two equal halves.
    IntraRegion,
    /// Different or unknown regions. Consumption tax stays one line.
    #[default]
    InterRegion,
}

/// Compare regions case-insensitively after trimming. A blank region on
/// either side is treated as inter-region.
pub fn determine_jurisdiction(issuer: &PartyLocation, recipient: &PartyLocation) -> Jurisdiction {
    let a = issuer.region.trim();
    let b = recipient.region.trim();
    if a.is_empty() || b.is_empty() {
        return Jurisdiction::InterRegion;
    }
    if a.to_lowercase() == b.to_lowercase() {
        Jurisdiction::IntraRegion
    } else {
        Jurisdiction::InterRegion
    }
}
