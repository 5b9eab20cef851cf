//! Per-soul trust summary statistics.

use soulgraph_core::Soul;
use std::collections::HashSet;

/// Summary of one soul's position in the trust graph.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrustStats {
    /// Souls that endorse the current soul, in endorsement order.
    ///
    /// Resolved from the soul's own `trusted_by` list, so the ordering
    /// convention differs from the accessor functions (snapshot order)
    /// and duplicate endorsements show up per occurrence.
    pub trusted_by: Vec<Soul>,
    /// Souls the current soul endorses, in snapshot order.
    pub trusting: Vec<Soul>,
    /// Souls that endorse the current soul and are endorsed by it.
    pub mutual_trust: Vec<Soul>,
    /// Sum of endorsers' trust scores.
    pub trust_influence: u64,
}

/// Computes the four-field trust summary for a soul.
pub fn trust_stats(current: &Soul, all: &[Soul]) -> TrustStats {
    let trusted_by: Vec<Soul> = current
        .trusted_by
        .iter()
        .filter_map(|id| all.iter().find(|s| &s.id == id))
        .cloned()
        .collect();

    let trusting: Vec<Soul> = all
        .iter()
        .filter(|s| s.is_endorsed_by(&current.id))
        .cloned()
        .collect();

    let trusting_ids: HashSet<&str> = trusting.iter().map(|s| s.id.as_str()).collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mutual_trust: Vec<Soul> = trusted_by
        .iter()
        .filter(|s| seen.insert(s.id.as_str()) && trusting_ids.contains(s.id.as_str()))
        .cloned()
        .collect();

    let trust_influence = trusted_by.iter().map(|s| s.trust_score as u64).sum();

    TrustStats {
        trusted_by,
        trusting,
        mutual_trust,
        trust_influence,
    }
}
