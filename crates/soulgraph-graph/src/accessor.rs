//! Read-only neighbor queries over a soul snapshot.
//!
//! These are plain scans over the snapshot slice; no adjacency structure
//! is built or cached. Both functions return souls in snapshot order, not
//! `trusted_by` order; the stats aggregator deliberately uses the other
//! convention (see `stats`).

use soulgraph_core::Soul;

/// Souls that have endorsed `soul`, in snapshot order.
pub fn trusters_of<'a>(soul: &Soul, all: &'a [Soul]) -> Vec<&'a Soul> {
    all.iter().filter(|s| soul.is_endorsed_by(&s.id)).collect()
}

/// Souls that `soul` has endorsed, in snapshot order.
pub fn trustees_of<'a>(soul: &Soul, all: &'a [Soul]) -> Vec<&'a Soul> {
    all.iter().filter(|s| s.is_endorsed_by(&soul.id)).collect()
}
