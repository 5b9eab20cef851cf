//! Soulgraph Graph - Trust-graph analysis
//!
//! Pure, synchronous queries over an immutable soul snapshot: shortest
//! trust paths, bounded-degree neighborhoods, endorsement
//! recommendations, and per-soul trust statistics. Nothing here mutates
//! or caches input state; callers re-snapshot and re-run per query.
//!
//! # Example
//!
//! ```
//! use soulgraph_core::Soul;
//! use soulgraph_graph::find_trust_path;
//!
//! let mut bram = Soul::new("b", "Bram");
//! bram.trusted_by.push("a".to_string()); // Aria endorses Bram
//! let souls = vec![Soul::new("a", "Aria"), bram];
//!
//! let path = find_trust_path(&souls[0], &souls[1], &souls).unwrap();
//! assert_eq!(path.degrees, 1);
//! ```

mod accessor;
mod graph;
mod path;
mod recommend;
mod stats;

pub use accessor::{trustees_of, trusters_of};
pub use graph::{GraphEdge, GraphSummary, NodeId, TrustGraph};
pub use path::{
    degrees_of_separation, find_all_paths_within_degrees, find_trust_path, nearby_connections,
    TrustPath,
};
pub use recommend::{recommended_souls, similar_souls, SoulRecommendation};
pub use stats::{trust_stats, TrustStats};
