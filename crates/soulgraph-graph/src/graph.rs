//! Materialized trust-graph index.
//!
//! The TrustGraph wraps petgraph and adds an id index for fast lookups.
//! It is built once per snapshot from the denormalized `trusted_by`
//! lists and serves the summary/export side of the system. The query
//! functions in `path`, `recommend`, and `stats` intentionally scan the
//! raw snapshot instead: their ordering contracts depend on snapshot
//! order, which an index must not reorder.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use soulgraph_core::Soul;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// The endorsement graph over a soul snapshot.
///
/// Edges run `endorser -> endorsed`. Duplicate entries in a soul's
/// `trusted_by` collapse to a single edge; ids missing from the snapshot
/// are dropped with a warning.
#[derive(Debug, Default)]
pub struct TrustGraph {
    graph: DiGraph<Soul, ()>,

    /// Maps soul ids to graph node indexes.
    id_index: HashMap<String, NodeId>,
}

impl TrustGraph {
    /// Builds the graph from an ordered soul snapshot.
    pub fn from_snapshot(souls: &[Soul]) -> Self {
        let mut graph = DiGraph::new();
        let mut id_index = HashMap::new();

        for soul in souls {
            let index = graph.add_node(soul.clone());
            id_index.insert(soul.id.clone(), index);
        }

        for soul in souls {
            let to = id_index[&soul.id];
            for endorser in &soul.trusted_by {
                match id_index.get(endorser) {
                    Some(&from) => {
                        if graph.find_edge(from, to).is_none() {
                            graph.add_edge(from, to, ());
                        }
                    }
                    None => {
                        warn!(soul = %soul.id, endorser = %endorser, "dangling endorser id");
                    }
                }
            }
        }

        debug!(
            souls = graph.node_count(),
            endorsements = graph.edge_count(),
            "trust graph built"
        );

        Self { graph, id_index }
    }

    /// Gets a soul by its string id.
    pub fn get_by_id(&self, id: &str) -> Option<&Soul> {
        let index = self.id_index.get(id)?;
        self.graph.node_weight(*index)
    }

    /// Gets the node index for a soul id.
    pub fn get_index(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Souls that endorse the given soul.
    pub fn endorsers_of(&self, id: &str) -> Vec<&Soul> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Souls the given soul endorses.
    pub fn endorsed_by(&self, id: &str) -> Vec<&Soul> {
        self.neighbors(id, Direction::Outgoing)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&Soul> {
        let Some(&index) = self.id_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(index, direction)
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    /// Returns the number of souls.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of distinct endorsements.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all souls.
    pub fn souls(&self) -> impl Iterator<Item = &Soul> {
        self.graph.node_weights()
    }

    /// Returns all edges as id pairs for export/visualization.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .filter_map(|edge_ref| {
                let source = self.graph.node_weight(edge_ref.source())?.id.clone();
                let target = self.graph.node_weight(edge_ref.target())?.id.clone();
                Some(GraphEdge { source, target })
            })
            .collect()
    }

    /// Returns graph-wide summary statistics.
    pub fn summary(&self) -> GraphSummary {
        let mutual = self
            .graph
            .edge_references()
            .filter(|e| self.graph.find_edge(e.target(), e.source()).is_some())
            .count();

        let isolated = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_undirected(idx)
                    .next()
                    .is_none()
            })
            .count();

        GraphSummary {
            souls: self.node_count(),
            endorsements: self.edge_count(),
            mutual_pairs: mutual / 2,
            isolated,
        }
    }
}

/// A directed endorsement edge for graph export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Graph statistics for the info command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphSummary {
    pub souls: usize,
    pub endorsements: usize,
    /// Pairs of souls that endorse each other.
    pub mutual_pairs: usize,
    /// Souls with no endorsements in either direction.
    pub isolated: usize,
}
