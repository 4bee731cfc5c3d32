use std::collections::HashMap;

use fastpath_core::models::RoadEdge;

/// One outgoing road as stored in the adjacency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRoad {
    pub target: String,
    pub weight: u32,
}

/// Adjacency view of a road snapshot: node id -> outgoing roads.
///
/// Built fresh for every query and never mutated afterwards. Nodes without
/// outgoing roads are simply absent.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    adjacency: HashMap<String, Vec<OutgoingRoad>>,
    edge_count: usize,
}

impl RoadNetwork {
    /// Group `edges` by source, keeping supply order within each group.
    ///
    /// No validation and no deduplication: parallel edges are all kept.
    pub fn from_edges<'e, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'e RoadEdge>,
    {
        let mut adjacency: HashMap<String, Vec<OutgoingRoad>> = HashMap::new();
        let mut edge_count = 0;

        for edge in edges {
            adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(OutgoingRoad {
                    target: edge.to.clone(),
                    weight: edge.weight,
                });
            edge_count += 1;
        }

        Self {
            adjacency,
            edge_count,
        }
    }

    pub fn outgoing(&self, node: &str) -> &[OutgoingRoad] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lowest-weight road from `from` to `to`. Parallel roads are legal
    /// here, so the first match is not necessarily the one relaxation used.
    pub fn cheapest_road(&self, from: &str, to: &str) -> Option<&OutgoingRoad> {
        self.outgoing(from)
            .iter()
            .filter(|road| road.target == to)
            .min_by_key(|road| road.weight)
    }

    /// Number of nodes with at least one outgoing road.
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str, weight: u32) -> RoadEdge {
        RoadEdge::new(from, to, weight)
    }

    #[test]
    fn groups_by_source_in_supply_order() {
        let edges = vec![edge("A", "C", 240), edge("B", "D", 45), edge("A", "B", 360)];
        let network = RoadNetwork::from_edges(&edges);

        let targets: Vec<&str> = network
            .outgoing("A")
            .iter()
            .map(|r| r.target.as_str())
            .collect();
        assert_eq!(targets, vec!["C", "B"]);
        assert_eq!(network.source_count(), 2);
        assert_eq!(network.edge_count(), 3);
    }

    #[test]
    fn sinks_have_no_outgoing_roads() {
        let edges = vec![edge("A", "B", 1)];
        let network = RoadNetwork::from_edges(&edges);
        assert!(network.outgoing("B").is_empty());
        assert!(network.outgoing("nowhere").is_empty());
    }

    #[test]
    fn parallel_roads_are_kept_and_cheapest_wins() {
        let edges = vec![edge("A", "B", 50), edge("A", "B", 10), edge("A", "B", 30)];
        let network = RoadNetwork::from_edges(&edges);
        assert_eq!(network.outgoing("A").len(), 3);
        assert_eq!(network.cheapest_road("A", "B").map(|r| r.weight), Some(10));
        assert!(network.cheapest_road("B", "A").is_none());
    }
}
