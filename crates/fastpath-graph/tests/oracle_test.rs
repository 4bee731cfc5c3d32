use std::collections::HashMap;

use fastpath_core::error::RouteError;
use fastpath_core::models::RoadEdge;
use fastpath_graph::compute_fastest_path;
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_snapshot(rng: &mut StdRng, nodes: usize, roads: usize, max_weight: u32) -> Vec<RoadEdge> {
    (0..roads)
        .map(|_| {
            let from = rng.gen_range(0..nodes);
            let to = rng.gen_range(0..nodes);
            let weight = rng.gen_range(0..=max_weight);
            RoadEdge::new(format!("N{from}"), format!("N{to}"), weight)
        })
        .collect()
}

/// Distances from `source` as computed by petgraph.
fn oracle_distances(edges: &[RoadEdge], source: &str) -> HashMap<String, u64> {
    let mut graph = DiGraph::<String, u64>::new();
    let mut index: HashMap<&str, NodeIndex> = HashMap::new();

    for edge in edges {
        for name in [edge.from.as_str(), edge.to.as_str()] {
            if !index.contains_key(name) {
                index.insert(name, graph.add_node(name.to_string()));
            }
        }
        graph.add_edge(index[edge.from.as_str()], index[edge.to.as_str()], u64::from(edge.weight));
    }

    let Some(&start) = index.get(source) else {
        return HashMap::from([(source.to_string(), 0)]);
    };

    dijkstra(&graph, start, None, |e| *e.weight())
        .into_iter()
        .map(|(node, cost)| (graph[node].clone(), cost))
        .collect()
}

fn assert_route_is_well_formed(edges: &[RoadEdge], source: &str, destination: &str, expected: u64) {
    let route = compute_fastest_path(edges, source, destination).unwrap();

    assert_eq!(route.total_weight, expected, "{source} -> {destination}");
    assert_eq!(route.path.first().map(String::as_str), Some(source));
    assert_eq!(route.path.last().map(String::as_str), Some(destination));
    assert_eq!(route.edges.len() + 1, route.path.len());

    let summed: u64 = route.edges.iter().map(|e| u64::from(e.weight)).sum();
    assert_eq!(summed, route.total_weight);

    for (i, step) in route.edges.iter().enumerate() {
        assert_eq!(step.from, route.path[i]);
        assert_eq!(step.to, route.path[i + 1]);
        assert!(edges.contains(step), "route uses unknown road {step:?}");
    }
}

#[test]
fn matches_petgraph_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..40 {
        let nodes = rng.gen_range(2..20);
        let roads = rng.gen_range(0..nodes * 4);
        let snapshot = random_snapshot(&mut rng, nodes, roads, 500);
        let source = format!("N{}", rng.gen_range(0..nodes));
        let expected = oracle_distances(&snapshot, &source);

        for target in 0..nodes {
            let destination = format!("N{target}");
            match expected.get(&destination) {
                Some(&distance) => {
                    assert_route_is_well_formed(&snapshot, &source, &destination, distance)
                }
                None => {
                    let err = compute_fastest_path(&snapshot, &source, &destination).unwrap_err();
                    assert!(
                        matches!(err, RouteError::NoRouteFound { .. }),
                        "round {round}: expected no route {source} -> {destination}, got {err}"
                    );
                }
            }
        }
    }
}

#[test]
fn matches_petgraph_with_many_zero_weights_and_parallel_roads() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let nodes = rng.gen_range(2..8);
        let snapshot = random_snapshot(&mut rng, nodes, nodes * 6, 3);
        let source = "N0";
        let expected = oracle_distances(&snapshot, source);

        for (destination, &distance) in &expected {
            assert_route_is_well_formed(&snapshot, source, destination, distance);
        }
    }
}
