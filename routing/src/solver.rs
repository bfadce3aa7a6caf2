use crate::graph::{DirectedWeightedGraph, EdgeId, VertexId};
use dashmap::DashMap;
use log::trace;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// A path through the graph, given as the ids of its edges in travel order.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Result of one Dijkstra run: the best known weight and the last edge of the best path for
/// every vertex reachable from `source`.
#[derive(Debug)]
struct ShortestPathTree {
    source: VertexId,
    weights: Vec<Option<f64>>,
    incoming: Vec<Option<EdgeId>>,
}

impl ShortestPathTree {
    fn compute<L>(graph: &DirectedWeightedGraph<L>, source: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        let mut weights: Vec<Option<f64>> = vec![None; vertex_count];
        let mut incoming: Vec<Option<EdgeId>> = vec![None; vertex_count];

        // Ties are broken by vertex id, which keeps the result stable for a fixed graph
        let mut queue = BinaryHeap::new();
        weights[source] = Some(0.0);
        queue.push(Reverse((OrderedFloat(0.0), source)));

        while let Some(Reverse((OrderedFloat(weight), vertex))) = queue.pop() {
            if weights[vertex].is_some_and(|best| weight > best) {
                // stale queue entry
                continue;
            }

            for edge_id in graph.incident_edges(vertex) {
                let edge = graph.edge(edge_id);
                let candidate = weight + edge.weight;

                // Only strictly better paths replace the current one
                if weights[edge.to].map_or(true, |best| candidate < best) {
                    weights[edge.to] = Some(candidate);
                    incoming[edge.to] = Some(edge_id);
                    queue.push(Reverse((OrderedFloat(candidate), edge.to)));
                }
            }
        }

        Self { source, weights, incoming }
    }

    fn route_to<L>(&self, graph: &DirectedWeightedGraph<L>, target: VertexId) -> Option<RouteInfo> {
        let weight = self.weights[target]?;

        let mut edges = vec![];
        let mut current = target;
        while current != self.source {
            let edge_id = self.incoming[current]?;
            edges.push(edge_id);
            current = graph.edge(edge_id).from;
        }
        edges.reverse();

        Some(RouteInfo { weight, edges })
    }
}

/// Single-source shortest path solver over an immutable graph.
///
/// Shortest path trees are computed lazily and cached per source vertex, so repeated queries
/// from the same origin only walk the tree. The cache is a concurrent map: a `Router` can be
/// shared across threads without further locking.
#[derive(Debug)]
pub struct Router<L> {
    graph: DirectedWeightedGraph<L>,
    trees: DashMap<VertexId, Arc<ShortestPathTree>>,
}

impl<L> Router<L> {
    pub fn new(graph: DirectedWeightedGraph<L>) -> Self {
        Self { graph, trees: DashMap::new() }
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<L> {
        &self.graph
    }

    /// The fastest route from `from` to `to`, or `None` if `to` can't be reached.
    /// A route from a vertex to itself is empty and has weight 0.
    ///
    /// Panics if a vertex is out of range.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<RouteInfo> {
        assert!(
            from < self.graph.vertex_count() && to < self.graph.vertex_count(),
            "Route {} -> {} is outside of the graph with {} vertices", from, to, self.graph.vertex_count()
        );

        if from == to {
            return Some(RouteInfo { weight: 0.0, edges: vec![] });
        }

        self.tree(from).route_to(&self.graph, to)
    }

    fn tree(&self, source: VertexId) -> Arc<ShortestPathTree> {
        if let Some(tree) = self.trees.get(&source) {
            trace!(target: "routing", "Reusing shortest path tree of vertex {}", source);
            return Arc::clone(tree.value());
        }

        // Computed outside of the map's lock. Two threads racing for the same source compute
        // identical trees, only the first one is kept.
        let tree = Arc::new(ShortestPathTree::compute(&self.graph, source));
        trace!(target: "routing", "Computed shortest path tree of vertex {}", source);

        Arc::clone(self.trees.entry(source).or_insert(tree).value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn graph(vertex_count: usize, edges: &[(VertexId, VertexId, f64)]) -> DirectedWeightedGraph<usize> {
        let mut graph = DirectedWeightedGraph::new(vertex_count);
        for (idx, (from, to, weight)) in edges.iter().enumerate() {
            graph.add_edge(Edge { from: *from, to: *to, weight: *weight, label: idx });
        }
        graph
    }

    #[test]
    fn test_shortest_of_two_paths() {
        // 0 -> 1 -> 3 costs 4, 0 -> 2 -> 3 costs 3
        let router = Router::new(graph(4, &[
            (0, 1, 1.0),
            (1, 3, 3.0),
            (0, 2, 2.0),
            (2, 3, 1.0),
        ]));

        let route = router.build_route(0, 3).unwrap();

        assert_eq!(route, RouteInfo { weight: 3.0, edges: vec![2, 3] });
    }

    #[test]
    fn test_parallel_edges_take_the_cheaper_one() {
        let router = Router::new(graph(2, &[(0, 1, 5.0), (0, 1, 2.0), (0, 1, 7.0)]));

        assert_eq!(router.build_route(0, 1), Some(RouteInfo { weight: 2.0, edges: vec![1] }));
    }

    #[test]
    fn test_unreachable() {
        let router = Router::new(graph(3, &[(0, 1, 1.0), (2, 0, 1.0)]));

        assert_eq!(router.build_route(0, 2), None);
        assert_eq!(router.build_route(1, 0), None);
    }

    #[test]
    fn test_same_vertex_is_empty_route() {
        let router = Router::new(graph(2, &[(0, 0, 4.0), (0, 1, 1.0), (1, 0, 1.0)]));

        assert_eq!(router.build_route(0, 0), Some(RouteInfo { weight: 0.0, edges: vec![] }));
    }

    #[test]
    fn test_self_loops_are_never_taken() {
        let router = Router::new(graph(3, &[(0, 0, 1.0), (0, 1, 1.0), (1, 1, 0.5), (1, 2, 1.0)]));

        assert_eq!(router.build_route(0, 2), Some(RouteInfo { weight: 2.0, edges: vec![1, 3] }));
    }

    #[test]
    fn test_zero_weight_edges() {
        let router = Router::new(graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]));

        assert_eq!(router.build_route(0, 2), Some(RouteInfo { weight: 0.0, edges: vec![0, 1] }));
    }

    #[test]
    fn test_repeated_queries_are_cached_and_stable() {
        let router = Router::new(graph(4, &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (0, 3, 10.0),
        ]));

        let first = router.build_route(0, 3);
        let second = router.build_route(0, 3);
        let partial = router.build_route(0, 2);

        assert_eq!(first, second);
        assert_eq!(partial, Some(RouteInfo { weight: 2.0, edges: vec![0, 1] }));
        assert_eq!(router.trees.len(), 1);
    }

    #[test]
    fn test_router_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router<String>>();
    }
}
