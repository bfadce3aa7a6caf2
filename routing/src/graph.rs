use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Graph};

pub type VertexId = usize;
pub type EdgeId = usize;

/// A directed, weighted edge. Weights are minutes and never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<L> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub label: L,
}

/// Directed multigraph with a fixed number of vertices `0..vertex_count`.
/// Parallel edges and self-loops are allowed. Edge ids are handed out in insertion order.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<L> {
    inner: Graph<(), Edge<L>, Directed, u32>,
}

impl<L> DirectedWeightedGraph<L> {
    pub fn new(vertex_count: usize) -> Self {
        let mut inner = Graph::with_capacity(vertex_count, vertex_count);
        for _ in 0..vertex_count {
            inner.add_node(());
        }

        Self { inner }
    }

    /// Panics if an endpoint is out of range.
    pub fn add_edge(&mut self, edge: Edge<L>) -> EdgeId {
        debug_assert!(
            edge.weight >= 0.0 && !edge.weight.is_nan(),
            "Edge weights must not be negative, got {} for {} -> {}", edge.weight, edge.from, edge.to
        );

        let (from, to) = (NodeIndex::new(edge.from), NodeIndex::new(edge.to));
        self.inner.add_edge(from, to, edge).index()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Panics if the id was not handed out by this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge<L> {
        &self.inner[EdgeIndex::new(id)]
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> + '_ {
        self.inner.edge_weights()
    }

    /// Ids of all edges leaving `vertex`
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.inner.edges(NodeIndex::new(vertex))
            .map(|edge| edge.id().index())
    }
}
