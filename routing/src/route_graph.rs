use crate::graph::{DirectedWeightedGraph, Edge, VertexId};
use crate::settings::RoutingSettings;
use catalogue::domain::Bus;
use catalogue::TransitCatalogue;
use common::types::StopId;
use log::debug;
use std::sync::Arc;

/// What an edge of the route graph stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeLabel {
    /// Waiting at a stop before boarding any bus there
    Wait { stop_name: Arc<str> },
    /// Staying on `bus_name` for `span_count` consecutive stop-to-stop hops.
    /// A span of 0 is a bus held at a single stop.
    Ride { bus_name: Arc<str>, span_count: usize },
}

impl EdgeLabel {
    pub fn span_count(&self) -> usize {
        match self {
            EdgeLabel::Wait { .. } => 0,
            EdgeLabel::Ride { span_count, .. } => *span_count,
        }
    }
}

pub type RouteGraph = DirectedWeightedGraph<EdgeLabel>;

/// Every stop is split into two vertices: one for arriving there and one for being ready to
/// depart after having waited for a bus.
pub fn arrive_vertex(stop: StopId) -> VertexId {
    2 * stop.index()
}

pub fn depart_vertex(stop: StopId) -> VertexId {
    2 * stop.index() + 1
}

pub fn stop_of_vertex(vertex: VertexId) -> StopId {
    StopId((vertex / 2) as u32)
}

/// Builds the route graph of a catalogue:
/// - `arrive(s) -> depart(s)` waits at every stop
/// - `depart(s_i) -> arrive(s_j)` rides for every pair of positions `i < j` on every bus
/// - `arrive(s) -> arrive(s)` for stops of a bus with a non-zero road distance to themselves
///
/// Ride weights sum the road distances of all hops in between. If any hop has no known road
/// distance, no ride spans it.
pub struct RouteGraphBuilder<'a> {
    catalogue: &'a TransitCatalogue,
    settings: RoutingSettings,
}

impl<'a> RouteGraphBuilder<'a> {
    pub fn new(catalogue: &'a TransitCatalogue, settings: RoutingSettings) -> Self {
        Self { catalogue, settings }
    }

    pub fn build(&self) -> RouteGraph {
        let mut graph = RouteGraph::new(2 * self.catalogue.stop_count());

        self.add_wait_edges(&mut graph);
        for bus in self.catalogue.buses(true) {
            self.add_bus_edges(&mut graph, bus);
        }

        debug!(
            target: "routing",
            "Built route graph with {} vertices and {} edges",
            graph.vertex_count(), graph.edge_count()
        );

        graph
    }

    fn add_wait_edges(&self, graph: &mut RouteGraph) {
        for stop in self.catalogue.stops(true) {
            graph.add_edge(Edge {
                from: arrive_vertex(stop.id),
                to: depart_vertex(stop.id),
                weight: self.settings.wait_time_minutes(),
                label: EdgeLabel::Wait { stop_name: Arc::from(stop.name.as_str()) },
            });
        }
    }

    fn add_bus_edges(&self, graph: &mut RouteGraph, bus: &Bus) {
        let bus_name: Arc<str> = Arc::from(bus.name.as_str());
        let stops = &bus.stops;

        for stop in stops {
            let held_minutes = self.catalogue.find_distance(*stop, *stop)
                .map(|meters| self.settings.velocity.minutes_to_travel_distance(meters));

            if let Some(minutes) = held_minutes.filter(|minutes| *minutes != 0.0) {
                graph.add_edge(Edge {
                    from: arrive_vertex(*stop),
                    to: arrive_vertex(*stop),
                    weight: minutes,
                    label: EdgeLabel::Ride { bus_name: bus_name.clone(), span_count: 0 },
                });
            }
        }

        for from_idx in 0..stops.len() {
            let mut meters = 0.0;

            for to_idx in (from_idx + 1)..stops.len() {
                let Some(hop) = self.catalogue.road_distance(stops[to_idx - 1], stops[to_idx]) else {
                    // Every later stop is behind this hop as well
                    break;
                };
                meters += hop;

                graph.add_edge(Edge {
                    from: depart_vertex(stops[from_idx]),
                    to: arrive_vertex(stops[to_idx]),
                    weight: self.settings.velocity.minutes_to_travel_distance(meters),
                    label: EdgeLabel::Ride { bus_name: bus_name.clone(), span_count: to_idx - from_idx },
                });
            }
        }
    }
}
