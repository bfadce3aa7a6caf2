use crate::errors::RoutingError;
use crate::itinerary::{Itinerary, RouteItem};
use crate::graph::Edge;
use crate::route_graph::{arrive_vertex, stop_of_vertex, EdgeLabel, RouteGraph, RouteGraphBuilder};
use crate::settings::RoutingSettings;
use crate::solver::Router;
use catalogue::TransitCatalogue;
use common::types::errors::UnknownStopError;
use common::types::StopId;
use hashbrown::HashMap;
use log::debug;

/// Answers fastest-route queries between named stops.
///
/// Holds its own snapshot of the catalogue's network: the route graph is built once on
/// construction and never changes. Build a new router if the catalogue or the settings change.
#[derive(Debug)]
pub struct TransportRouter {
    stop_ids_by_name: HashMap<String, StopId>,
    // index is the StopId
    stop_names: Vec<String>,
    router: Router<EdgeLabel>,
}

impl TransportRouter {
    pub fn new(settings: RoutingSettings, catalogue: &TransitCatalogue) -> Self {
        let graph = RouteGraphBuilder::new(catalogue, settings).build();

        let stop_ids_by_name = catalogue.stops(true)
            .map(|stop| (stop.name.clone(), stop.id))
            .collect();
        let stop_names = catalogue.stops(true)
            .map(|stop| stop.name.clone())
            .collect();

        Self { stop_ids_by_name, stop_names, router: Router::new(graph) }
    }

    pub fn graph(&self) -> &RouteGraph {
        self.router.graph()
    }

    /// The fastest itinerary from `from` to `to`. `Ok(None)` if `to` can't be reached.
    pub fn build_optimized_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, RoutingError> {
        let from_id = self.stop_id(from)?;
        let to_id = self.stop_id(to)?;

        let Some(route) = self.router.build_route(arrive_vertex(from_id), arrive_vertex(to_id)) else {
            debug!(target: "routing", "No route from '{}' to '{}'", from, to);
            return Ok(None);
        };

        let items = route.edges.iter()
            .map(|edge_id| self.item(self.graph().edge(*edge_id)))
            .collect();

        Ok(Some(Itinerary { total_time: route.weight, items }))
    }

    /// Edges spanning no hop are spent at a single stop and read as waiting there.
    fn item(&self, edge: &Edge<EdgeLabel>) -> RouteItem {
        match &edge.label {
            EdgeLabel::Wait { stop_name } => RouteItem::Wait {
                stop_name: stop_name.to_string(),
                time: edge.weight,
            },
            EdgeLabel::Ride { span_count: 0, .. } => RouteItem::Wait {
                stop_name: self.stop_names[stop_of_vertex(edge.from).index()].clone(),
                time: edge.weight,
            },
            EdgeLabel::Ride { bus_name, span_count } => RouteItem::Bus {
                bus: bus_name.to_string(),
                span_count: *span_count,
                time: edge.weight,
            },
        }
    }

    fn stop_id(&self, name: &str) -> Result<StopId, UnknownStopError> {
        self.stop_ids_by_name.get(name)
            .copied()
            .ok_or_else(|| UnknownStopError(name.to_string()))
    }
}
