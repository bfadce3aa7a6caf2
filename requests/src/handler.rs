use crate::errors::RequestError;
use crate::types::input::{Document, StatRequest};
use crate::types::output::StatResponse;
use catalogue::TransitCatalogue;
use log::debug;
use routing::errors::RoutingError;
use routing::settings::RoutingSettings;
use routing::TransportRouter;

/// Builds the router for a document, but only if the document asks for routes at all.
pub fn build_router(document: &Document, catalogue: &TransitCatalogue) -> Result<Option<TransportRouter>, RequestError> {
    let needs_router = document.stat_requests.iter()
        .any(|request| matches!(request, StatRequest::Route { .. }));
    if !needs_router {
        return Ok(None);
    }

    let input = document.routing_settings.ok_or(RequestError::MissingRoutingSettings)?;
    let settings = RoutingSettings::new(input.bus_wait_time, input.bus_velocity)?;

    Ok(Some(TransportRouter::new(settings, catalogue)))
}

/// Answers stat requests against a loaded catalogue.
pub struct RequestHandler<'a> {
    catalogue: &'a TransitCatalogue,
    router: Option<TransportRouter>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransitCatalogue, router: Option<TransportRouter>) -> Self {
        Self { catalogue, router }
    }

    /// Anything that can't be found is a regular "not found" answer. Only a route request
    /// without a router is an error.
    pub fn answer(&self, request: &StatRequest) -> Result<StatResponse, RequestError> {
        debug!(target: "requests", "Answering {:?}", request);

        let response = match request {
            StatRequest::Bus { id, name } => self.bus_stat(*id, name),
            StatRequest::Stop { id, name } => self.stop_stat(*id, name),
            StatRequest::Route { id, from, to } => self.route_stat(*id, from, to)?,
        };

        Ok(response)
    }

    fn bus_stat(&self, request_id: i64, name: &str) -> StatResponse {
        match self.catalogue.bus_info(name) {
            Some(info) => StatResponse::Bus {
                request_id,
                stop_count: info.stop_count,
                unique_stop_count: info.unique_stop_count,
                route_length: info.distance.route_length,
                curvature: info.distance.route_curvature,
            },
            None => StatResponse::not_found(request_id),
        }
    }

    fn stop_stat(&self, request_id: i64, name: &str) -> StatResponse {
        match self.catalogue.find_buses_for_stop(name) {
            Some(buses) => StatResponse::Stop {
                request_id,
                buses: buses.into_iter().map(str::to_string).collect(),
            },
            None => StatResponse::not_found(request_id),
        }
    }

    fn route_stat(&self, request_id: i64, from: &str, to: &str) -> Result<StatResponse, RequestError> {
        let router = self.router.as_ref().ok_or(RequestError::MissingRoutingSettings)?;

        let response = match router.build_optimized_route(from, to) {
            Ok(Some(itinerary)) => StatResponse::Route {
                request_id,
                total_time: itinerary.total_time,
                items: itinerary.items,
            },
            Ok(None) | Err(RoutingError::UnknownStop(_)) => StatResponse::not_found(request_id),
            Err(err) => return Err(err.into()),
        };

        Ok(response)
    }
}
