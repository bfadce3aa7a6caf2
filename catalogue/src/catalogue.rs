use crate::domain::{Bus, BusInfo, RouteDistanceInfo, Stop};
use crate::errors::CatalogueError;
use common::types::errors::UnknownStopError;
use common::types::{BusId, Coordinates, StopId};
use common::util::distance::great_circle_distance;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::{debug, trace};

/// Append-only store of stops, buses and directed road distances.
///
/// Stops and buses live in insertion-ordered vectors and are referenced everywhere else by
/// their index ([StopId], [BusId]). Nothing is ever removed, so ids stay valid for the
/// lifetime of the catalogue.
#[derive(Debug, Default)]
pub struct TransitCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_ids_by_name: HashMap<String, StopId>,
    bus_ids_by_name: HashMap<String, BusId>,
    // index is the StopId
    buses_by_stop: Vec<HashSet<BusId>>,
    // <(from, to), meters>
    distances: HashMap<(StopId, StopId), f64>,
}

impl TransitCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> Result<StopId, CatalogueError> {
        if self.stop_ids_by_name.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }

        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { id, name: name.to_string(), coordinates });
        self.stop_ids_by_name.insert(name.to_string(), id);
        self.buses_by_stop.push(HashSet::new());

        trace!(target: "catalogue", "Added stop '{}' as {}", name, id);
        Ok(id)
    }

    /// Adds a bus driving along the named stops. If the route is not a roundtrip, the declared
    /// sequence is mirrored into a closed walk before it is stored. A roundtrip has to be declared
    /// as a closed walk already.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        if self.bus_ids_by_name.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }

        let mut stops = stop_names.iter()
            .map(|stop_name| self.find_stop_id(stop_name.as_ref())
                .ok_or_else(|| UnknownStopError(stop_name.as_ref().to_string())))
            .collect::<Result<Vec<StopId>, UnknownStopError>>()?;

        if is_roundtrip && stops.first() != stops.last() {
            return Err(CatalogueError::OpenRoundtrip(name.to_string()));
        }

        if !is_roundtrip && stops.len() > 1 {
            let way_back = stops.iter().rev().skip(1).copied().collect_vec();
            stops.extend(way_back);
        }

        let id = BusId(self.buses.len() as u32);
        for stop in &stops {
            self.buses_by_stop[stop.index()].insert(id);
        }
        self.bus_ids_by_name.insert(name.to_string(), id);

        debug!(target: "catalogue", "Added bus '{}' with {} stops (roundtrip: {})", name, stops.len(), is_roundtrip);
        self.buses.push(Bus { id, name: name.to_string(), stops, is_roundtrip });

        Ok(id)
    }

    /// Stores the directed road distance `from -> to`, replacing a previous value for that pair.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: f64) -> Result<(), CatalogueError> {
        let from_id = self.find_stop_id(from).ok_or_else(|| UnknownStopError(from.to_string()))?;
        let to_id = self.find_stop_id(to).ok_or_else(|| UnknownStopError(to.to_string()))?;

        if !meters.is_finite() || meters < 0.0 {
            return Err(CatalogueError::InvalidDistance { from: from.to_string(), to: to.to_string(), meters });
        }

        self.distances.insert((from_id, to_id), meters);
        Ok(())
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.find_stop_id(name).map(|id| self.stop(id))
    }

    pub fn find_stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids_by_name.get(name).copied()
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_ids_by_name.get(name).map(|id| self.bus(*id))
    }

    /// Panics if the id was not handed out by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Panics if the id was not handed out by this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// The explicitly stored directed distance. Never falls back to the opposite direction.
    pub fn find_distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.distances.get(&(from, to)).copied()
    }

    /// Road distance for travelling `from -> to`: the explicit entry for that direction, else the
    /// explicit entry for `to -> from`. Input declares a distance once per pair unless the two
    /// directions differ.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Option<f64> {
        self.find_distance(from, to)
            .or_else(|| self.find_distance(to, from))
    }

    pub fn compute_unique_stop_count(&self, bus: &Bus) -> usize {
        bus.stops.iter().unique().count()
    }

    pub fn compute_route_distance_info(&self, bus: &Bus) -> RouteDistanceInfo {
        let (route_length, geo_length) = bus.stops.iter()
            .tuple_windows()
            .fold((0.0, 0.0), |(real, geo), (from, to)| {
                // A missing road distance does not add to the length
                let road = self.road_distance(*from, *to).unwrap_or(0.0);
                let straight = great_circle_distance(self.stop(*from).coordinates, self.stop(*to).coordinates);
                (real + road, geo + straight)
            });

        let route_curvature = if geo_length > 0.0 && geo_length.is_finite() {
            route_length / geo_length
        } else {
            0.0
        };

        RouteDistanceInfo { route_length, route_curvature }
    }

    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        let bus = self.find_bus(name)?;

        Some(BusInfo {
            name: bus.name.clone(),
            stop_count: bus.stops.len(),
            unique_stop_count: self.compute_unique_stop_count(bus),
            distance: self.compute_route_distance_info(bus),
        })
    }

    /// Names of all buses serving the stop, sorted and without duplicates.
    /// `None` if there is no such stop.
    pub fn find_buses_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.find_stop_id(name)?;

        let names = self.buses_by_stop[id.index()].iter()
            .map(|bus| self.bus(*bus).name.as_str())
            .sorted()
            .collect_vec();

        Some(names)
    }

    /// Buses in insertion order. Buses without stops are only included if `include_empty` is set.
    pub fn buses(&self, include_empty: bool) -> impl Iterator<Item = &Bus> + '_ {
        self.buses.iter()
            .filter(move |bus| include_empty || !bus.is_empty())
    }

    /// Stops in insertion order. Stops no bus drives to are only included if `include_unserved`
    /// is set.
    pub fn stops(&self, include_unserved: bool) -> impl Iterator<Item = &Stop> + '_ {
        self.stops.iter()
            .filter(move |stop| include_unserved || !self.buses_by_stop[stop.id.index()].is_empty())
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}
