use crate::types::input::{BaseRequest, BusRequest, StopRequest};
use catalogue::errors::CatalogueError;
use catalogue::TransitCatalogue;
use common::types::Coordinates;
use itertools::Itertools;
use log::info;

/// Loads the base requests into a fresh catalogue: all stops first, then their road distances,
/// then the buses. The order of the requests within the document does not matter.
pub fn load_catalogue(base_requests: &[BaseRequest]) -> Result<TransitCatalogue, CatalogueError> {
    let (stops, buses): (Vec<&StopRequest>, Vec<&BusRequest>) = base_requests.iter()
        .partition_map(|request| match request {
            BaseRequest::Stop(stop) => itertools::Either::Left(stop),
            BaseRequest::Bus(bus) => itertools::Either::Right(bus),
        });

    let mut catalogue = TransitCatalogue::new();

    for stop in &stops {
        catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
    }
    for stop in &stops {
        for (neighbour, meters) in &stop.road_distances {
            catalogue.add_distance(&stop.name, neighbour, *meters)?;
        }
    }
    for bus in &buses {
        catalogue.add_bus(&bus.name, bus.stops.as_slice(), bus.is_roundtrip)?;
    }

    info!(target: "requests", "Loaded {} stops and {} buses", catalogue.stop_count(), catalogue.bus_count());

    Ok(catalogue)
}
