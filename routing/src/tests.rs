use crate::settings::RoutingSettings;
use catalogue::TransitCatalogue;
use common::types::Coordinates;

pub(crate) fn settings(wait_time: u32, velocity: f64) -> RoutingSettings {
    RoutingSettings::new(wait_time, velocity).unwrap()
}

/// Builds a catalogue in load order: stops, then distances, then buses. Stops are placed a
/// little apart from each other along a meridian.
pub(crate) fn catalogue_from(
    stops: &[&str],
    distances: &[(&str, &str, f64)],
    buses: &[(&str, &[&str], bool)],
) -> TransitCatalogue {
    let mut catalogue = TransitCatalogue::new();

    for (idx, name) in stops.iter().enumerate() {
        catalogue.add_stop(name, Coordinates::new(55.0 + 0.01 * idx as f64, 37.0)).unwrap();
    }
    for (from, to, meters) in distances {
        catalogue.add_distance(from, to, *meters).unwrap();
    }
    for (name, stops, is_roundtrip) in buses {
        catalogue.add_bus(name, *stops, *is_roundtrip).unwrap();
    }

    catalogue
}

/// Test case 1 is probably the most simple case (that would still make sense):
/// - 2 stops, one degree of longitude apart on the equator
/// - 1 bus going back and forth between them, 1km each way
pub(crate) mod case_1 {
    use super::*;

    pub(crate) fn generate_catalogue() -> TransitCatalogue {
        let mut catalogue = TransitCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        catalogue.add_stop("B", Coordinates::new(0.0, 1.0)).unwrap();
        catalogue.add_distance("A", "B", 1_000.0).unwrap();
        catalogue.add_distance("B", "A", 1_000.0).unwrap();
        catalogue.add_bus("X", &["A", "B"], false).unwrap();
        catalogue
    }
}

/// Test case 2 has
/// - 5 stops
/// - 3 buses, none of them roundtrips
///
/// Bus 1: A <-> B (1km)
/// Bus 2: B <-> C <-> D <-> E (2km, 5km, 1km)
/// Bus 3: A <-> D <-> E (3km, 1km)
///
/// Going from A to C requires changing from bus 1 to bus 2 at B. A to E is fastest when
/// staying on bus 3.
pub(crate) mod case_2 {
    use super::*;

    pub(crate) fn generate_catalogue() -> TransitCatalogue {
        catalogue_from(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 1_000.0),
                ("B", "C", 2_000.0),
                ("C", "D", 5_000.0),
                ("D", "E", 1_000.0),
                ("A", "D", 3_000.0),
            ],
            &[
                ("1", &["A", "B"], false),
                ("2", &["B", "C", "D", "E"], false),
                ("3", &["A", "D", "E"], false),
            ],
        )
    }
}
