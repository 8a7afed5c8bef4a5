//! Route queries between two stations of a [`Graph`].
//!
//! 1. Resolve the departure and destination labels into stations of the graph.
//! 2. Compute the shortest path tree under the weight selected by the mode.
//! 3. Reconstruct the path from the destination back to the departure.
//! 4. Sum cost and time along the edges of the path.

mod shortest_path;

use tracing::{debug, info};

pub use crate::routing::shortest_path::{
    ShortestPathTree, shortest_path_tree, shortest_path_tree_from,
};
use crate::{EdgeId, Graph, Mode, Path, QueryError, Station, StationId, Weight, Weights};

#[derive(Debug, Clone, Copy)]
pub struct RouteConfig {
    /// Weight dimension the search minimizes.
    pub mode: Mode,
    /// Paths whose accumulated weight (under the mode) exceeds this limit are not explored.
    pub max_weight: Weight,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            max_weight: Weight::INFINITY,
        }
    }
}

impl From<Mode> for RouteConfig {
    fn from(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

/// Best route found between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub mode: Mode,
    /// Labels of the stations from departure to destination.
    pub stations: Vec<Station>,
    pub path: Path<StationId, EdgeId>,
    /// Cost and time summed along the path, regardless of the mode.
    pub totals: Weights,
}

impl Route {
    pub const fn total_cost(&self) -> Weight {
        self.totals.cost
    }

    pub const fn total_time(&self) -> Weight {
        self.totals.time
    }
}

/// Finds the cheapest or fastest route (according to the config mode) between two stations.
///
/// Returns an error if either station doesn't belong to the graph, and None if the destination
/// cannot be reached from the departure.
pub fn find_route(
    config: &RouteConfig,
    graph: &Graph,
    departure: &str,
    destination: &str,
) -> Result<Option<Route>, QueryError> {
    info!("Finding route {departure:?} -> {destination:?} with {config:?}");

    // Step – 1 Resolve the stations
    let origin = graph
        .station_id(departure)
        .ok_or_else(|| QueryError::DepartureNotFound(departure.trim().to_owned()))?;
    let target = graph
        .station_id(destination)
        .ok_or_else(|| QueryError::DestinationNotFound(destination.trim().to_owned()))?;

    // Step – 2 Compute the shortest path tree
    let tree = shortest_path_tree(config, graph, origin, target);

    // Step – 3 Reconstruct the path
    let Some(path) = tree.path(target) else {
        debug!("No route found between {departure:?} and {destination:?}");
        return Ok(None);
    };

    // Step – 4 Sum both weight dimensions
    let totals = path.totals(graph);
    debug_assert!(totals.get(config.mode).approx_eq(path.weight));

    let stations = path
        .stations
        .iter()
        .filter_map(|&station| graph.station(station))
        .cloned()
        .collect();

    Ok(Some(Route {
        mode: config.mode,
        stations,
        path,
        totals,
    }))
}
