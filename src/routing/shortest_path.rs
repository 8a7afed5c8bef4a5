use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::dijkstra::{HeapElement, unpack_path};
use crate::graph::path::Path;
use crate::{Network, RouteConfig, Weight};

/// Result of a single-source search: shortest known distance from the origin to every reached
/// station, and the edge and station each of them was reached from.
///
/// When the search stops at a destination, only the stations settled before the destination
/// (and the destination itself) carry their final distance.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<StationId, EdgeId> {
    origin: StationId,
    shortest_distances: FxHashMap<StationId, Weight>,
    previous_map: FxHashMap<StationId, (EdgeId, StationId)>,
}

impl<StationId: Eq + Hash, EdgeId: PartialEq> PartialEq for ShortestPathTree<StationId, EdgeId> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.shortest_distances == other.shortest_distances
            && self.previous_map == other.previous_map
    }
}

impl<StationId, EdgeId> ShortestPathTree<StationId, EdgeId>
where
    StationId: Copy + Eq + Hash,
    EdgeId: Copy,
{
    pub const fn origin(&self) -> StationId {
        self.origin
    }

    /// Gets the shortest known distance from the origin, infinity if the station wasn't reached.
    pub fn distance(&self, station: StationId) -> Weight {
        self.shortest_distances
            .get(&station)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    pub fn is_reachable(&self, station: StationId) -> bool {
        self.distance(station).is_finite()
    }

    pub const fn distances(&self) -> &FxHashMap<StationId, Weight> {
        &self.shortest_distances
    }

    /// Gets the station and edge the station was reached from, None for the origin and for the
    /// stations that were not reached.
    pub fn previous(&self, station: StationId) -> Option<(EdgeId, StationId)> {
        self.previous_map.get(&station).copied()
    }

    /// Reconstructs the path from the origin to the destination, None if there is no path.
    pub fn path(&self, destination: StationId) -> Option<Path<StationId, EdgeId>> {
        let distance = self.distance(destination);
        if !distance.is_finite() {
            return None;
        }

        Some(unpack_path(
            &self.previous_map,
            self.origin,
            destination,
            distance,
        ))
    }
}

/// Computes the shortest distances from the origin under the weight selected by the config mode,
/// stopping as soon as the destination distance is final.
///
/// The destination is unreachable if its distance is infinite. Neither station is required to
/// belong to the graph: a missing origin reaches no other station and a missing destination is
/// never reached.
pub fn shortest_path_tree<G: Network>(
    config: &RouteConfig,
    graph: &G,
    origin: G::StationId,
    destination: G::StationId,
) -> ShortestPathTree<G::StationId, G::EdgeId> {
    debug!("Computing shortest path {origin:?} -> {destination:?} with {config:?}");
    search(config, graph, origin, Some(destination))
}

/// Computes the shortest distances from the origin to every reachable station under the weight
/// selected by the config mode.
pub fn shortest_path_tree_from<G: Network>(
    config: &RouteConfig,
    graph: &G,
    origin: G::StationId,
) -> ShortestPathTree<G::StationId, G::EdgeId> {
    debug!("Computing shortest paths from {origin:?} with {config:?}");
    search(config, graph, origin, None)
}

fn search<G: Network>(
    config: &RouteConfig,
    graph: &G,
    origin: G::StationId,
    destination: Option<G::StationId>,
) -> ShortestPathTree<G::StationId, G::EdgeId> {
    // (current) shortest distance from origin to this station
    let mut shortest_distances = FxHashMap::from_iter([(origin, Weight::ZERO)]);

    // previous station (value) on the current best known path from origin to this station (key)
    let mut previous_map: FxHashMap<G::StationId, (G::EdgeId, G::StationId)> =
        FxHashMap::default();

    // priority queue of discovered stations that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        station: origin,
        distance: Weight::ZERO,
    }]);

    while let Some(element) = frontier.pop() {
        // check if we already know a cheaper way to get to this station from the origin
        let shortest_distance = shortest_distances
            .get(&element.station)
            .copied()
            .unwrap_or(Weight::INFINITY);
        if element.distance > shortest_distance {
            continue;
        }

        if Some(element.station) == destination {
            debug!("Settled {:?} at {}", element.station, element.distance);
            break;
        }

        for (edge, station_to) in graph.station_edges(element.station) {
            let Some(weights) = graph.get_edge_weights(edge) else {
                continue;
            };

            let distance = element.distance + weights.get(config.mode);
            if distance > config.max_weight {
                continue;
            }

            let shortest_distance = shortest_distances
                .get(&station_to)
                .copied()
                .unwrap_or(Weight::INFINITY);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(station_to, distance);
                previous_map.insert(station_to, (edge, element.station));
                frontier.push(HeapElement {
                    station: station_to,
                    distance,
                });
            }
        }
    }

    ShortestPathTree {
        origin,
        shortest_distances,
        previous_map,
    }
}
