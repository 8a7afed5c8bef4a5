use std::fmt::Debug;
use std::hash::Hash;

use crate::Weights;

/// Undirected station network.
/// Exposes the behavior the route search and the totals aggregation run on.
/// Implemented by [`Graph`], which is built from tabular edge records.
pub trait Network {
    /// Uniquely identify a station that belongs to the network.
    type StationId: Debug + Copy + Ord + Hash;
    /// Uniquely identify an (undirected) edge that belongs to the network.
    type EdgeId: Debug + Copy + Ord + Hash;

    /// Gets the cost and time of the edge, or None if the edge doesn't belong to the network.
    fn get_edge_weights(&self, edge: Self::EdgeId) -> Option<Weights>;

    /// Gets an iterator over all the edges incident to the station, in a deterministic order.
    /// For each edge returns the edge ID and the station at the other end of the edge.
    /// Parallel edges are all returned, a self-loop is returned twice.
    /// Returns an empty iterator if the station doesn't belong to the network.
    fn station_edges(
        &self,
        station: Self::StationId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::StationId)>;

    /// Returns the number of edge ends incident to the station.
    fn station_degree(&self, station: Self::StationId) -> usize {
        self.station_edges(station).count()
    }

    /// Gets an iterator over all the edges that directly connect the two stations.
    fn connecting_edges(
        &self,
        from: Self::StationId,
        to: Self::StationId,
    ) -> impl Iterator<Item = Self::EdgeId> {
        self.station_edges(from)
            .filter(move |&(_, station)| station == to)
            .map(|(edge, _)| edge)
    }
}

mod builder;
pub mod dijkstra;
pub mod path;

pub use builder::{Edge, EdgeId, EdgeRecord, Graph, StationId};
