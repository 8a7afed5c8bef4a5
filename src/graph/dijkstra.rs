use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Weight;
use crate::graph::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement<StationId> {
    /// Current shortest distance from origin to this station.
    pub distance: Weight,
    pub station: StationId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<StationId: Ord> Ord for HeapElement<StationId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl<StationId: Ord> PartialOrd for HeapElement<StationId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unpacks the shortest path from destination back to origin.
///
/// The previous map associates each reached station (key) with the edge and the station (value)
/// it was reached from. The origin is the only station without a previous station, the path is
/// only meaningful if the destination was reached from the origin.
pub fn unpack_path<StationId, EdgeId>(
    previous_map: &FxHashMap<StationId, (EdgeId, StationId)>,
    origin: StationId,
    destination: StationId,
    weight: Weight,
) -> Path<StationId, EdgeId>
where
    StationId: Copy + Eq + Hash,
    EdgeId: Copy,
{
    let mut stations = vec![destination];
    let mut edges = vec![];
    let mut next = destination;

    while let Some(&(edge, previous)) = previous_map.get(&next) {
        next = previous;
        edges.push(edge);
        stations.push(previous);
    }

    debug_assert!(next == origin, "predecessor chain does not end at origin");

    stations.reverse();
    edges.reverse();

    Path {
        weight,
        stations,
        edges,
    }
}
