use crate::{Mode, Network, Weight, Weights};

/// Ordered sequence of stations from origin to destination, together with the edges connecting
/// each consecutive pair of stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<StationId, EdgeId> {
    /// Accumulated weight of the path, under the mode it was searched with.
    pub weight: Weight,
    pub stations: Vec<StationId>,
    pub edges: Vec<EdgeId>,
}

impl<StationId, EdgeId: Copy> Path<StationId, EdgeId> {
    /// Returns true if the path has no edges (origin and destination are the same station).
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sums cost and time independently over the edges of the path.
    /// The dimension that was not searched for is summed along the same edges.
    pub fn totals<G>(&self, graph: &G) -> Weights
    where
        G: Network<StationId = StationId, EdgeId = EdgeId>,
    {
        self.edges
            .iter()
            .filter_map(|&edge| graph.get_edge_weights(edge))
            .sum()
    }
}

/// Sums cost and time over every consecutive pair of stations of the path.
///
/// When parallel edges connect a pair of stations, the first edge with the lowest weight under
/// the given mode is used, which is the edge a search with the same mode relaxes. Returns None
/// if any consecutive pair of stations is not connected.
pub fn calculate_totals<G: Network>(
    graph: &G,
    stations: &[G::StationId],
    mode: Mode,
) -> Option<Weights> {
    stations
        .windows(2)
        .map(|window| {
            let [from, to] = [window[0], window[1]];
            graph
                .connecting_edges(from, to)
                .filter_map(|edge| graph.get_edge_weights(edge))
                .min_by_key(|weights| weights.get(mode))
        })
        .sum()
}

/// Returns true only if all the stations of the path are sequentially connected in the given
/// graph, and each edge of the path connects the corresponding pair of stations.
pub fn is_path_connected<G: Network>(graph: &G, path: &Path<G::StationId, G::EdgeId>) -> bool {
    if path.stations.is_empty() || path.edges.len() + 1 != path.stations.len() {
        return false;
    }

    path.stations
        .windows(2)
        .zip(&path.edges)
        .all(|(window, &edge)| graph.connecting_edges(window[0], window[1]).any(|e| e == edge))
}
