use std::sync::LazyLock;

use station_routes::{Graph, ReaderConfig, StationId, read_graph};

/// Fixture network: 15 stations in two components, 20 edges (one pair of parallel edges
/// between Amsterdam and Utrecht) and 4 malformed records.
pub static NETWORK_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    let records = include_str!("../data/network.csv");
    read_graph(&ReaderConfig::default(), records.as_bytes()).unwrap()
});

pub fn station(graph: &Graph, label: &str) -> StationId {
    graph
        .station_id(label)
        .unwrap_or_else(|| panic!("{label} is not a station"))
}
