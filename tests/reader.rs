mod graph;

use std::path::PathBuf;

use station_routes::{Network, ReadError, ReaderConfig, read_graph_from_path, read_records};
use test_log::test;

use crate::graph::{NETWORK_GRAPH, station};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file)
}

#[test]
fn reader_read_graph_from_path_001() {
    let graph = read_graph_from_path(&ReaderConfig::default(), data_path("network.csv")).unwrap();

    assert_eq!(graph.station_count(), NETWORK_GRAPH.station_count());
    assert_eq!(graph.edge_count(), NETWORK_GRAPH.edge_count());

    for (station, label) in graph.stations() {
        assert_eq!(NETWORK_GRAPH.station_id(label.as_str()), Some(station));
        assert_eq!(
            graph.station_edges(station).collect::<Vec<_>>(),
            NETWORK_GRAPH.station_edges(station).collect::<Vec<_>>()
        );
    }

    // labels are interned in the same order, whitespace trimmed
    for label in ["Amsterdam", "Zwolle", "Assen"] {
        assert_eq!(station(&graph, label), station(&NETWORK_GRAPH, label));
    }
}

#[test]
fn reader_read_graph_from_path_002() {
    let result = read_graph_from_path(&ReaderConfig::default(), data_path("missing.csv"));
    assert!(matches!(result, Err(ReadError::Csv(error)) if error.is_io_error()));
}

#[test]
fn reader_read_records_001() {
    let records = read_records(
        &ReaderConfig::default(),
        include_str!("data/network.csv").as_bytes(),
    )
    .unwrap();

    // the header is discarded, malformed records are still returned
    assert_eq!(records.len(), 24);
    assert_eq!(records.iter().filter(|r| r.len() != 4).count(), 1);
}
