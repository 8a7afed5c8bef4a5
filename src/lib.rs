#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod reader;
mod routing;

pub use error::{QueryError, ReadError, RecordError};
pub use graph::path::{Path, calculate_totals, is_path_connected};
pub use graph::{Edge, EdgeId, EdgeRecord, Graph, Network, StationId};
pub use model::{Mode, Station, Weight, Weights};
pub use reader::{ReaderConfig, read_graph, read_graph_from_path, read_records};
pub use routing::{
    Route, RouteConfig, ShortestPathTree, find_route, shortest_path_tree, shortest_path_tree_from,
};
