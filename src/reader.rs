use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::{Graph, ReadError};

#[derive(Debug, Clone, Copy)]
pub struct ReaderConfig {
    /// Discard the first record (departure, destination, cost, time column names).
    pub has_headers: bool,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            has_headers: true,
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    fn builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            // records with a wrong number of fields are skipped by the graph builder
            .flexible(true);
        builder
    }
}

/// Reads all the tabular edge records, without validating them.
pub fn read_records<R: io::Read>(
    config: &ReaderConfig,
    reader: R,
) -> Result<Vec<StringRecord>, ReadError> {
    let records = config
        .builder()
        .from_reader(reader)
        .into_records()
        .collect::<Result<_, _>>()?;
    Ok(records)
}

/// Reads the (departure, destination, cost, time) edge records and builds the station graph.
/// Malformed records are skipped.
pub fn read_graph<R: io::Read>(config: &ReaderConfig, reader: R) -> Result<Graph, ReadError> {
    let records = read_records(config, reader)?;
    Ok(Graph::from_records(&records))
}

/// Reads the station graph from a CSV file.
pub fn read_graph_from_path(
    config: &ReaderConfig,
    path: impl AsRef<Path>,
) -> Result<Graph, ReadError> {
    let path = path.as_ref();
    info!("Reading station graph from {}", path.display());

    let records = config
        .builder()
        .from_path(path)?
        .into_records()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Graph::from_records(&records))
}
