use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Network, RecordError, Station, Weight, Weights};

/// Dense index of a station in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Dense index of an edge in a [`Graph`], in record insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Undirected connection between two stations, traversable in both directions with the same
/// weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub stations: [StationId; 2],
    pub weights: Weights,
}

impl Edge {
    /// Gets the station at the other end of the edge, or None if the edge is not incident to the
    /// given station.
    pub fn opposite(&self, station: StationId) -> Option<StationId> {
        match self.stations {
            [a, b] if a == station => Some(b),
            [a, b] if b == station => Some(a),
            _ => None,
        }
    }
}

/// A well-formed edge record: two station labels and their connection weights.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub departure: Station,
    pub destination: Station,
    pub weights: Weights,
}

impl EdgeRecord {
    /// Parses a tabular record made of (departure, destination, cost, time) fields.
    /// Fields are trimmed of surrounding whitespace, any field past the fourth is ignored.
    pub fn parse<R, S>(fields: R) -> Result<Self, RecordError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = fields.into_iter().take(4).collect();
        let [departure, destination, cost, time] = fields.as_slice() else {
            return Err(RecordError::MissingFields(fields.len()));
        };

        let departure = Station::new(departure);
        let destination = Station::new(destination);
        if departure.is_empty() || destination.is_empty() {
            return Err(RecordError::EmptyStation);
        }

        let cost = parse_weight(cost.as_ref())
            .ok_or_else(|| RecordError::InvalidCost(cost.as_ref().to_owned()))?;
        let time = parse_weight(time.as_ref())
            .ok_or_else(|| RecordError::InvalidTime(time.as_ref().to_owned()))?;

        for weight in [cost, time] {
            if weight < Weight::ZERO {
                return Err(RecordError::NegativeWeight(weight.value()));
            }
        }

        Ok(Self {
            departure,
            destination,
            weights: Weights { cost, time },
        })
    }
}

fn parse_weight(text: &str) -> Option<Weight> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .map(Weight::new)
}

/// Station network built once from edge records and read-only afterwards.
///
/// Every accepted record becomes one undirected edge inserted into the adjacency list of both
/// its stations. Parallel edges between the same pair of stations are all retained.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Vec<Station>,
    station_ids: FxHashMap<Station, StationId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(EdgeId, StationId)>>,
}

impl Graph {
    /// Builds the graph from tabular (departure, destination, cost, time) records.
    /// Malformed records are skipped: the stations they mention are only added to the graph if
    /// they appear in some other well-formed record.
    pub fn from_records<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::default();
        let mut skipped = 0;

        for (index, record) in records.into_iter().enumerate() {
            match EdgeRecord::parse(record) {
                Ok(record) => {
                    graph.insert_edge(record);
                }
                Err(error) => {
                    debug!("Skipping edge record {index}: {error}");
                    skipped += 1;
                }
            }
        }

        debug!(
            "Built graph with {} stations and {} edges ({skipped} records skipped)",
            graph.station_count(),
            graph.edge_count()
        );

        graph
    }

    fn insert_edge(&mut self, record: EdgeRecord) -> EdgeId {
        let a = self.insert_station(record.departure);
        let b = self.insert_station(record.destination);

        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge {
            stations: [a, b],
            weights: record.weights,
        });

        self.adjacency[a.index()].push((edge, b));
        self.adjacency[b.index()].push((edge, a));

        edge
    }

    fn insert_station(&mut self, station: Station) -> StationId {
        if let Some(&id) = self.station_ids.get(&station) {
            return id;
        }

        let id = StationId(self.stations.len());
        self.stations.push(station.clone());
        self.station_ids.insert(station, id);
        self.adjacency.push(vec![]);
        id
    }

    /// Gets the ID of the station with the given label, ignoring surrounding whitespace.
    pub fn station_id(&self, label: &str) -> Option<StationId> {
        self.station_ids.get(label.trim()).copied()
    }

    pub fn station(&self, station: StationId) -> Option<&Station> {
        self.stations.get(station.index())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.station_id(label).is_some()
    }

    /// Gets an iterator over all the stations, in order of first appearance in the records.
    pub fn stations(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, station)| (StationId(i), station))
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Gets an iterator over all the edges, in record order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i), edge))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Network for Graph {
    type StationId = StationId;
    type EdgeId = EdgeId;

    fn get_edge_weights(&self, edge: Self::EdgeId) -> Option<Weights> {
        self.edge(edge).map(|e| e.weights)
    }

    fn station_edges(
        &self,
        station: Self::StationId,
    ) -> impl Iterator<Item = (Self::EdgeId, Self::StationId)> {
        self.adjacency
            .get(station.index())
            .into_iter()
            .flatten()
            .copied()
    }
}
