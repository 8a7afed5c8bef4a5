use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RecordError {
    #[error("Edge record has {0} fields, expected at least 4")]
    MissingFields(usize),
    #[error("Edge record has an empty station label")]
    EmptyStation,
    #[error("Edge record cost is not a number: {0:?}")]
    InvalidCost(String),
    #[error("Edge record time is not a number: {0:?}")]
    InvalidTime(String),
    #[error("Edge record weight is negative: {0}")]
    NegativeWeight(f64),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum QueryError {
    #[error("Departure station not found in the network: {0}")]
    DepartureNotFound(String),
    #[error("Destination station not found in the network: {0}")]
    DestinationNotFound(String),
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Cannot read edge records: {0}")]
    Csv(#[from] csv::Error),
}
