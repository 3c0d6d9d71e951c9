pub use anyhow::Error as RuntimeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkydashError {
    #[error("Error while loading the cluster topology:\n{0}")]
    Topology(#[from] TopologyError),

    #[error("Error while writing the dashboard file:\n{0}")]
    Write(#[from] WriteError),
}

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Couldn't read topology file.\n{0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Couldn't parse topology file.\n{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Node {0} has no usable public address")]
    MissingAddress(usize),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Couldn't write the dashboard file.\n{0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Couldn't serialize the dashboard document.\n{0}")]
    Serialize(#[from] serde_json::Error),
}
