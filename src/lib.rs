#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod builder;
mod defaults;
mod error;
mod panel;
mod topology;
mod write;

use camino::{Utf8Path, Utf8PathBuf};

pub use crate::builder::DashboardBuilder;
pub use crate::defaults::{DEFAULT_FILENAME, DEFAULT_PROMETHEUS_PORT};
pub use crate::error::*;
pub use crate::topology::{DESIGNATION_KEY, Node, Topology};
pub use crate::write::write_dashboard;

/// Builds the dashboard for `topology` and writes it to `output`.
///
/// When `prometheus_port` is `None` the configured default is used. If
/// `output` is a directory the file lands there under [`DEFAULT_FILENAME`].
/// Returns the resolved path of the written file.
pub fn generate(
    topology: &Topology,
    output: impl AsRef<Utf8Path>,
    prometheus_port: Option<u16>,
) -> Result<Utf8PathBuf, SkydashError> {
    let port = prometheus_port.unwrap_or(DEFAULT_PROMETHEUS_PORT);
    let document = DashboardBuilder::new(topology, port).build();
    let path = write::write_dashboard(&document, output.as_ref())?;

    Ok(path)
}

/// Like [`generate`], with the topology loaded from a JSON file first.
pub fn generate_from_file(
    topology: impl AsRef<Utf8Path>,
    output: impl AsRef<Utf8Path>,
    prometheus_port: Option<u16>,
) -> Result<Utf8PathBuf, SkydashError> {
    let topology = Topology::from_file(topology)?;

    generate(&topology, output, prometheus_port)
}
