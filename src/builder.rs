//! Assembly of the complete dashboard document.

use serde_json::Value;

use crate::defaults;
use crate::panel;
use crate::topology::Topology;

/// Builds one dashboard document for a cluster topology.
///
/// The builder is pure: it never touches the filesystem, and building twice
/// from the same inputs yields an identical document.
pub struct DashboardBuilder<'a> {
    topology: &'a Topology,
    prometheus_port: u16,
}

impl<'a> DashboardBuilder<'a> {
    pub fn new(topology: &'a Topology, prometheus_port: u16) -> Self {
        Self {
            topology,
            prometheus_port,
        }
    }

    /// Produces the document: the fixed skeleton with the four panels
    /// appended in layout order.
    pub fn build(&self) -> Value {
        let mut document = defaults::skeleton();
        let (storage, clients) = self.topology.partition();
        let port = self.prometheus_port;

        document["panels"] = Value::Array(vec![
            panel::storage_cpu(&storage, port),
            panel::storage_disk(&storage, port),
            panel::client_cpu(&clients, port),
            panel::client_network(&clients, port),
        ]);

        document
    }
}
