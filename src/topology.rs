//! Cluster topology: the nodes a deployment runs on and their roles.
//!
//! A topology is the input to the dashboard builder. Nodes carrying the
//! `designations` key in their extra info form the storage (Ceph) pool;
//! every other node is treated as a client.

use std::collections::BTreeMap;
use std::fs;

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::TopologyError;

/// Key in a node's extra info marking it as part of the storage pool.
pub const DESIGNATION_KEY: &str = "designations";

/// A single cluster node as reported by the provisioner.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Publicly reachable address, scraped by Prometheus at `address:port`.
    pub ip_public: String,
    /// Free-form metadata attached by the provisioner.
    #[serde(default)]
    pub extra_info: BTreeMap<String, String>,
}

impl Node {
    /// Creates a client node with no extra info.
    pub fn client(ip_public: impl Into<String>) -> Self {
        Self {
            ip_public: ip_public.into(),
            extra_info: BTreeMap::new(),
        }
    }

    /// Creates a node carrying a storage designation.
    pub fn storage(ip_public: impl Into<String>) -> Self {
        let mut extra_info = BTreeMap::new();
        extra_info.insert(DESIGNATION_KEY.to_string(), String::new());

        Self {
            ip_public: ip_public.into(),
            extra_info,
        }
    }

    /// Whether this node serves the storage role.
    pub fn is_storage(&self) -> bool {
        self.extra_info.contains_key(DESIGNATION_KEY)
    }
}

/// The full set of nodes in a deployment, in provisioning order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Topology {
    pub nodes: Vec<Node>,
}

impl Topology {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Loads a topology from a JSON file.
    ///
    /// A node without a usable public address is rejected here, before any
    /// query expression is formatted from it.
    pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Self, TopologyError> {
        let text = fs::read_to_string(path.as_ref())?;
        let topology: Topology = serde_json::from_str(&text)?;
        topology.validate()?;

        Ok(topology)
    }

    fn validate(&self) -> Result<(), TopologyError> {
        for (index, node) in self.nodes.iter().enumerate() {
            if node.ip_public.is_empty() {
                return Err(TopologyError::MissingAddress(index));
            }
        }

        Ok(())
    }

    /// Splits the nodes into `(storage, clients)`, preserving input order.
    ///
    /// The split is total and disjoint: every node lands in exactly one of
    /// the two subsets.
    pub fn partition(&self) -> (Vec<&Node>, Vec<&Node>) {
        self.nodes.iter().partition(|node| node.is_storage())
    }
}
