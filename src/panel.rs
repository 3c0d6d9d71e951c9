//! The four dashboard panels and the query expressions behind them.
//!
//! Storage panels track the Ceph pool, client panels the remaining nodes.
//! Panel ids and grid positions are literal constants of the deployed
//! dashboard layout and must not be derived from the topology.

use serde_json::{Map, Value, json};

use crate::defaults;
use crate::topology::Node;

/// Formats every node as `address:port` and joins them with `|` into the
/// regex alternation used to match Prometheus `instance` labels.
///
/// An empty node list yields an empty alternation, so the resulting query
/// matches nothing. Grafana renders such a panel empty rather than failing,
/// and the deployed dashboards rely on that.
pub(crate) fn instance_alternation(nodes: &[&Node], port: u16) -> String {
    let hosts: Vec<String> = nodes
        .iter()
        .map(|node| format!("{}:{}", node.ip_public, port))
        .collect();

    hosts.join("|")
}

/// Busy-CPU percentage over a 1m window, averaged per instance.
fn cpu_expr(alternation: &str) -> String {
    format!(
        "100 - (avg by (instance) (rate(node_cpu_seconds_total{{job=\"node\",mode=\"idle\",instance=~\"{alternation}\"}}[1m])) * 100)"
    )
}

/// The single query target of a panel.
fn target(expr: String, ref_id: &str) -> Value {
    json!([
        {
            "exemplar": true,
            "expr": expr,
            "interval": "",
            "legendFormat": "",
            "refId": ref_id
        }
    ])
}

/// Composes one panel object from the shared style blocks plus the
/// panel-specific id, grid position, targets and title.
fn compose(id: u64, grid_pos: Value, targets: Value, title: &str) -> Value {
    let mut panel = Map::new();

    for block in [
        json!({"id": id, "gridPos": grid_pos}),
        defaults::axes(),
        defaults::legend(),
        defaults::lines(),
        defaults::misc(),
        defaults::style(),
        defaults::time(),
        defaults::tooltip(),
        json!({"targets": targets, "title": title}),
    ] {
        if let Value::Object(map) = block {
            panel.extend(map);
        }
    }

    Value::Object(panel)
}

/// CPU utilization of the storage pool.
pub(crate) fn storage_cpu(nodes: &[&Node], port: u16) -> Value {
    let expr = cpu_expr(&instance_alternation(nodes, port));

    compose(
        10,
        json!({"h": 8, "w": 12, "x": 12, "y": 0}),
        target(expr, "Average"),
        "Ceph CPU Usage (%)",
    )
}

/// Disk read throughput of the storage pool.
pub(crate) fn storage_disk(nodes: &[&Node], port: u16) -> Value {
    let alternation = instance_alternation(nodes, port);
    let expr = format!(
        "rate(node_disk_read_bytes_total{{device=\"nvme0n1\", instance=~\"{alternation}\"}}[5m])"
    );

    compose(
        8,
        json!({"h": 8, "w": 12, "x": 0, "y": 8}),
        target(expr, "A"),
        "Storage Disk I/O",
    )
}

/// CPU utilization of the client nodes.
pub(crate) fn client_cpu(nodes: &[&Node], port: u16) -> Value {
    let expr = cpu_expr(&instance_alternation(nodes, port));

    compose(
        2,
        json!({"h": 8, "w": 12, "x": 0, "y": 0}),
        target(expr, "avg"),
        "Client CPU Usage (%)",
    )
}

/// Network receive throughput of the client nodes.
pub(crate) fn client_network(nodes: &[&Node], port: u16) -> Value {
    let alternation = instance_alternation(nodes, port);
    let expr = format!(
        "rate(node_network_receive_bytes_total{{device=\"eno1d1\",instance=~\"{alternation}\"}}[5m])"
    );

    compose(
        6,
        json!({"h": 8, "w": 12, "x": 12, "y": 8}),
        target(expr, "A"),
        "Client Network I/O",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(nodes: &[Node]) -> Vec<&Node> {
        nodes.iter().collect()
    }

    #[test]
    fn alternation_keeps_input_order() {
        let nodes = [Node::client("10.0.0.2"), Node::client("10.0.0.1")];

        assert_eq!(
            instance_alternation(&refs(&nodes), 9100),
            "10.0.0.2:9100|10.0.0.1:9100"
        );
    }

    #[test]
    fn alternation_of_no_nodes_is_empty() {
        assert_eq!(instance_alternation(&[], 9100), "");
    }

    #[test]
    fn storage_cpu_matches_node_instances() {
        let nodes = [Node::storage("10.0.0.1")];
        let panel = storage_cpu(&refs(&nodes), 9100);
        let expr = panel["targets"][0]["expr"].as_str().unwrap();

        assert!(expr.contains("instance=~\"10.0.0.1:9100\""));
        assert!(expr.contains("node_cpu_seconds_total"));
        assert_eq!(panel["targets"][0]["refId"], "Average");
        assert_eq!(panel["title"], "Ceph CPU Usage (%)");
    }

    #[test]
    fn client_network_matches_node_instances() {
        let nodes = [Node::client("10.0.0.2")];
        let panel = client_network(&refs(&nodes), 9100);
        let expr = panel["targets"][0]["expr"].as_str().unwrap();

        assert!(expr.contains("instance=~\"10.0.0.2:9100\""));
        assert!(expr.contains("node_network_receive_bytes_total"));
    }

    #[test]
    fn panel_ids_and_grid_positions_are_pinned() {
        let cases = [
            (storage_cpu(&[], 9090), 10, (8, 12, 12, 0)),
            (storage_disk(&[], 9090), 8, (8, 12, 0, 8)),
            (client_cpu(&[], 9090), 2, (8, 12, 0, 0)),
            (client_network(&[], 9090), 6, (8, 12, 12, 8)),
        ];

        for (panel, id, (h, w, x, y)) in cases {
            assert_eq!(panel["id"], id);
            assert_eq!(panel["gridPos"], json!({"h": h, "w": w, "x": x, "y": y}));
        }
    }

    #[test]
    fn panel_carries_every_style_block() {
        let panel = client_cpu(&[], 9090);

        for key in ["xaxis", "yaxes", "legend", "lines", "renderer", "tooltip", "timeFrom", "fill"] {
            assert!(panel.get(key).is_some(), "missing key: {key}");
        }
    }

    #[test]
    fn compose_drops_no_style_block_key() {
        let panel = client_cpu(&[], 9090);
        let panel = panel.as_object().unwrap();

        let blocks = [
            defaults::axes(),
            defaults::legend(),
            defaults::lines(),
            defaults::misc(),
            defaults::style(),
            defaults::time(),
            defaults::tooltip(),
        ];

        for block in blocks {
            for key in block.as_object().unwrap().keys() {
                assert!(panel.contains_key(key), "missing key: {key}");
            }
        }
    }

    #[test]
    fn empty_subset_yields_empty_alternation_in_expr() {
        let panel = storage_disk(&[], 9090);
        let expr = panel["targets"][0]["expr"].as_str().unwrap();

        assert!(expr.contains("instance=~\"\""));
    }
}
