//! Fixed building blocks of the dashboard document.
//!
//! Everything in this module is a literal constant of the dashboard schema:
//! the top-level skeleton and the style sub-objects shared by every panel.
//! The values (ids, hash keys, plugin version) are pinned to the dashboard
//! already deployed with SkyhookDM, so regenerating the file for a new
//! topology changes only the query expressions.

use serde_json::{Value, json};

/// Port the Prometheus node exporter listens on when the caller does not
/// override it.
pub const DEFAULT_PROMETHEUS_PORT: u16 = 9090;

/// Filename used when the output destination is a directory.
pub const DEFAULT_FILENAME: &str = "spark_rados.json";

/// Top-level dashboard skeleton with an empty `panels` list.
pub(crate) fn skeleton() -> Value {
    json!({
        "description": "Dashboard showing CPU, Disk, and Network utilization of SkyhookDM",
        "editable": true,
        "gnetId": null,
        "graphTooltip": 0,
        "id": 1,
        "iteration": 1619523594477u64,
        "links": [],
        "panels": [],
        "refresh": "30s",
        "schemaVersion": 27,
        "style": "dark",
        "tags": [],
        "templating": {
            "list": [
                {
                    "description": "Hostname of the client node",
                    "error": null,
                    "hide": 2,
                    "label": "Client node",
                    "name": "client",
                    "query": "ms1243.utah.cloudlab.us",
                    "skipUrlSync": false,
                    "type": "constant"
                }
            ]
        },
        "time": {"from": "now-30m", "to": "now"},
        "timepicker": {
            "refresh_intervals": ["5s", "10s", "15s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d"]
        },
        "timezone": "",
        "title": "SkyhookDM-Arrow",
        "uid": "lxKiCIXMk",
        "version": 15
    })
}

/// Axis configuration for both the x- and y-axes.
pub(crate) fn axes() -> Value {
    json!({
        "xaxis": {"buckets": null, "mode": "time", "name": null, "show": true, "values": []},
        "yaxes": [
            {"$$hashKey": "object:104", "format": "short", "label": null, "logBase": 1, "max": "100", "min": "0", "show": true},
            {"$$hashKey": "object:105", "format": "short", "label": null, "logBase": 1, "max": null, "min": null, "show": true}
        ],
        "yaxis": {"align": false, "alignLevel": null}
    })
}

pub(crate) fn legend() -> Value {
    json!({
        "legend": {"avg": false, "current": false, "max": false, "min": false, "show": false, "total": false, "values": false}
    })
}

pub(crate) fn lines() -> Value {
    json!({"lines": true, "linewidth": 1, "spaceLength": 10, "steppedLine": false})
}

pub(crate) fn misc() -> Value {
    json!({
        "hiddenSeries": false,
        "nullPointMode": "null",
        "options": {"alertThreshold": true},
        "percentage": false,
        "pluginVersion": "7.5.4",
        "pointradius": 2,
        "points": false,
        "renderer": "flot",
        "seriesOverrides": [],
        "stack": true,
        "thresholds": [],
        "type": "graph"
    })
}

pub(crate) fn style() -> Value {
    json!({
        "aliasColors": {},
        "bars": false,
        "dashLength": 10,
        "dashes": false,
        "datasource": null,
        "fieldConfig": {"defaults": {}, "overrides": []},
        "fill": 1,
        "fillGradient": 0
    })
}

pub(crate) fn time() -> Value {
    json!({"timeFrom": null, "timeRegions": [], "timeShift": null})
}

pub(crate) fn tooltip() -> Value {
    json!({"tooltip": {"shared": true, "sort": 0, "value_type": "individual"}})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_fixed_metadata() {
        let doc = skeleton();

        assert_eq!(doc["title"], "SkyhookDM-Arrow");
        assert_eq!(doc["uid"], "lxKiCIXMk");
        assert_eq!(doc["schemaVersion"], 27);
        assert_eq!(doc["refresh"], "30s");
        assert_eq!(doc["panels"], json!([]));
    }

    #[test]
    fn skeleton_templating_holds_client_constant() {
        let doc = skeleton();
        let var = &doc["templating"]["list"][0];

        assert_eq!(var["name"], "client");
        assert_eq!(var["type"], "constant");
        assert_eq!(var["query"], "ms1243.utah.cloudlab.us");
    }

    #[test]
    fn style_blocks_are_objects() {
        for block in [axes(), legend(), lines(), misc(), style(), time(), tooltip()] {
            assert!(block.is_object());
        }
    }
}
